use serde::{Deserialize, Serialize};

/// Way of supplying a proof to the scoring service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    Image,
    Pdf,
    Url,
    Text,
}

/// How a mode's input travels to the scoring service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    Multipart,
    Json,
}

impl InputMode {
    pub const ALL: [InputMode; 4] = [
        InputMode::Image,
        InputMode::Pdf,
        InputMode::Url,
        InputMode::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Image => "image",
            InputMode::Pdf => "pdf",
            InputMode::Url => "url",
            InputMode::Text => "text",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "image" => Some(InputMode::Image),
            "pdf" => Some(InputMode::Pdf),
            "url" => Some(InputMode::Url),
            "text" => Some(InputMode::Text),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Image => "Image",
            InputMode::Pdf => "PDF",
            InputMode::Url => "URL",
            InputMode::Text => "Text",
        }
    }

    /// Scoring service path, relative to its base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            InputMode::Image => "/image",
            InputMode::Pdf => "/pdf",
            InputMode::Url => "/url",
            InputMode::Text => "/text",
        }
    }

    pub fn transport(&self) -> Transport {
        match self {
            InputMode::Image | InputMode::Pdf => Transport::Multipart,
            InputMode::Url | InputMode::Text => Transport::Json,
        }
    }

    /// `accept` attribute for the file picker, if the mode takes a file.
    pub fn accept(&self) -> Option<&'static str> {
        match self {
            InputMode::Image => Some("image/*"),
            InputMode::Pdf => Some(".pdf"),
            InputMode::Url | InputMode::Text => None,
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
