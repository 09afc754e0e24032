use crate::mode::InputMode;
use crate::validate::{has_supported_extension, is_valid_url};

pub const UPLOAD_TOO_LARGE: &str = "Upload too large.";
pub const UNSUPPORTED_FILE: &str = "Not an accepted file format.";
pub const INVALID_URL: &str = "Invalid URL.";
pub const UNSUPPORTED_LINK: &str = "The linked file must be a PDF or image.";

#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Raw user input for one of the four submission paths.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Image(UploadedFile),
    Pdf(UploadedFile),
    Url(String),
    Text(String),
}

/// What to do with a submission before anything leaves the front-end.
#[derive(Clone, Debug, PartialEq)]
pub enum Plan {
    /// Nothing to submit; the view is left as is.
    Ignore,
    /// Client-side validation failed with this message.
    Reject(&'static str),
    Send(Submission),
}

impl Submission {
    pub fn mode(&self) -> InputMode {
        match self {
            Submission::Image(_) => InputMode::Image,
            Submission::Pdf(_) => InputMode::Pdf,
            Submission::Url(_) => InputMode::Url,
            Submission::Text(_) => InputMode::Text,
        }
    }
}

pub fn prepare(submission: Submission, max_upload_bytes: usize) -> Plan {
    match &submission {
        Submission::Image(file) => {
            if let Some(plan) = check_upload(file, max_upload_bytes) {
                return plan;
            }
            let is_image = file
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.starts_with("image/"));
            if !is_image {
                return Plan::Reject(UNSUPPORTED_FILE);
            }
        }
        Submission::Pdf(file) => {
            if let Some(plan) = check_upload(file, max_upload_bytes) {
                return plan;
            }
            if !file.file_name.ends_with(".pdf") {
                return Plan::Reject(UNSUPPORTED_FILE);
            }
        }
        Submission::Url(url) => {
            if !is_valid_url(url) {
                return Plan::Reject(INVALID_URL);
            }
            if !has_supported_extension(url) {
                return Plan::Reject(UNSUPPORTED_LINK);
            }
        }
        Submission::Text(text) => {
            if text.trim().is_empty() {
                return Plan::Ignore;
            }
        }
    }
    Plan::Send(submission)
}

fn check_upload(file: &UploadedFile, max_upload_bytes: usize) -> Option<Plan> {
    // An untouched file picker posts an empty, unnamed part.
    if file.file_name.is_empty() && file.bytes.is_empty() {
        return Some(Plan::Ignore);
    }
    if file.bytes.len() > max_upload_bytes {
        return Some(Plan::Reject(UPLOAD_TOO_LARGE));
    }
    None
}
