use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub base_url: String,
    pub cors_origins: Option<String>,
    pub max_upload_bytes: usize,
    pub session_ttl: Duration,
}

/// Optional file named by `RIGORCHECK_CONFIG`. Environment variables win.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub port: Option<u16>,
    pub backend_url: Option<String>,
    pub base_url: Option<String>,
    pub cors_origins: Option<String>,
    pub max_upload_bytes: Option<usize>,
    pub session_ttl_secs: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(ConfigFile::default(), |_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        let file = match std::env::var("RIGORCHECK_CONFIG") {
            Ok(path) => match ConfigFile::load(Path::new(&path)) {
                Ok(file) => {
                    info!("[rigorcheck] Loaded config file {}", path);
                    file
                }
                Err(e) => {
                    warn!("[rigorcheck] Ignoring config file {}: {:?}", path, e);
                    ConfigFile::default()
                }
            },
            Err(_) => ConfigFile::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merges `file` with the variables `lookup` returns.
    pub fn resolve(file: ConfigFile, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parsed(&lookup, "PORT").or(file.port).unwrap_or(DEFAULT_PORT);

        let backend_url = lookup("BACKEND_URL")
            .or(file.backend_url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let base_url = lookup("BASE_URL")
            .or(file.base_url)
            .unwrap_or_else(|| format!("http://localhost:{}", port));

        let cors_origins = lookup("CORS_ORIGINS").or(file.cors_origins);

        let max_upload_bytes = parsed(&lookup, "MAX_UPLOAD_BYTES")
            .or(file.max_upload_bytes)
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let session_ttl_secs = parsed(&lookup, "SESSION_TTL_SECS")
            .or(file.session_ttl_secs)
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);

        Self {
            port,
            backend_url,
            base_url,
            cors_origins,
            max_upload_bytes,
            session_ttl: Duration::from_secs(session_ttl_secs),
        }
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("[rigorcheck] Invalid {} value {:?}, using default", key, raw);
            None
        }
    }
}
