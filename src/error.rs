//! Error types for the brightday-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited by the server")]
    RateLimited,

    #[error("Invalid value for header '{0}'")]
    InvalidHeader(&'static str),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Download failed: HTTP {0}")]
    DownloadStatus(u16),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // Date errors
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether a failed request may succeed when sent again.
    ///
    /// Transport failures, 429 and 5xx responses are transient. Everything
    /// else (auth failures, other 4xx, decoding and filesystem errors) is not.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::RateLimited => true,
            Error::Api { status, .. } => *status >= 500,
            Error::Http(e) => !e.is_decode() && !e.is_builder(),
            Error::Download(_) => true,
            Error::DownloadStatus(status) => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::InvalidHeader(_)
            | Error::InvalidDate(_)
            | Error::TomlParse(_)
            | Error::UrlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Api { .. }
            | Error::Authentication(_)
            | Error::RateLimited
            | Error::Http(_) => exit_codes::API_ERROR,
            Error::Download(_)
            | Error::DownloadStatus(_)
            | Error::InvalidFilename(_)
            | Error::Io(_) => exit_codes::DOWNLOAD_ERROR,
            // Gateway bodies are decoded into `Api`; this only comes from local state.
            Error::Json(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(Error::RateLimited.is_transient());
        assert!(Error::Api {
            status: 503,
            message: String::new()
        }
        .is_transient());
        assert!(!Error::Api {
            status: 404,
            message: String::new()
        }
        .is_transient());
        assert!(!Error::Authentication("HTTP 401".into()).is_transient());
        assert!(!Error::InvalidFilename("..".into()).is_transient());
        assert!(Error::DownloadStatus(502).is_transient());
        assert!(!Error::DownloadStatus(403).is_transient());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            Error::MissingConfig("JWT".into()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(
            Error::Authentication("HTTP 403".into()).exit_code(),
            exit_codes::API_ERROR
        );
        assert_eq!(
            Error::Download("HTTP 404".into()).exit_code(),
            exit_codes::DOWNLOAD_ERROR
        );

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(json).exit_code(), exit_codes::UNEXPECTED_ERROR);
    }
}
