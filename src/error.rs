use thiserror::Error;

/// Custom error types for alumni-toast
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid storage file: {0}")]
    Storage(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing media credential: set {0} in the environment")]
    MissingCredential(&'static str),

    #[error("Media service rejected ping: {0}")]
    MediaPing(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
