//! HTTP client for the backend smoke checks

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that end a smoke run
#[derive(Debug, Error)]
pub enum SmokeError {
    /// Could not reach the server or read its response
    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    /// Server answered with a non-success status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    /// Response body was not the expected JSON
    #[error("{endpoint} returned unexpected JSON: {message}")]
    Parse { endpoint: String, message: String },
}

/// Body of `GET /test`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestResponse {
    pub message: String,
}

/// Body of `GET /alumni`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlumniResponse {
    pub status: String,
    pub results: u64,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct SmokeClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl SmokeClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub async fn test(&self) -> Result<TestResponse, SmokeError> {
        self.get_json("/test").await
    }

    pub async fn alumni(&self) -> Result<AlumniResponse, SmokeError> {
        self.get_json("/alumni").await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SmokeError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let request_error = |e: reqwest::Error| SmokeError::Request {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        };

        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SmokeError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(request_error)?;
        serde_json::from_str(&body).map_err(|e| SmokeError::Parse {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}
