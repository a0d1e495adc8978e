use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowerDataError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Request to {0} timed out")]
    Timeout(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse NASA POWER JSON response")]
    JsonParse(#[from] serde_json::Error),

    #[error("NASA POWER response has no '{0}' parameter")]
    MissingParameter(String),

    #[error("NASA POWER response has invalid date key '{key}' in '{parameter}'")]
    InvalidResponseKey { parameter: String, key: String },
}

impl PowerDataError {
    /// Classifies a transport error from `reqwest` for `url`.
    pub(crate) fn from_transport(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            PowerDataError::Timeout(url.to_string(), error)
        } else if let Some(status) = error.status() {
            PowerDataError::HttpStatus {
                url: url.to_string(),
                status,
                source: error,
            }
        } else {
            PowerDataError::NetworkRequest(url.to_string(), error)
        }
    }
}
