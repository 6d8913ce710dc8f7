use thiserror::Error;

#[derive(Error, Debug)]
pub enum MtxError {
    #[error("Network Error: {0}")]
    Network(String),

    #[error("HTTP Error {status} for {url}")]
    Http { status: reqwest::StatusCode, url: String },

    #[error("Response Parse Error: {0}")]
    Parse(String),

    #[error("YAML Error: {0}")]
    Yaml(String),

    #[error("File I/O Error: {0}")]
    Io(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Header: {0}")]
    InvalidHeader(String),

    #[error("No playback server configured")]
    PlaybackNotConfigured,

    #[error("Invalid YAML export options: {0}")]
    InvalidOptions(String),
}

impl MtxError {
    /// HTTP status of a failed call, when the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            MtxError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Turn 4xx/5xx responses into `MtxError::Http` before the body is touched.
pub fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, MtxError> {
    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(MtxError::Http {
            status,
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}

impl From<reqwest::Error> for MtxError {
    fn from(err: reqwest::Error) -> Self {
        MtxError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for MtxError {
    fn from(err: serde_json::Error) -> Self {
        MtxError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for MtxError {
    fn from(err: serde_yaml::Error) -> Self {
        MtxError::Yaml(err.to_string())
    }
}

// Allow conversion from std::io::Error to MtxError::Io
impl From<std::io::Error> for MtxError {
    fn from(err: std::io::Error) -> Self {
        MtxError::Io(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderName> for MtxError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        MtxError::InvalidHeader(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for MtxError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        MtxError::InvalidHeader(err.to_string())
    }
}
