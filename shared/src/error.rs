use thiserror::Error;

/// The request never produced a readable response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request could not be sent: {0}")]
    Send(String),

    #[error("response body could not be read: {0}")]
    Body(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    #[error("API Error: {status_text}")]
    Request { status: u16, status_text: String },

    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document has no {0} element")]
    MissingElement(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}
