/// Errors from node API operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The requested resource does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),

    /// The node answered with an unexpected HTTP status.
    #[error("unexpected status {code}: {body}")]
    Status { code: u16, body: String },

    /// The request failed at the transport layer.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Result alias for node API operations.
pub type ClientResult<T> = Result<T, ClientError>;
