/// Errors from parsing and validating foundation types.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The input is not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded value has the wrong length.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The input is not a valid DID.
    #[error("invalid DID: {0:?}")]
    InvalidDid(String),
}
