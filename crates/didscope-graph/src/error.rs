//! Error types for graph analysis.

use didscope_client::ClientError;
use didscope_types::{Did, TxHash, TypeError};

/// Errors that can occur during a single analysis run.
///
/// Every variant is fatal to the run: the analyzer never retries and never
/// returns a partial graph. The caller may retry the whole call.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// A seed string is neither a DID nor a valid transaction reference.
    #[error("invalid transaction reference {input:?}")]
    InvalidReference {
        input: String,
        #[source]
        source: TypeError,
    },

    /// A seed transaction reference does not carry a DID document payload.
    #[error("transaction {tx} does not contain a DID document")]
    NotADocument { tx: TxHash },

    /// A payload claims the DID document content type but fails to parse.
    #[error("malformed DID document in transaction {tx}")]
    MalformedDocument {
        tx: TxHash,
        #[source]
        source: serde_json::Error,
    },

    /// Fetching a transaction or its payload failed. `referrer` names the
    /// transaction whose parent link led here, when there is one.
    #[error("failed to read transaction {tx}{}", fmt_referrer(.referrer))]
    Fetch {
        tx: TxHash,
        referrer: Option<TxHash>,
        #[source]
        source: ClientError,
    },

    /// Resolving a DID through the document directory failed.
    #[error("failed to resolve document {id}")]
    Resolve {
        id: Did,
        #[source]
        source: ClientError,
    },

    /// The analysis was cancelled by the caller.
    #[error("analysis cancelled")]
    Cancelled,
}

fn fmt_referrer(referrer: &Option<TxHash>) -> String {
    match referrer {
        Some(tx) => format!(" (reached from {})", tx.short_hex()),
        None => String::new(),
    }
}

/// Result alias for analysis operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
