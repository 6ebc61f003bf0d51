//! Foundation types for didscope.
//!
//! This crate provides the data model shared by the analyzer and the node
//! clients. Every other didscope crate depends on `didscope-types`.
//!
//! # Key Types
//!
//! - [`TxHash`] — Content-addressed transaction reference (BLAKE3 hash)
//! - [`Did`] — W3C DID identifier
//! - [`Transaction`] — Signed, hash-linked DAG transaction
//! - [`DidDocument`] — Decoded DID document payload

pub mod did;
pub mod document;
pub mod error;
pub mod hash;
pub mod transaction;

pub use did::Did;
pub use document::{DidDocument, ServiceEndpoint, VerificationMethod, DID_DOCUMENT_CONTENT_TYPE};
pub use error::TypeError;
pub use hash::TxHash;
pub use transaction::Transaction;
