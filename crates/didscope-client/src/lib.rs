//! Node API clients for didscope.
//!
//! The analyzer consumes two capabilities, specified here at their interface
//! boundary: a [`TransactionStore`] for fetching transactions and payloads
//! from the DAG, and a [`DocumentDirectory`] for resolving a DID to its
//! current document. [`HttpClient`] implements both against a node's REST
//! API; [`InMemoryNode`] implements both in process for tests and embedding.

pub mod error;
pub mod http;
pub mod memory;
pub mod traits;

pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use memory::InMemoryNode;
pub use traits::{DocumentDirectory, ResolvedDocument, TransactionStore};
