use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use didscope_types::{Did, DidDocument, Transaction, TxHash};

use crate::error::ClientResult;

/// A resolved DID document together with the transactions that produced its
/// current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDocument {
    pub document: DidDocument,
    pub source_transactions: Vec<TxHash>,
}

/// Read access to a node's transaction DAG.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Fetch a transaction by its hash.
    async fn fetch_transaction(&self, tx: &TxHash) -> ClientResult<Transaction>;

    /// Fetch a detached payload by its hash.
    async fn fetch_payload(&self, payload: &TxHash) -> ClientResult<Vec<u8>>;

    /// List transactions with `start <= lamport_clock < end`.
    async fn list_transactions(&self, start: u64, end: u64) -> ClientResult<Vec<Transaction>>;
}

/// Lookup of the current DID document for an identifier.
#[async_trait]
pub trait DocumentDirectory: Send + Sync {
    /// Resolve an identifier to its current document and the transactions
    /// that produced it.
    async fn resolve_document(&self, id: &Did) -> ClientResult<ResolvedDocument>;
}

// A single shared backend often serves as both capabilities, so the traits
// pass through `Arc`.

#[async_trait]
impl<T: TransactionStore + ?Sized> TransactionStore for Arc<T> {
    async fn fetch_transaction(&self, tx: &TxHash) -> ClientResult<Transaction> {
        (**self).fetch_transaction(tx).await
    }

    async fn fetch_payload(&self, payload: &TxHash) -> ClientResult<Vec<u8>> {
        (**self).fetch_payload(payload).await
    }

    async fn list_transactions(&self, start: u64, end: u64) -> ClientResult<Vec<Transaction>> {
        (**self).list_transactions(start, end).await
    }
}

#[async_trait]
impl<T: DocumentDirectory + ?Sized> DocumentDirectory for Arc<T> {
    async fn resolve_document(&self, id: &Did) -> ClientResult<ResolvedDocument> {
        (**self).resolve_document(id).await
    }
}
