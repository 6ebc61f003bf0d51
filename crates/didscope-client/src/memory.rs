use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use didscope_types::{Did, DidDocument, Transaction, TxHash};

use crate::error::{ClientError, ClientResult};
use crate::traits::{DocumentDirectory, ResolvedDocument, TransactionStore};

/// In-memory, HashMap-based node backend.
///
/// Intended for tests and embedding. Transactions, payloads, and resolvable
/// documents are held behind `RwLock`s and cloned on read. Implements both
/// [`TransactionStore`] and [`DocumentDirectory`], so one shared instance
/// can serve as a complete node.
#[derive(Default)]
pub struct InMemoryNode {
    transactions: RwLock<HashMap<TxHash, Transaction>>,
    payloads: RwLock<HashMap<TxHash, Vec<u8>>>,
    documents: RwLock<HashMap<Did, ResolvedDocument>>,
}

impl InMemoryNode {
    /// Create a new empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a transaction under its own hash.
    pub fn insert_transaction(&self, tx: Transaction) {
        self.transactions
            .write()
            .expect("lock poisoned")
            .insert(tx.hash, tx);
    }

    /// Store a payload under its hash.
    pub fn insert_payload(&self, hash: TxHash, payload: Vec<u8>) {
        self.payloads
            .write()
            .expect("lock poisoned")
            .insert(hash, payload);
    }

    /// Store a transaction together with its DID document payload, keyed by
    /// the transaction's payload hash.
    pub fn insert_document_transaction(&self, tx: Transaction, document: &DidDocument) {
        let payload = serde_json::to_vec(document).expect("document serializes");
        self.insert_payload(tx.payload, payload);
        self.insert_transaction(tx);
    }

    /// Make an identifier resolvable to a document with source transactions.
    pub fn insert_document(&self, document: DidDocument, source_transactions: Vec<TxHash>) {
        let id = document.id.clone();
        self.documents.write().expect("lock poisoned").insert(
            id,
            ResolvedDocument {
                document,
                source_transactions,
            },
        );
    }

    /// Number of transactions currently stored.
    pub fn len(&self) -> usize {
        self.transactions.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no transactions are stored.
    pub fn is_empty(&self) -> bool {
        self.transactions.read().expect("lock poisoned").is_empty()
    }
}

#[async_trait]
impl TransactionStore for InMemoryNode {
    async fn fetch_transaction(&self, tx: &TxHash) -> ClientResult<Transaction> {
        self.transactions
            .read()
            .expect("lock poisoned")
            .get(tx)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(tx.to_string()))
    }

    async fn fetch_payload(&self, payload: &TxHash) -> ClientResult<Vec<u8>> {
        self.payloads
            .read()
            .expect("lock poisoned")
            .get(payload)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(payload.to_string()))
    }

    async fn list_transactions(&self, start: u64, end: u64) -> ClientResult<Vec<Transaction>> {
        let map = self.transactions.read().expect("lock poisoned");
        let mut txs: Vec<Transaction> = map
            .values()
            .filter(|tx| tx.lamport_clock >= start && tx.lamport_clock < end)
            .cloned()
            .collect();
        txs.sort_by_key(|tx| (tx.lamport_clock, tx.hash));
        Ok(txs)
    }
}

#[async_trait]
impl DocumentDirectory for InMemoryNode {
    async fn resolve_document(&self, id: &Did) -> ClientResult<ResolvedDocument> {
        self.documents
            .read()
            .expect("lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }
}

impl std::fmt::Debug for InMemoryNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryNode")
            .field("transaction_count", &self.len())
            .finish()
    }
}
