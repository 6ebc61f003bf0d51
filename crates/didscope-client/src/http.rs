//! HTTP client for a node's REST API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use didscope_types::{Did, DidDocument, Transaction, TxHash};

use crate::error::{ClientError, ClientResult};
use crate::traits::{DocumentDirectory, ResolvedDocument, TransactionStore};

/// reqwest-based client for the node REST API.
///
/// Implements both [`TransactionStore`] and [`DocumentDirectory`] against a
/// single base URL:
///
/// - `GET /transaction/{hash}` — one transaction
/// - `GET /transaction?start=&end=` — transactions in a Lamport clock range
/// - `GET /payload/{hash}` — raw payload bytes
/// - `GET /document/{did}` — current document with resolution metadata
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    /// Create a client with a default `reqwest::Client`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a preconfigured `reqwest::Client` (timeouts,
    /// proxies, TLS).
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> ClientResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(url)),
            status if status.is_success() => Ok(response),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ClientError::Status {
                    code: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl TransactionStore for HttpClient {
    async fn fetch_transaction(&self, tx: &TxHash) -> ClientResult<Transaction> {
        let response = self.get(&format!("/transaction/{tx}")).await?;
        Ok(response.json().await?)
    }

    async fn fetch_payload(&self, payload: &TxHash) -> ClientResult<Vec<u8>> {
        let response = self.get(&format!("/payload/{payload}")).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn list_transactions(&self, start: u64, end: u64) -> ClientResult<Vec<Transaction>> {
        let response = self
            .get(&format!("/transaction?start={start}&end={end}"))
            .await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl DocumentDirectory for HttpClient {
    async fn resolve_document(&self, id: &Did) -> ClientResult<ResolvedDocument> {
        let response = self.get(&format!("/document/{id}")).await?;
        let wire: DocumentWire = response.json().await?;
        Ok(ResolvedDocument {
            document: wire.document,
            source_transactions: wire.metadata.source_transactions,
        })
    }
}

/// Wire shape of the document-resolution endpoint.
#[derive(Deserialize)]
struct DocumentWire {
    document: DidDocument,
    metadata: DocumentMetadata,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentMetadata {
    #[serde(default)]
    source_transactions: Vec<TxHash>,
}
