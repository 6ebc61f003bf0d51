//! Payload decoding: does this transaction carry a DID document?

use didscope_client::TransactionStore;
use didscope_types::{DidDocument, Transaction, TxHash, DID_DOCUMENT_CONTENT_TYPE};
use tokio_util::sync::CancellationToken;

use crate::error::{AnalyzeError, AnalyzeResult};

/// Decode a transaction's payload as a DID document.
///
/// Returns `Ok(None)` when the payload type is not `application/did+json`.
/// Most transactions in a shared DAG carry unrelated payloads, so that is an
/// expected outcome, not an error. A payload that claims the DID document
/// content type but does not parse fails with
/// [`AnalyzeError::MalformedDocument`].
pub fn decode_document(tx: &Transaction, payload: &[u8]) -> AnalyzeResult<Option<DidDocument>> {
    if tx.payload_type != DID_DOCUMENT_CONTENT_TYPE {
        return Ok(None);
    }
    let document = serde_json::from_slice(payload)
        .map_err(|source| AnalyzeError::MalformedDocument { tx: tx.hash, source })?;
    Ok(Some(document))
}

/// Fetch a transaction and its payload, then decode the payload.
///
/// Both fetches race against the caller's cancellation token; a cancelled
/// analysis abandons the in-flight request. Fetch failures are wrapped with
/// the offending transaction hash and, when present, the referrer whose
/// parent link led here.
pub(crate) async fn read_document<S: TransactionStore>(
    store: &S,
    tx_ref: TxHash,
    referrer: Option<TxHash>,
    cancel: &CancellationToken,
) -> AnalyzeResult<(Transaction, Option<DidDocument>)> {
    let tx = tokio::select! {
        _ = cancel.cancelled() => return Err(AnalyzeError::Cancelled),
        res = store.fetch_transaction(&tx_ref) => res.map_err(|source| AnalyzeError::Fetch {
            tx: tx_ref,
            referrer,
            source,
        })?,
    };
    let payload = tokio::select! {
        _ = cancel.cancelled() => return Err(AnalyzeError::Cancelled),
        res = store.fetch_payload(&tx.payload) => res.map_err(|source| AnalyzeError::Fetch {
            tx: tx_ref,
            referrer,
            source,
        })?,
    };
    let document = decode_document(&tx, &payload)?;
    Ok((tx, document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_tx(payload_type: &str) -> Transaction {
        Transaction {
            hash: TxHash::from_raw([1; 32]),
            payload_type: payload_type.into(),
            payload: TxHash::from_raw([2; 32]),
            prevs: vec![],
            lamport_clock: 0,
            signing_key: None,
            signing_key_id: None,
        }
    }

    #[test]
    fn non_document_payload_type_is_none() {
        let tx = make_tx("application/json");
        let result = decode_document(&tx, b"{\"anything\": true}").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn document_payload_is_decoded() {
        let tx = make_tx(DID_DOCUMENT_CONTENT_TYPE);
        let payload = serde_json::to_vec(&json!({"id": "did:example:alice"})).unwrap();
        let document = decode_document(&tx, &payload).unwrap().unwrap();
        assert_eq!(document.id.as_str(), "did:example:alice");
    }

    #[test]
    fn claimed_document_type_with_garbage_fails() {
        let tx = make_tx(DID_DOCUMENT_CONTENT_TYPE);
        let result = decode_document(&tx, b"not json");
        assert!(matches!(
            result,
            Err(AnalyzeError::MalformedDocument { tx: hash, .. }) if hash == tx.hash
        ));
    }

    #[test]
    fn malformed_error_carries_offending_hash() {
        let tx = make_tx(DID_DOCUMENT_CONTENT_TYPE);
        let err = decode_document(&tx, b"{\"id\": 42}").unwrap_err();
        assert!(err.to_string().contains(&tx.hash.to_hex()));
    }
}
