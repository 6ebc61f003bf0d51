use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hash::TxHash;

/// A signed transaction in the hash-linked DAG.
///
/// Transactions are immutable once published: `hash` is the digest of the
/// signed wire bytes, so any change produces a different identity. `prevs`
/// lists the causal parents the publisher had seen at signing time, and the
/// Lamport clock orders the transaction after all of them.
///
/// Exactly one of `signing_key` and `signing_key_id` is set on a well-formed
/// transaction: a full key is embedded the first time a key signs (document
/// creation), afterwards only the key identifier is carried (updates).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Content-derived identity of this transaction.
    #[serde(rename = "ref")]
    pub hash: TxHash,

    /// MIME-style label describing the payload.
    pub payload_type: String,

    /// Hash of the detached payload.
    pub payload: TxHash,

    /// Causal parents ("previous") this transaction was signed on top of.
    #[serde(default)]
    pub prevs: Vec<TxHash>,

    /// Lamport clock value, one greater than the highest clock in `prevs`.
    pub lamport_clock: u64,

    /// Full signing key (JWK), present only on the first transaction signed
    /// with that key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_key: Option<Value>,

    /// Reference to a previously published signing key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_key_id: Option<String>,
}

impl Transaction {
    /// Returns `true` if this transaction has no causal parents.
    pub fn is_root(&self) -> bool {
        self.prevs.is_empty()
    }

    /// Returns `true` when the transaction embeds a full signing key.
    pub fn carries_signing_key(&self) -> bool {
        self.signing_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_tx() -> Transaction {
        Transaction {
            hash: TxHash::from_raw([1; 32]),
            payload_type: "application/did+json".into(),
            payload: TxHash::from_raw([2; 32]),
            prevs: vec![TxHash::from_raw([0; 32])],
            lamport_clock: 7,
            signing_key: None,
            signing_key_id: Some("did:example:alice#key-1".into()),
        }
    }

    #[test]
    fn root_transaction_has_no_prevs() {
        let mut tx = make_tx();
        tx.prevs.clear();
        assert!(tx.is_root());
    }

    #[test]
    fn non_root_transaction() {
        let tx = make_tx();
        assert!(!tx.is_root());
        assert!(!tx.carries_signing_key());
    }

    #[test]
    fn hash_serializes_under_ref() {
        let tx = make_tx();
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["ref"], json!("01".repeat(32)));
        assert_eq!(value["lamportClock"], json!(7));
        assert_eq!(value["signingKeyId"], json!("did:example:alice#key-1"));
        assert!(value.get("signingKey").is_none());
    }

    #[test]
    fn prevs_default_to_empty() {
        let value = json!({
            "ref": "aa".repeat(32),
            "payloadType": "application/did+json",
            "payload": "bb".repeat(32),
            "lamportClock": 0,
        });
        let tx: Transaction = serde_json::from_value(value).unwrap();
        assert!(tx.is_root());
        assert!(tx.signing_key.is_none());
        assert!(tx.signing_key_id.is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let mut tx = make_tx();
        tx.signing_key = Some(json!({"kty": "OKP", "crv": "Ed25519", "x": "abc"}));
        tx.signing_key_id = None;
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
        assert!(parsed.carries_signing_key());
    }
}
