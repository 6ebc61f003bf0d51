//! DID document payload model.
//!
//! A transaction whose payload type is [`DID_DOCUMENT_CONTENT_TYPE`] carries
//! a JSON document describing an identity: its identifier, the identities
//! authorized to manage it (controllers), its verification methods, and its
//! service endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::did::Did;

/// Content type label identifying DID document payloads.
pub const DID_DOCUMENT_CONTENT_TYPE: &str = "application/did+json";

/// A decoded DID document payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    /// The identity this document describes.
    pub id: Did,

    /// Identities authorized to manage this document. The wire form accepts
    /// both a single identifier and an array of identifiers.
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub controller: Vec<Did>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verification_method: Vec<VerificationMethod>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service: Vec<ServiceEndpoint>,
}

impl DidDocument {
    /// A document with neither controllers nor verification methods can no
    /// longer be used or updated: it is deactivated.
    pub fn is_deactivated(&self) -> bool {
        self.controller.is_empty() && self.verification_method.is_empty()
    }
}

/// A public key entry in a DID document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub method_type: String,
    pub controller: Did,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_jwk: Option<Value>,
}

/// A service entry in a DID document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub service_endpoint: Value,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Did>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Did),
        Many(Vec<Did>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(did) => vec![did],
        OneOrMany::Many(dids) => dids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_document_is_deactivated() {
        let doc: DidDocument = serde_json::from_value(json!({
            "id": "did:example:alice",
        }))
        .unwrap();
        assert!(doc.is_deactivated());
        assert!(doc.controller.is_empty());
    }

    #[test]
    fn controller_accepts_single_value() {
        let doc: DidDocument = serde_json::from_value(json!({
            "id": "did:example:alice",
            "controller": "did:example:bob",
        }))
        .unwrap();
        assert_eq!(doc.controller, vec![Did::parse("did:example:bob").unwrap()]);
    }

    #[test]
    fn controller_accepts_array() {
        let doc: DidDocument = serde_json::from_value(json!({
            "id": "did:example:alice",
            "controller": ["did:example:bob", "did:example:carol"],
        }))
        .unwrap();
        assert_eq!(doc.controller.len(), 2);
    }

    #[test]
    fn document_with_verification_method_is_active() {
        let doc: DidDocument = serde_json::from_value(json!({
            "id": "did:example:alice",
            "verificationMethod": [{
                "id": "did:example:alice#key-1",
                "type": "JsonWebKey2020",
                "controller": "did:example:alice",
                "publicKeyJwk": {"kty": "OKP", "crv": "Ed25519", "x": "abc"},
            }],
        }))
        .unwrap();
        assert!(!doc.is_deactivated());
        assert_eq!(doc.verification_method[0].method_type, "JsonWebKey2020");
    }

    #[test]
    fn document_with_controller_only_is_active() {
        let doc: DidDocument = serde_json::from_value(json!({
            "id": "did:example:alice",
            "controller": ["did:example:bob"],
        }))
        .unwrap();
        assert!(!doc.is_deactivated());
    }

    #[test]
    fn service_entries_are_parsed() {
        let doc: DidDocument = serde_json::from_value(json!({
            "id": "did:example:alice",
            "service": [{
                "id": "did:example:alice#messaging",
                "type": "MessagingService",
                "serviceEndpoint": "https://example.com/inbox",
            }],
        }))
        .unwrap();
        assert_eq!(doc.service.len(), 1);
        assert_eq!(doc.service[0].service_type, "MessagingService");
    }

    #[test]
    fn rejects_invalid_id() {
        let result: Result<DidDocument, _> = serde_json::from_value(json!({
            "id": "not-a-did",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let doc: DidDocument = serde_json::from_value(json!({
            "id": "did:example:alice",
            "controller": ["did:example:bob"],
            "verificationMethod": [{
                "id": "did:example:alice#key-1",
                "type": "JsonWebKey2020",
                "controller": "did:example:alice",
            }],
        }))
        .unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: DidDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, parsed);
    }
}
