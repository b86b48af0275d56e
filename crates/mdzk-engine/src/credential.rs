//! # mdoc Credential Model
//!
//! The credential the prover holds: a claims document endorsed by the
//! issuing authority. Credential bytes on the wire are the canonical JCS
//! encoding of the [`Mdoc`] envelope; the issuer signature covers the
//! canonical encoding of the claims alone.

use std::collections::BTreeMap;

use mdzk_core::{CanonicalBytes, Timestamp};
use mdzk_crypto::{EcdsaSignature, IssuerKeyPair, IssuerPublicKey};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ProverError};

/// The signed claims of an mdoc credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdocClaims {
    /// Document type, e.g. `org.iso.18013.5.1.mDL`.
    pub doc_type: String,
    /// Start of the validity window (inclusive).
    pub valid_from: Timestamp,
    /// End of the validity window (inclusive).
    pub valid_until: Timestamp,
    /// Attribute map. `BTreeMap` keeps the claims encoding ordered.
    pub attributes: BTreeMap<String, String>,
}

/// A complete mdoc credential: claims plus the issuer's endorsement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mdoc {
    /// The signed claims.
    pub claims: MdocClaims,
    /// ECDSA P-256 signature over the canonical claims encoding.
    pub issuer_signature: EcdsaSignature,
}

impl MdocClaims {
    /// Sign the claims and serialize the resulting credential.
    ///
    /// Issuance helper for sample data and tests; the engine itself only
    /// consumes credentials.
    pub fn seal(&self, issuer: &IssuerKeyPair) -> Result<Vec<u8>, EngineError> {
        let canonical_claims = CanonicalBytes::new(self)?;
        let issuer_signature = issuer.sign(&canonical_claims);
        let mdoc = Mdoc {
            claims: self.clone(),
            issuer_signature,
        };
        Ok(CanonicalBytes::new(&mdoc)?.into_bytes())
    }
}

impl Mdoc {
    /// Decode a credential from its serialized bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ProverError::MalformedCredential`] if the bytes are not a
    /// valid credential envelope.
    pub fn parse(bytes: &[u8]) -> Result<Self, ProverError> {
        serde_json::from_slice(bytes).map_err(|e| ProverError::MalformedCredential(e.to_string()))
    }

    /// Verify the issuer's signature over the claims.
    ///
    /// # Errors
    ///
    /// Returns [`ProverError::IssuerSignatureInvalid`] if the signature does
    /// not verify under `issuer_key`.
    pub fn verify_issuer(&self, issuer_key: &IssuerPublicKey) -> Result<(), ProverError> {
        let canonical_claims = CanonicalBytes::new(&self.claims)
            .map_err(|e| ProverError::MalformedCredential(e.to_string()))?;
        mdzk_crypto::verify(&canonical_claims, &self.issuer_signature, issuer_key)
            .map_err(|e| ProverError::IssuerSignatureInvalid(e.to_string()))
    }

    /// Look up an attribute value by identifier bytes.
    ///
    /// Attribute keys are UTF-8 strings; a non-UTF-8 identifier cannot match
    /// anything and returns `None`.
    pub fn attribute(&self, id: &[u8]) -> Option<&str> {
        let key = std::str::from_utf8(id).ok()?;
        self.claims.attributes.get(key).map(String::as_str)
    }

    /// Whether the validity window contains `at` (inclusive on both ends).
    pub fn is_valid_at(&self, at: Timestamp) -> bool {
        self.claims.valid_from <= at && at <= self.claims.valid_until
    }
}
