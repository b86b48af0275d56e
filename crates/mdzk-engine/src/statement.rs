//! # Public Statement
//!
//! The canonical encoding of everything prover and verifier must agree on:
//! document type, session transcript digest, evaluation time, the requested
//! predicates in caller order, and the issuer's public key. A proof commits
//! to the statement's digest; verification rebuilds the statement from the
//! verifier's own inputs and compares digests exactly.
//!
//! ## Security Invariant
//!
//! The predicate list is order-sensitive. JCS sorts object keys but leaves
//! arrays alone, so swapping two predicates changes the statement bytes and
//! any proof over the original ordering rejects.

use mdzk_core::{artifact_sha256_hex, sha256_hex, CanonicalBytes, Timestamp};
use mdzk_crypto::IssuerPublicKey;
use serde::Serialize;

use crate::error::EngineError;
use crate::hexutil::hex_encode;
use crate::predicate::RequestedAttribute;

/// Format tag embedded in every statement encoding.
pub const STATEMENT_FORMAT: &str = "mdzk/statement/v1";

/// A built public statement, ready to digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicStatement {
    bytes: CanonicalBytes,
}

#[derive(Serialize)]
struct StatementEncoding<'a> {
    format: &'static str,
    doc_type: &'a str,
    transcript_sha256: String,
    time: String,
    predicates: Vec<PredicateEncoding>,
    issuer_key: IssuerPublicKey,
}

#[derive(Serialize)]
struct PredicateEncoding {
    id: String,
    kind: &'static str,
    value: String,
}

impl PublicStatement {
    /// Build the statement over the given public inputs.
    ///
    /// Identifiers and values are hex-encoded because they are byte strings.
    /// The time is bound in its normalized `YYYY-MM-DDTHH:MM:SSZ` rendering,
    /// so two spellings of one instant produce the same statement.
    pub fn build(
        doc_type: &str,
        transcript: &[u8],
        time: Timestamp,
        predicates: &[RequestedAttribute],
        issuer_key: &IssuerPublicKey,
    ) -> Result<Self, EngineError> {
        let encoded = predicates
            .iter()
            .map(|p| PredicateEncoding {
                id: hex_encode(p.id()),
                kind: p.kind().as_str(),
                value: hex_encode(p.value()),
            })
            .collect();
        let encoding = StatementEncoding {
            format: STATEMENT_FORMAT,
            doc_type,
            transcript_sha256: artifact_sha256_hex(transcript),
            time: time.to_iso8601(),
            predicates: encoded,
            issuer_key: *issuer_key,
        };
        Ok(Self {
            bytes: CanonicalBytes::new(&encoding)?,
        })
    }

    /// The canonical statement bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// Lowercase SHA-256 hex of the statement bytes.
    pub fn digest_hex(&self) -> String {
        sha256_hex(&self.bytes)
    }
}
