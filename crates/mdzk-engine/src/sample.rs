//! # Built-in Sample Data
//!
//! A deterministic sample issuer, mDL credential, session transcript, and
//! evaluation time. Used by the `mdoc_example` CLI command and as the
//! default prover input, and exercised heavily by tests. Everything here is
//! derived from fixed constants, so repeated runs produce identical bytes.

use std::collections::BTreeMap;

use mdzk_core::Timestamp;
use mdzk_crypto::IssuerKeyPair;

use crate::credential::MdocClaims;
use crate::error::EngineError;
use crate::predicate::{AttributeKind, RequestedAttribute};

/// Document type of the sample credential.
pub const SAMPLE_DOC_TYPE: &str = "org.iso.18013.5.1.mDL";

/// Evaluation time used by the sample flows, inside the sample validity
/// window.
pub const SAMPLE_TIME: &str = "2026-01-01T00:00:00Z";

// Fixed scalar seed for the sample issuer. Well below the P-256 group
// order, so `from_seed` always accepts it.
const SAMPLE_ISSUER_SEED: [u8; 32] = [
    0x6d, 0x64, 0x7a, 0x6b, 0x2d, 0x73, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2d, 0x69, 0x73, 0x73,
    0x75, 0x65, 0x72, 0x2d, 0x6b, 0x65, 0x79, 0x2d, 0x73, 0x65, 0x65, 0x64, 0x2d, 0x76, 0x31,
    0x00, 0x01,
];

const SAMPLE_TRANSCRIPT: &[u8] = b"mdzk-sample-session-transcript/v1\
:reader-nonce=5bd4f1c8a93e07d2:device-nonce=17aa20c6e48b93f5";

/// The deterministic sample issuer key pair.
pub fn sample_issuer() -> Result<IssuerKeyPair, EngineError> {
    Ok(IssuerKeyPair::from_seed(&SAMPLE_ISSUER_SEED)?)
}

/// The claims of the sample mDL credential.
pub fn sample_claims() -> Result<MdocClaims, EngineError> {
    let mut attributes = BTreeMap::new();
    attributes.insert("age_over_18".to_owned(), "true".to_owned());
    attributes.insert("family_name".to_owned(), "Mustermann".to_owned());
    attributes.insert("given_name".to_owned(), "Erika".to_owned());
    attributes.insert("issuing_country".to_owned(), "DE".to_owned());
    Ok(MdocClaims {
        doc_type: SAMPLE_DOC_TYPE.to_owned(),
        valid_from: parse_time("2020-01-01T00:00:00Z")?,
        valid_until: parse_time("2035-01-01T00:00:00Z")?,
        attributes,
    })
}

/// The sample credential, sealed by the sample issuer.
pub fn sample_mdoc_bytes() -> Result<Vec<u8>, EngineError> {
    sample_claims()?.seal(&sample_issuer()?)
}

/// The sample session transcript bytes.
pub fn sample_transcript() -> Vec<u8> {
    SAMPLE_TRANSCRIPT.to_vec()
}

/// The default disclosure request: prove `age_over_18 = true`.
pub fn sample_predicate() -> Result<RequestedAttribute, EngineError> {
    Ok(RequestedAttribute::new(
        "age_over_18",
        "true",
        AttributeKind::Primitive,
    )?)
}

fn parse_time(s: &str) -> Result<Timestamp, EngineError> {
    Timestamp::parse(s).map_err(|e| EngineError::InvalidTime(e.to_string()))
}
