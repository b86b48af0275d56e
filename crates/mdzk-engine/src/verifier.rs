//! # Verifier
//!
//! Checks a proof against the verifier's own public inputs. Pure function of
//! its arguments: no shared state, no caching, idempotent. Acceptance
//! requires bit-for-bit agreement with the prover on every public input;
//! every digest comparison is an exact lowercase-hex string comparison.

use mdzk_core::Timestamp;
use mdzk_crypto::IssuerPublicKey;

use crate::circuit::Circuit;
use crate::error::{EngineError, PredicateError, VerifierError};
use crate::hexutil::is_sha256_hex;
use crate::predicate::RequestedAttribute;
use crate::prover::{binding_tag, ProofEnvelope, PROOF_FORMAT};
use crate::registry::ZkSpecification;
use crate::statement::PublicStatement;

/// Verify a proof against the given public inputs.
///
/// Returns `Ok(())` only when the proof was generated over exactly these
/// inputs: same circuit, same document type, same transcript bytes, same
/// evaluation instant, same predicates in the same order, same issuer key.
///
/// # Errors
///
/// Rejection is always an `Err` naming the failed check; see
/// [`VerifierError`]. The error distinguishes a malformed proof from a
/// well-formed proof over different inputs.
#[allow(clippy::too_many_arguments)]
pub fn verify(
    circuit: &Circuit,
    spec: &ZkSpecification,
    issuer_key: &IssuerPublicKey,
    transcript: &[u8],
    predicates: &[RequestedAttribute],
    time: &str,
    proof_bytes: &[u8],
    doc_type: &str,
) -> Result<(), EngineError> {
    if proof_bytes.is_empty() {
        return Err(EngineError::EmptyArtifact("proof"));
    }
    let envelope: ProofEnvelope = serde_json::from_slice(proof_bytes)
        .map_err(|e| VerifierError::MalformedProof(e.to_string()))?;
    if envelope.format != PROOF_FORMAT {
        return Err(VerifierError::MalformedProof(format!(
            "unknown format tag {:?}",
            envelope.format
        ))
        .into());
    }
    for (field, value) in [
        ("circuit_sha256", &envelope.circuit_sha256),
        ("statement_sha256", &envelope.statement_sha256),
        ("witness_commitment", &envelope.witness_commitment),
        ("binding_tag", &envelope.binding_tag),
    ] {
        if !is_sha256_hex(value) {
            return Err(VerifierError::MalformedProof(format!(
                "{field} is not lowercase SHA-256 hex"
            ))
            .into());
        }
    }

    let circuit_sha256 = circuit.digest_hex();
    if !circuit.matches_spec(spec) {
        return Err(VerifierError::CircuitMismatch(format!(
            "artifact digest {circuit_sha256} but specification records {}",
            spec.circuit_hash
        ))
        .into());
    }
    if envelope.circuit_sha256 != circuit_sha256 {
        return Err(VerifierError::CircuitMismatch(
            "proof was generated for a different circuit".into(),
        )
        .into());
    }

    if predicates.is_empty() {
        return Err(PredicateError::EmptyRequest.into());
    }
    if predicates.len() > spec.attribute_count {
        return Err(VerifierError::TooManyPredicates {
            count: predicates.len(),
            slots: spec.attribute_count,
        }
        .into());
    }

    let at = Timestamp::parse(time).map_err(|e| EngineError::InvalidTime(e.to_string()))?;

    let statement = PublicStatement::build(doc_type, transcript, at, predicates, issuer_key)?;
    if envelope.statement_sha256 != statement.digest_hex() {
        return Err(VerifierError::StatementMismatch.into());
    }

    let expected_tag = binding_tag(
        &circuit_sha256,
        &envelope.statement_sha256,
        &envelope.witness_commitment,
    )?;
    if envelope.binding_tag != expected_tag {
        return Err(VerifierError::BindingMismatch.into());
    }

    tracing::debug!(spec = %spec, predicates = predicates.len(), "proof accepted");
    Ok(())
}
