//! # Prover
//!
//! Generates a proof that a held mdoc credential satisfies a verifier's
//! disclosure request. The proof commits to the circuit, the public
//! statement, and a commitment to the witness (the credential-derived
//! secrets), tied together by a binding tag. Credential bytes never appear
//! in the proof.

use mdzk_core::{sha256_hex, CanonicalBytes, Timestamp};
use mdzk_crypto::IssuerPublicKey;
use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::credential::Mdoc;
use crate::error::{EngineError, PredicateError, ProverError};
use crate::hexutil::hex_encode;
use crate::predicate::{AttributeKind, RequestedAttribute};
use crate::registry::ZkSpecification;
use crate::statement::PublicStatement;

/// Format tag embedded in every proof envelope.
pub const PROOF_FORMAT: &str = "mdzk/proof/v1";

const WITNESS_FORMAT: &str = "mdzk/witness/v1";
const BINDING_FORMAT: &str = "mdzk/binding/v1";

/// An owned, opaque proof artifact.
///
/// Same ownership contract as [`Circuit`]: the caller owns the bytes, the
/// engine retains nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof(Vec<u8>);

impl Proof {
    /// Wrap proof bytes loaded from storage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyArtifact`] for zero-length input.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, EngineError> {
        if bytes.is_empty() {
            return Err(EngineError::EmptyArtifact("proof"));
        }
        Ok(Self(bytes))
    }

    /// The raw artifact bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the raw artifact bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Artifact size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: construction rejects empty artifacts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The decoded proof wire format. All digests are lowercase SHA-256 hex.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProofEnvelope {
    pub format: String,
    pub circuit_sha256: String,
    pub statement_sha256: String,
    pub witness_commitment: String,
    pub binding_tag: String,
}

#[derive(Serialize)]
struct WitnessEncoding {
    format: &'static str,
    claims_sha256: String,
    disclosures: Vec<DisclosureEncoding>,
}

#[derive(Serialize)]
struct DisclosureEncoding {
    id: String,
    value: String,
}

#[derive(Serialize)]
struct BindingEncoding<'a> {
    format: &'static str,
    circuit_sha256: &'a str,
    statement_sha256: &'a str,
    witness_commitment: &'a str,
}

/// Compute the binding tag over the three commitments.
///
/// Shared with the verifier, which recomputes it from its own inputs.
pub(crate) fn binding_tag(
    circuit_sha256: &str,
    statement_sha256: &str,
    witness_commitment: &str,
) -> Result<String, EngineError> {
    let encoding = BindingEncoding {
        format: BINDING_FORMAT,
        circuit_sha256,
        statement_sha256,
        witness_commitment,
    };
    Ok(sha256_hex(&CanonicalBytes::new(&encoding)?))
}

/// Generate a proof for the requested attributes.
///
/// All-or-nothing: any failed check aborts without a partial proof. The
/// document type bound into the statement is read from the credential
/// itself, so a verifier expecting a different type rejects.
///
/// # Errors
///
/// - [`ProverError::CircuitMismatch`] if the circuit does not hash to the
///   specification's recorded hash.
/// - [`ProverError::TooManyPredicates`] if more attributes are requested
///   than the circuit has slots.
/// - [`EngineError::InvalidTime`] if `time` fails the strict UTC parse.
/// - [`ProverError::MalformedCredential`], [`ProverError::IssuerSignatureInvalid`],
///   [`ProverError::DocumentExpired`], [`ProverError::MissingAttribute`],
///   [`ProverError::PredicateUnsatisfied`] per the pipeline stage that fails.
pub fn prove(
    circuit: &Circuit,
    spec: &ZkSpecification,
    mdoc_bytes: &[u8],
    issuer_key: &IssuerPublicKey,
    transcript: &[u8],
    predicates: &[RequestedAttribute],
    time: &str,
) -> Result<Proof, EngineError> {
    if !circuit.matches_spec(spec) {
        return Err(ProverError::CircuitMismatch(format!(
            "artifact digest {} but specification records {}",
            circuit.digest_hex(),
            spec.circuit_hash
        ))
        .into());
    }
    if predicates.is_empty() {
        return Err(PredicateError::EmptyRequest.into());
    }
    if predicates.len() > spec.attribute_count {
        return Err(ProverError::TooManyPredicates {
            count: predicates.len(),
            slots: spec.attribute_count,
        }
        .into());
    }

    let at = Timestamp::parse(time).map_err(|e| EngineError::InvalidTime(e.to_string()))?;

    let mdoc = Mdoc::parse(mdoc_bytes)?;
    mdoc.verify_issuer(issuer_key)?;
    if !mdoc.is_valid_at(at) {
        return Err(ProverError::DocumentExpired {
            at: at.to_iso8601(),
            valid_from: mdoc.claims.valid_from.to_iso8601(),
            valid_until: mdoc.claims.valid_until.to_iso8601(),
        }
        .into());
    }

    // Witness extraction: every requested attribute must exist, and
    // equality predicates must hold against the credential's value.
    let mut disclosures = Vec::with_capacity(predicates.len());
    for predicate in predicates {
        let value = mdoc
            .attribute(predicate.id())
            .ok_or_else(|| ProverError::MissingAttribute(predicate.id_lossy()))?;
        if predicate.kind() == AttributeKind::Primitive
            && value.as_bytes() != predicate.value()
        {
            return Err(ProverError::PredicateUnsatisfied(predicate.id_lossy()).into());
        }
        disclosures.push(DisclosureEncoding {
            id: hex_encode(predicate.id()),
            value: hex_encode(value.as_bytes()),
        });
    }

    let statement = PublicStatement::build(
        &mdoc.claims.doc_type,
        transcript,
        at,
        predicates,
        issuer_key,
    )?;

    let witness = WitnessEncoding {
        format: WITNESS_FORMAT,
        claims_sha256: sha256_hex(&CanonicalBytes::new(&mdoc.claims)?),
        disclosures,
    };
    let witness_commitment = sha256_hex(&CanonicalBytes::new(&witness)?);

    let circuit_sha256 = circuit.digest_hex();
    let statement_sha256 = statement.digest_hex();
    let tag = binding_tag(&circuit_sha256, &statement_sha256, &witness_commitment)?;

    let envelope = ProofEnvelope {
        format: PROOF_FORMAT.to_owned(),
        circuit_sha256,
        statement_sha256,
        witness_commitment,
        binding_tag: tag,
    };
    let bytes = CanonicalBytes::new(&envelope)?.into_bytes();
    tracing::debug!(
        spec = %spec,
        predicates = predicates.len(),
        proof_size = bytes.len(),
        "generated proof"
    );
    Proof::from_bytes(bytes)
}
