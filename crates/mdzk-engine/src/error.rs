//! # Engine Error Types
//!
//! One enum per pipeline stage: `ProverError` and `VerifierError` carry the
//! stage-specific rejection reasons, `PredicateError` covers request
//! validation, and `EngineError` is the boundary type every public operation
//! returns. Rejection is always an `Err` with a reason, never a panic.

use mdzk_core::error::CanonicalizationError;
use mdzk_crypto::CryptoError;
use thiserror::Error;

/// Top-level error for every public engine operation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requested specification index does not exist in the registry.
    #[error("no published specification at index {index} ({available} available)")]
    SpecNotFound {
        /// The index that was requested.
        index: usize,
        /// How many specifications the registry holds.
        available: usize,
    },

    /// A specification selector string could not be parsed.
    #[error("invalid specification selector {0:?}: expected \"latest\" or a decimal index")]
    InvalidSelector(String),

    /// The specification is malformed and cannot be compiled.
    #[error("circuit compilation failed: {0}")]
    CompilationFailed(String),

    /// A zero-length artifact was presented where content is required.
    #[error("empty {0} artifact")]
    EmptyArtifact(&'static str),

    /// An evaluation time string failed the strict UTC parse.
    #[error("invalid evaluation time: {0}")]
    InvalidTime(String),

    /// Structured data could not be canonicalized.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),

    /// Key material was invalid.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A requested attribute failed validation.
    #[error(transparent)]
    Validation(#[from] PredicateError),

    /// Proof generation failed.
    #[error(transparent)]
    Prover(#[from] ProverError),

    /// Proof verification rejected.
    #[error(transparent)]
    Verifier(#[from] VerifierError),
}

/// Reasons proof generation can fail.
///
/// Proving is all-or-nothing: any of these aborts without producing a
/// partial proof.
#[derive(Error, Debug)]
pub enum ProverError {
    /// The circuit bytes do not hash to the specification's circuit hash.
    #[error("circuit does not match specification: {0}")]
    CircuitMismatch(String),

    /// The credential bytes could not be decoded.
    #[error("malformed credential: {0}")]
    MalformedCredential(String),

    /// The issuer signature over the credential claims did not verify.
    #[error("issuer signature invalid: {0}")]
    IssuerSignatureInvalid(String),

    /// A requested attribute is not present in the credential.
    #[error("credential has no attribute {0:?}")]
    MissingAttribute(String),

    /// The credential's attribute value does not satisfy the predicate.
    #[error("predicate unsatisfied for attribute {0:?}")]
    PredicateUnsatisfied(String),

    /// The evaluation time falls outside the credential's validity window.
    #[error("document not valid at {at}: validity window {valid_from} to {valid_until}")]
    DocumentExpired {
        /// The evaluation time.
        at: String,
        /// Start of the credential's validity window.
        valid_from: String,
        /// End of the credential's validity window.
        valid_until: String,
    },

    /// More attributes were requested than the circuit has slots for.
    #[error("{count} attributes requested but the circuit has {slots} slots")]
    TooManyPredicates {
        /// Number of requested attributes.
        count: usize,
        /// Attribute slots in the circuit.
        slots: usize,
    },
}

/// Reasons proof verification can reject.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// The proof bytes could not be decoded as a proof envelope.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The circuit bytes disagree with the specification or the envelope.
    #[error("circuit does not match: {0}")]
    CircuitMismatch(String),

    /// More attributes were requested than the circuit has slots for.
    #[error("{count} attributes requested but the circuit has {slots} slots")]
    TooManyPredicates {
        /// Number of requested attributes.
        count: usize,
        /// Attribute slots in the circuit.
        slots: usize,
    },

    /// The statement rebuilt from the verifier's public inputs does not
    /// match the statement the proof commits to.
    #[error("public statement mismatch: the proof was generated over different public inputs")]
    StatementMismatch,

    /// The binding tag does not tie the circuit, statement, and witness
    /// commitment together.
    #[error("binding tag mismatch: proof does not bind these public inputs")]
    BindingMismatch,
}

/// Validation failures for requested attributes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PredicateError {
    /// The attribute identifier is empty.
    #[error("attribute identifier must not be empty")]
    EmptyIdentifier,

    /// The attribute identifier exceeds the maximum length.
    #[error("attribute identifier is {len} bytes, maximum is {max}")]
    IdentifierOverflow {
        /// Actual identifier length in bytes.
        len: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// The attribute value exceeds the maximum length.
    #[error("attribute value is {len} bytes, maximum is {max}")]
    ValueOverflow {
        /// Actual value length in bytes.
        len: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// No attributes were requested at all.
    #[error("at least one requested attribute is required")]
    EmptyRequest,
}
