//! # mdzk-engine — mdoc Zero-Knowledge Proof Engine
//!
//! Proves and verifies statements about mdoc (mobile document) credentials
//! without disclosing the credential itself. A holder proves to a verifier
//! that an issuer-signed, unexpired document carries the requested
//! attributes; the verifier learns only that the statement holds.
//!
//! ## Pipeline
//!
//! 1. **Registry** ([`registry`]) — published specifications pinning the
//!    proof system, version, attribute slot count, and circuit hash.
//! 2. **Compiler** ([`circuit`]) — deterministic specification-to-circuit
//!    compilation; same spec, byte-identical artifact.
//! 3. **Predicates** ([`predicate`]) — the verifier's disclosure request,
//!    validated at construction.
//! 4. **Prover** ([`prover`]) — checks the credential against the request
//!    and emits a proof committing to circuit, statement, and witness.
//! 5. **Verifier** ([`verifier`]) — rebuilds the statement from its own
//!    inputs and accepts only on bit-for-bit agreement.
//!
//! Proofs and circuits are owned opaque byte artifacts; callers persist and
//! transport them freely.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests; every public operation
//!   returns `Result<_, EngineError>`.

pub mod circuit;
pub mod credential;
pub mod error;
mod hexutil;
pub mod predicate;
pub mod prover;
pub mod registry;
pub mod sample;
pub mod statement;
pub mod verifier;

pub use circuit::{compile, Circuit, CIRCUIT_FORMAT, MAX_CIRCUIT_ATTRIBUTES};
pub use credential::{Mdoc, MdocClaims};
pub use error::{EngineError, PredicateError, ProverError, VerifierError};
pub use predicate::{
    AttributeKind, RequestedAttribute, MAX_ATTRIBUTE_ID_LEN, MAX_ATTRIBUTE_VALUE_LEN,
};
pub use prover::{prove, Proof, PROOF_FORMAT};
pub use registry::{resolve, zk_specs, SpecSelector, ZkSpecification, ZK_SPECS};
pub use statement::{PublicStatement, STATEMENT_FORMAT};
pub use verifier::verify;
