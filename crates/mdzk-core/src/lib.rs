//! # mdzk-core — Foundational Types for the mdzk Proof Engine
//!
//! The leaf crate of the mdzk workspace. It defines the primitives every
//! other crate builds on: the canonical byte pipeline that makes statement
//! and circuit encodings deterministic, content digests, and the UTC-only
//! timestamp type the credential validity checks depend on.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** Every digest or signature over structured
//!    data flows through `CanonicalBytes::new()`. Two parties that build the
//!    same logical statement must arrive at byte-identical encodings, or
//!    proof verification falls apart; the private inner field makes any
//!    other serialization path a compile error.
//!
//! 2. **Explicit raw-artifact hashing.** Opaque artifacts (circuit files,
//!    transcripts, proof blobs) are hashed through `Sha256Accumulator`, the
//!    one sanctioned escape hatch from the canonical pipeline.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces the `Z` suffix and
//!    seconds precision, so a prover and a verifier handed equivalent
//!    spellings of one instant bind identical statement bytes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mdzk-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use digest::{
    artifact_sha256_hex, sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm,
    Sha256Accumulator,
};
pub use error::{CanonicalizationError, CoreError};
pub use temporal::Timestamp;
