//! # Content Digests
//!
//! SHA-256 digests over canonical bytes, plus a raw-bytes accumulator for
//! opaque artifacts.
//!
//! ## Security Invariant
//!
//! Structured data is hashed exclusively through [`sha256_digest()`], whose
//! signature accepts only `&CanonicalBytes`. Opaque artifacts the engine
//! treats as byte blobs (circuit files, transcripts, proof envelopes,
//! credential bytes) are hashed through [`Sha256Accumulator`] — the one
//! explicit raw-bytes path, kept separate so a reviewer can audit every use.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// The hash algorithm that produced a digest.
///
/// The engine uses SHA-256 throughout; the tag keeps digests self-describing
/// in serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    /// Algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 32-byte digest with its algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a digest from raw bytes and an algorithm tag.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// Compute a SHA-256 digest from canonical bytes.
///
/// The signature accepts only `&CanonicalBytes`, making it a compile error
/// to hash structured data that skipped the canonicalization pipeline.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, bytes)
}

/// Compute a SHA-256 lowercase hex string from canonical bytes.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}

/// Incremental SHA-256 over raw bytes.
///
/// # Raw-bytes exception
///
/// This is the sanctioned path for hashing opaque artifacts whose content is
/// not structured data: circuit bytes, session transcripts, proof envelopes,
/// and credential blobs. Structured data must go through [`sha256_digest()`].
#[derive(Debug, Default)]
pub struct Sha256Accumulator {
    hasher: Sha256,
}

impl Sha256Accumulator {
    /// Create a fresh accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed bytes into the accumulator.
    pub fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Finalize into a [`ContentDigest`].
    pub fn finalize(self) -> ContentDigest {
        let hash = self.hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        ContentDigest::new(DigestAlgorithm::Sha256, bytes)
    }

    /// Finalize into a lowercase hex string.
    pub fn finalize_hex(self) -> String {
        self.finalize().to_hex()
    }
}

/// One-shot raw-bytes SHA-256 hex, for artifact digests.
pub fn artifact_sha256_hex(bytes: &[u8]) -> String {
    let mut acc = Sha256Accumulator::new();
    acc.update(bytes);
    acc.finalize_hex()
}
