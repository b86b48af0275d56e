//! # Specification Registry
//!
//! The published proof system specifications. Each entry pins a proof
//! system identifier, a version, the number of attribute slots its circuit
//! carries, and the SHA-256 hash of the compiled circuit bytes.
//!
//! The table is append-only across releases: existing entries never change,
//! so a circuit hash recorded by a verifier keeps meaning the same circuit
//! forever. New circuit shapes are published as new entries.

use std::str::FromStr;

use crate::error::EngineError;

/// A published proof system specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZkSpecification {
    /// Proof system identifier.
    pub system: &'static str,
    /// Specification version, unique within the registry.
    pub version: u64,
    /// Number of attribute slots the compiled circuit carries.
    pub attribute_count: usize,
    /// Lowercase SHA-256 hex of the compiled circuit bytes.
    pub circuit_hash: &'static str,
}

impl std::fmt::Display for ZkSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} v{} ({} attribute slots, circuit sha256:{})",
            self.system, self.version, self.attribute_count, self.circuit_hash
        )
    }
}

/// The published specifications, ordered by version.
///
/// The circuit hashes are the recorded digests of the deterministic compiler
/// output; `registry_hashes_match_compiler_output` in the integration tests
/// recomputes each one.
pub const ZK_SPECS: &[ZkSpecification] = &[
    ZkSpecification {
        system: "mdoc-zk",
        version: 1,
        attribute_count: 5,
        circuit_hash: "b022bcc360b81364dd6a5e40f8e22f95cbbb3ee8485ca8447e62fbf0707712c8",
    },
    ZkSpecification {
        system: "mdoc-zk",
        version: 2,
        attribute_count: 8,
        circuit_hash: "e913d6cc5f9d9954788b28f986f52dd2037bac02b8f35167e1d292eecc9e3cbd",
    },
    ZkSpecification {
        system: "mdoc-zk",
        version: 3,
        attribute_count: 10,
        circuit_hash: "81c35786e6509e05232a31805b4bf202ef078bc8b15b5254707431c12f04d6d1",
    },
];

/// The ordered list of published specifications.
pub fn zk_specs() -> &'static [ZkSpecification] {
    ZK_SPECS
}

/// Selects a specification from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSelector {
    /// A zero-based index into the published list.
    Index(usize),
    /// The newest published specification.
    Latest,
}

impl FromStr for SpecSelector {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(Self::Latest);
        }
        s.parse::<usize>()
            .map(Self::Index)
            .map_err(|_| EngineError::InvalidSelector(s.to_owned()))
    }
}

/// Resolve a selector against the registry.
///
/// # Errors
///
/// Returns [`EngineError::SpecNotFound`] for an out-of-range index. There is
/// no clamping: asking for index 5 of a three-entry registry is an error,
/// not the latest entry.
pub fn resolve(selector: &SpecSelector) -> Result<&'static ZkSpecification, EngineError> {
    let specs = zk_specs();
    let index = match selector {
        SpecSelector::Index(i) => *i,
        // The registry is a non-empty const table.
        SpecSelector::Latest => specs.len() - 1,
    };
    specs.get(index).ok_or(EngineError::SpecNotFound {
        index,
        available: specs.len(),
    })
}
