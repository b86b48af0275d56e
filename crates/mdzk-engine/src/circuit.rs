//! # Circuit Compiler
//!
//! Compiles a [`ZkSpecification`] into an opaque circuit artifact. The
//! compiler is deterministic: the artifact is the canonical JCS encoding of
//! the circuit layout, so compiling the same specification twice yields
//! byte-identical output and the registry can pin circuits by hash.

use mdzk_core::{artifact_sha256_hex, CanonicalBytes};
use serde::Serialize;

use crate::error::EngineError;
use crate::registry::ZkSpecification;

/// Hard cap on attribute slots per circuit.
pub const MAX_CIRCUIT_ATTRIBUTES: usize = 32;

/// Format tag embedded in every compiled circuit.
pub const CIRCUIT_FORMAT: &str = "mdzk/circuit/v1";

/// An owned, opaque compiled circuit artifact.
///
/// Callers own the bytes outright; nothing inside the engine retains a
/// reference to them after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit(Vec<u8>);

#[derive(Serialize)]
struct CircuitLayout {
    format: &'static str,
    system: &'static str,
    version: u64,
    attribute_slots: usize,
    constraints: Vec<String>,
}

impl Circuit {
    /// Wrap circuit bytes loaded from storage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyArtifact`] for zero-length input. An
    /// empty circuit is always an error, distinct from a malformed
    /// specification.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, EngineError> {
        if bytes.is_empty() {
            return Err(EngineError::EmptyArtifact("circuit"));
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

    /// Lowercase SHA-256 hex of the artifact bytes.
    pub fn digest_hex(&self) -> String {
        artifact_sha256_hex(&self.0)
    }

    /// Check the artifact against a specification's recorded circuit hash.
    ///
    /// Exact lowercase-hex string comparison; an uppercase spelling of the
    /// same digest does not match.
    pub fn matches_spec(&self, spec: &ZkSpecification) -> bool {
        self.digest_hex() == spec.circuit_hash
    }
}

/// Compile a specification into its circuit artifact.
///
/// Deterministic: same specification, byte-identical circuit. The layout
/// lists one constraint per proof obligation — the issuer signature check,
/// the validity window check, and one predicate constraint per attribute
/// slot.
///
/// # Errors
///
/// Returns [`EngineError::CompilationFailed`] for a malformed specification
/// (empty system identifier, zero slots, or more than
/// [`MAX_CIRCUIT_ATTRIBUTES`] slots).
pub fn compile(spec: &ZkSpecification) -> Result<Circuit, EngineError> {
    if spec.system.is_empty() {
        return Err(EngineError::CompilationFailed(
            "specification has an empty system identifier".into(),
        ));
    }
    if spec.attribute_count == 0 {
        return Err(EngineError::CompilationFailed(
            "specification has zero attribute slots".into(),
        ));
    }
    if spec.attribute_count > MAX_CIRCUIT_ATTRIBUTES {
        return Err(EngineError::CompilationFailed(format!(
            "{} attribute slots exceeds the maximum of {MAX_CIRCUIT_ATTRIBUTES}",
            spec.attribute_count
        )));
    }

    let mut constraints = Vec::with_capacity(spec.attribute_count + 2);
    constraints.push("issuer-signature/ecdsa-p256-sha256".to_owned());
    constraints.push("validity-window/utc-seconds".to_owned());
    for slot in 0..spec.attribute_count {
        constraints.push(format!("attribute-slot/{slot}/predicate"));
    }

    let layout = CircuitLayout {
        format: CIRCUIT_FORMAT,
        system: spec.system,
        version: spec.version,
        attribute_slots: spec.attribute_count,
        constraints,
    };
    let canonical = CanonicalBytes::new(&layout)?;
    tracing::debug!(
        system = spec.system,
        version = spec.version,
        slots = spec.attribute_count,
        size = canonical.len(),
        "compiled circuit"
    );
    Circuit::from_bytes(canonical.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::zk_specs;

    fn spec(version: u64, slots: usize) -> ZkSpecification {
        ZkSpecification {
            system: "mdoc-zk",
            version,
            attribute_count: slots,
            circuit_hash: "",
        }
    }

    #[test]
    fn compile_is_deterministic() {
        let spec = zk_specs()[0];
        let a = compile(&spec).unwrap();
        let b = compile(&spec).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn compiled_circuits_match_registry_hashes() {
        for spec in zk_specs() {
            let circuit = compile(spec).unwrap();
            assert!(circuit.matches_spec(spec), "hash mismatch for {spec}");
        }
    }

    #[test]
    fn different_versions_compile_to_different_bytes() {
        let a = compile(&zk_specs()[0]).unwrap();
        let b = compile(&zk_specs()[1]).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn layout_carries_one_constraint_per_slot() {
        let circuit = compile(&spec(9, 4)).unwrap();
        let text = String::from_utf8(circuit.into_bytes()).unwrap();
        assert!(text.contains("issuer-signature/ecdsa-p256-sha256"));
        assert!(text.contains("validity-window/utc-seconds"));
        assert!(text.contains("attribute-slot/3/predicate"));
        assert!(!text.contains("attribute-slot/4/predicate"));
    }

    #[test]
    fn malformed_specs_fail_compilation() {
        let empty_system = ZkSpecification {
            system: "",
            version: 1,
            attribute_count: 5,
            circuit_hash: "",
        };
        assert!(matches!(
            compile(&empty_system),
            Err(EngineError::CompilationFailed(_))
        ));
        assert!(matches!(
            compile(&spec(1, 0)),
            Err(EngineError::CompilationFailed(_))
        ));
        assert!(matches!(
            compile(&spec(1, MAX_CIRCUIT_ATTRIBUTES + 1)),
            Err(EngineError::CompilationFailed(_))
        ));
    }

    #[test]
    fn max_slots_still_compiles() {
        assert!(compile(&spec(1, MAX_CIRCUIT_ATTRIBUTES)).is_ok());
    }

    #[test]
    fn empty_bytes_rejected() {
        assert!(matches!(
            Circuit::from_bytes(Vec::new()),
            Err(EngineError::EmptyArtifact("circuit"))
        ));
    }

    #[test]
    fn matches_spec_is_case_sensitive() {
        let spec = zk_specs()[0];
        let circuit = compile(&spec).unwrap();
        let uppercase = ZkSpecification {
            circuit_hash: "B022BCC360B81364DD6A5E40F8E22F95CBBB3EE8485CA8447E62FBF0707712C8",
            ..spec
        };
        assert!(!circuit.matches_spec(&uppercase));
    }

    #[test]
    fn tampered_circuit_fails_spec_check() {
        let spec = zk_specs()[0];
        let mut bytes = compile(&spec).unwrap().into_bytes();
        bytes[0] ^= 0x01;
        let tampered = Circuit::from_bytes(bytes).unwrap();
        assert!(!tampered.matches_spec(&spec));
    }
}
