//! # Canonical Serialization — JCS Byte Production
//!
//! Defines `CanonicalBytes`, the sole construction path for bytes used in
//! digest and signature computation across the mdzk workspace.
//!
//! ## Security Invariant
//!
//! A proof only verifies when the prover and the verifier derive
//! byte-identical public statements from the same logical inputs. The
//! `CanonicalBytes` newtype has a private inner field, so the only way to
//! obtain canonical bytes is through `CanonicalBytes::new()`, which rejects
//! floats and then serializes with RFC 8785 (JSON Canonicalization Scheme):
//! sorted keys, compact separators, deterministic output. Any function that
//! hashes or signs structured data takes `&CanonicalBytes`, which makes the
//! "wrong serialization path" defect class structurally impossible.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization with float rejection.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalBytes::new()`].
/// - No value in the encoded tree is a non-integer number.
/// - Serialization uses sorted keys and compact separators (RFC 8785).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::FloatRejected`] if the value contains
    /// a non-integer number, or [`CanonicalizationError::SerializationFailed`]
    /// if JCS serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest or signature computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper, yielding the owned byte vector.
    ///
    /// Used where an engine artifact (circuit, proof) is handed to the
    /// caller as an owned opaque blob.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk the JSON value tree and reject any non-integer number.
///
/// Integers pass through unchanged; `null`, `bool`, and `string` are always
/// canonical-safe. Objects and arrays are recursed.
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Object(map) => map.values().try_for_each(reject_floats),
        Value::Array(arr) => arr.iter().try_for_each(reject_floats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_keys_compact_separators() {
        let data = serde_json::json!({"z": 1, "a": 2, "m": "x"});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"a":2,"m":"x","z":1}"#);
    }

    #[test]
    fn nested_objects_sorted() {
        let data = serde_json::json!({"outer": {"b": 2, "a": 1}, "arr": [3, 1]});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"arr":[3,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn array_order_preserved() {
        // Array element order is part of the canonical contract: predicate
        // lists are folded into statements positionally.
        let a = CanonicalBytes::new(&serde_json::json!(["x", "y"])).unwrap();
        let b = CanonicalBytes::new(&serde_json::json!(["y", "x"])).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn floats_rejected() {
        let result = CanonicalBytes::new(&serde_json::json!({"amount": 1.5}));
        match result.unwrap_err() {
            CanonicalizationError::FloatRejected(f) => assert_eq!(f, 1.5),
            other => panic!("expected FloatRejected, got {other}"),
        }
    }

    #[test]
    fn deeply_nested_float_rejected() {
        let data = serde_json::json!({"a": [{"b": {"c": 3.25}}]});
        assert!(CanonicalBytes::new(&data).is_err());
    }

    #[test]
    fn integers_accepted() {
        let cb = CanonicalBytes::new(&serde_json::json!({"n": -42, "m": 9999999999i64})).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"m":9999999999,"n":-42}"#);
    }

    #[test]
    fn null_and_bool_pass_through() {
        let cb = CanonicalBytes::new(&serde_json::json!({"a": null, "b": true})).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"a":null,"b":true}"#);
    }

    #[test]
    fn empty_object_and_len() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(cb.as_bytes(), b"{}");
        assert_eq!(cb.len(), 2);
        assert!(!cb.is_empty());
    }

    #[test]
    fn into_bytes_round_trip() {
        let cb = CanonicalBytes::new(&serde_json::json!({"k": "v"})).unwrap();
        let bytes = cb.clone().into_bytes();
        assert_eq!(bytes, cb.as_bytes());
    }

    #[test]
    fn unicode_passes_through_as_utf8() {
        let cb = CanonicalBytes::new(&serde_json::json!({"name": "\u{00e9}"})).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert!(s.contains('\u{00e9}'));
    }
}
