//! # Attribute Predicate Model
//!
//! A verifier's disclosure request is a list of [`RequestedAttribute`]s.
//! Fields are private and bounded; the only constructor rejects oversized
//! input instead of truncating it, so a predicate that was accepted is the
//! predicate that gets proven.

use crate::error::PredicateError;

/// Maximum length of an attribute identifier, in bytes.
pub const MAX_ATTRIBUTE_ID_LEN: usize = 32;

/// Maximum length of a requested attribute value, in bytes.
pub const MAX_ATTRIBUTE_VALUE_LEN: usize = 64;

/// How a requested attribute is checked against the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Equality: the credential's value must match the requested bytes.
    Primitive,
    /// Existence: the attribute must be present; its value is not compared.
    Presence,
}

impl AttributeKind {
    /// Identifier used in statement encodings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Presence => "presence",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute a verifier asks the prover to demonstrate.
///
/// Identifiers and values are byte strings: attribute names are typically
/// UTF-8 (`age_over_18`), but nothing in the protocol requires it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestedAttribute {
    id: Vec<u8>,
    value: Vec<u8>,
    kind: AttributeKind,
}

impl RequestedAttribute {
    /// Build a validated request.
    ///
    /// # Errors
    ///
    /// Rejects an empty identifier, an identifier over
    /// [`MAX_ATTRIBUTE_ID_LEN`] bytes, or a value over
    /// [`MAX_ATTRIBUTE_VALUE_LEN`] bytes. Oversized input is an error, never
    /// silently cut to fit.
    pub fn new(
        id: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
        kind: AttributeKind,
    ) -> Result<Self, PredicateError> {
        let id = id.into();
        let value = value.into();
        if id.is_empty() {
            return Err(PredicateError::EmptyIdentifier);
        }
        if id.len() > MAX_ATTRIBUTE_ID_LEN {
            return Err(PredicateError::IdentifierOverflow {
                len: id.len(),
                max: MAX_ATTRIBUTE_ID_LEN,
            });
        }
        if value.len() > MAX_ATTRIBUTE_VALUE_LEN {
            return Err(PredicateError::ValueOverflow {
                len: value.len(),
                max: MAX_ATTRIBUTE_VALUE_LEN,
            });
        }
        Ok(Self { id, value, kind })
    }

    /// The attribute identifier bytes.
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// The requested value bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// How this attribute is checked.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// The identifier as text, for diagnostics.
    pub fn id_lossy(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }
}
