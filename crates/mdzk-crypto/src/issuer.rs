//! # P-256 Issuer Keys and Signatures
//!
//! The issuing authority endorses mdoc claims with ECDSA over NIST P-256.
//! The public key is carried as two raw 32-byte coordinates, matching the
//! wire format the engine receives them in (a 64-byte x‖y key file).
//!
//! ## Serde
//!
//! - Public keys serialize as `{"x": hex, "y": hex}` so they can be folded
//!   into canonical statement encodings directly.
//! - Signatures serialize as 128-character hex strings (r‖s).

use mdzk_core::CanonicalBytes;
use p256::ecdsa::signature::{Signer, Verifier};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;

/// An issuer public key: the affine coordinates of a P-256 point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssuerPublicKey {
    x: [u8; 32],
    y: [u8; 32],
}

/// An ECDSA P-256 signature in fixed 64-byte r‖s form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EcdsaSignature(pub [u8; 64]);

/// An issuer signing key pair.
///
/// Does not implement `Serialize` — private keys must not leak into logs,
/// artifacts, or statements.
pub struct IssuerKeyPair {
    signing_key: p256::ecdsa::SigningKey,
}

// ---------------------------------------------------------------------------
// IssuerPublicKey
// ---------------------------------------------------------------------------

impl IssuerPublicKey {
    /// Build a key from its raw affine coordinates.
    ///
    /// Coordinate validity is only checked when the key is used; call
    /// [`IssuerPublicKey::to_verifying_key()`] to validate eagerly.
    pub fn from_coordinates(x: [u8; 32], y: [u8; 32]) -> Self {
        Self { x, y }
    }

    /// Parse the 64-byte x‖y wire form used by issuer key files.
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != 64 {
            return Err(CryptoError::InvalidPublicKey(format!(
                "expected 64 raw bytes (x||y), got {}",
                bytes.len()
            )));
        }
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[..32]);
        y.copy_from_slice(&bytes[32..]);
        Ok(Self { x, y })
    }

    /// Render the 64-byte x‖y wire form.
    pub fn to_raw_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.x);
        out[32..].copy_from_slice(&self.y);
        out
    }

    /// The x coordinate.
    pub fn x(&self) -> &[u8; 32] {
        &self.x
    }

    /// The y coordinate.
    pub fn y(&self) -> &[u8; 32] {
        &self.y
    }

    /// Lowercase hex rendering of the x coordinate.
    pub fn x_hex(&self) -> String {
        hex_encode(&self.x)
    }

    /// Lowercase hex rendering of the y coordinate.
    pub fn y_hex(&self) -> String {
        hex_encode(&self.y)
    }

    /// Convert to a `p256::ecdsa::VerifyingKey`, validating that the
    /// coordinates describe a point on the curve.
    pub fn to_verifying_key(&self) -> Result<p256::ecdsa::VerifyingKey, CryptoError> {
        let point = p256::EncodedPoint::from_affine_coordinates(
            p256::FieldBytes::from_slice(&self.x),
            p256::FieldBytes::from_slice(&self.y),
            false,
        );
        p256::ecdsa::VerifyingKey::from_encoded_point(&point)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
    }
}

impl Serialize for IssuerPublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut st = serializer.serialize_struct("IssuerPublicKey", 2)?;
        st.serialize_field("x", &self.x_hex())?;
        st.serialize_field("y", &self.y_hex())?;
        st.end()
    }
}

impl<'de> Deserialize<'de> for IssuerPublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            x: String,
            y: String,
        }
        let repr = Repr::deserialize(deserializer)?;
        let x = hex_to_array::<32>(&repr.x).map_err(serde::de::Error::custom)?;
        let y = hex_to_array::<32>(&repr.y).map_err(serde::de::Error::custom)?;
        Ok(Self { x, y })
    }
}

impl std::fmt::Debug for IssuerPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IssuerPublicKey(x={}..., y={}...)", hex_prefix(&self.x), hex_prefix(&self.y))
    }
}

// ---------------------------------------------------------------------------
// EcdsaSignature
// ---------------------------------------------------------------------------

impl EcdsaSignature {
    /// Create a signature from raw 64 bytes (r‖s).
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// The raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    /// Parse from a 128-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let bytes = hex_to_array::<64>(hex)?;
        Ok(Self(bytes))
    }
}

impl Serialize for EcdsaSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EcdsaSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for EcdsaSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EcdsaSignature({}...)", hex_prefix(&self.0))
    }
}

// ---------------------------------------------------------------------------
// IssuerKeyPair
// ---------------------------------------------------------------------------

impl IssuerKeyPair {
    /// Generate a fresh random issuer key pair.
    pub fn generate() -> Self {
        let signing_key = p256::ecdsa::SigningKey::random(&mut rand::rngs::OsRng);
        Self { signing_key }
    }

    /// Build a key pair from a fixed 32-byte scalar seed.
    ///
    /// Used for deterministic sample and test issuers. Fails if the seed is
    /// not a valid P-256 scalar.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = p256::ecdsa::SigningKey::from_slice(seed)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    /// The public key for this pair.
    pub fn public_key(&self) -> IssuerPublicKey {
        // The uncompressed encoding of a valid verifying key always carries
        // both coordinates.
        let point = self.signing_key.verifying_key().to_encoded_point(false);
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        if let (Some(px), Some(py)) = (point.x(), point.y()) {
            x.copy_from_slice(px);
            y.copy_from_slice(py);
        }
        IssuerPublicKey { x, y }
    }

    /// Sign canonical bytes with RFC 6979 deterministic ECDSA.
    ///
    /// The input must be `&CanonicalBytes`, so only data that went through
    /// the canonicalization pipeline can be endorsed.
    pub fn sign(&self, data: &CanonicalBytes) -> EcdsaSignature {
        let sig: p256::ecdsa::Signature = self.signing_key.sign(data.as_bytes());
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&sig.to_bytes());
        EcdsaSignature(bytes)
    }
}

impl std::fmt::Debug for IssuerKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IssuerKeyPair(<private>)")
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verify a P-256 ECDSA signature over canonical bytes.
///
/// Returns `Ok(())` for a valid signature, `CryptoError::VerificationFailed`
/// otherwise. The message parameter is `&CanonicalBytes`, enforcing at
/// compile time that only canonicalized data is verified.
pub fn verify(
    data: &CanonicalBytes,
    signature: &EcdsaSignature,
    public_key: &IssuerPublicKey,
) -> Result<(), CryptoError> {
    let vk = public_key.to_verifying_key()?;
    let sig = p256::ecdsa::Signature::from_slice(&signature.0)
        .map_err(|e| CryptoError::VerificationFailed(format!("malformed signature: {e}")))?;
    vk.verify(data.as_bytes(), &sig)
        .map_err(|e| CryptoError::VerificationFailed(e.to_string()))
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(4).map(|b| format!("{b:02x}")).collect()
}

fn hex_to_array<const N: usize>(hex: &str) -> Result<[u8; N], CryptoError> {
    let hex = hex.trim();
    if hex.len() != N * 2 {
        return Err(CryptoError::HexDecode(format!(
            "expected {} hex chars, got {}",
            N * 2,
            hex.len()
        )));
    }
    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|e| CryptoError::HexDecode(format!("invalid hex at position {i}: {e}")))?;
    }
    Ok(out)
}
