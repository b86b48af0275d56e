//! # Cryptographic Error Types
//!
//! Structured errors for key handling and signature verification,
//! with `thiserror` for diagnostic context.

use thiserror::Error;

/// Errors from cryptographic operations in the mdzk engine.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// ECDSA signature verification failed.
    #[error("P-256 signature verification failed: {0}")]
    VerificationFailed(String),

    /// Public key coordinates do not describe a valid curve point.
    #[error("invalid P-256 public key: {0}")]
    InvalidPublicKey(String),

    /// Private key scalar is invalid for the curve.
    #[error("invalid P-256 private key: {0}")]
    InvalidPrivateKey(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_carry_context() {
        let err = CryptoError::VerificationFailed("bad sig".into());
        assert!(format!("{err}").contains("bad sig"));

        let err = CryptoError::HexDecode("odd length".into());
        assert!(format!("{err}").contains("odd length"));
    }
}
