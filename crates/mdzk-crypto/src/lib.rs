//! # mdzk-crypto — Issuer Key Material for the mdzk Proof Engine
//!
//! mdoc credentials are endorsed by an issuing authority with an ECDSA
//! signature over the NIST P-256 curve, and the issuer's public key travels
//! as two raw coordinates. This crate wraps that key material in typed
//! newtypes and restricts signing/verification input to `CanonicalBytes`.
//!
//! ## Security Invariant
//!
//! - Signing input MUST be `&CanonicalBytes` — you cannot sign raw bytes.
//!   Credential claims are canonicalized before endorsement, so issuer and
//!   verifier agree on the signed bytes by construction.
//! - Private keys are never serialized or logged. `IssuerKeyPair` does not
//!   implement `Serialize` and its `Debug` impl redacts the key.
//! - Signing uses RFC 6979 deterministic nonces (the `p256` crate default),
//!   so issuing the same claims twice yields byte-identical credentials.

pub mod error;
pub mod issuer;

pub use error::CryptoError;
pub use issuer::{verify, EcdsaSignature, IssuerKeyPair, IssuerPublicKey};
