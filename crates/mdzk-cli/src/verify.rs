//! # mdoc_verify — Check a Proof Against Public Inputs
//!
//! ```bash
//! mdzk mdoc_verify -c circuit.bin -p proof.bin --pk issuer_pk.bin \
//!     -s transcript.bin -t 2026-01-01T00:00:00Z -d org.iso.18013.5.1.mDL
//! ```
//!
//! Every public input must match what the prover used bit for bit; any
//! disagreement is a rejection with exit code 1.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mdzk_crypto::IssuerPublicKey;
use mdzk_engine::{registry, verify, Circuit, SpecSelector};

use crate::io::read_artifact;
use crate::prove::build_predicates;

/// Arguments for `mdzk mdoc_verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Circuit artifact the proof was generated against.
    #[arg(short = 'c', long = "circuit")]
    pub circuit: PathBuf,

    /// Proof artifact to check.
    #[arg(short = 'p', long = "proof")]
    pub proof: PathBuf,

    /// Issuer public key file (64 raw bytes, x||y).
    #[arg(long = "pk")]
    pub pk: PathBuf,

    /// Session transcript file.
    #[arg(short = 's', long = "transcript")]
    pub transcript: PathBuf,

    /// Evaluation time, UTC with Z suffix.
    #[arg(short = 't', long = "time")]
    pub time: String,

    /// Expected document type.
    #[arg(short = 'd', long = "doc-type")]
    pub doc_type: String,

    /// Specification selector: "latest" or a registry index.
    #[arg(long, default_value = "latest")]
    pub zkspec: String,

    /// Equality predicate, as ID=VALUE. Repeatable; order is significant
    /// and must match the prover's.
    #[arg(long = "attribute", value_name = "ID=VALUE")]
    pub attributes: Vec<String>,

    /// Presence predicate, as a bare ID. Repeatable.
    #[arg(long = "presence", value_name = "ID")]
    pub presence: Vec<String>,
}

/// Execute `mdzk mdoc_verify`.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let selector: SpecSelector = args.zkspec.parse()?;
    let spec = registry::resolve(&selector)?;

    let circuit = Circuit::from_bytes(read_artifact(&args.circuit, "circuit")?)?;
    let proof = read_artifact(&args.proof, "proof")?;
    let pk_bytes = read_artifact(&args.pk, "issuer key")?;
    let issuer_key = IssuerPublicKey::from_raw_bytes(&pk_bytes)?;
    let transcript = read_artifact(&args.transcript, "transcript")?;
    let predicates = build_predicates(&args.attributes, &args.presence)?;

    verify(
        &circuit,
        spec,
        &issuer_key,
        &transcript,
        &predicates,
        &args.time,
        &proof,
        &args.doc_type,
    )?;

    println!("Proof verified for {spec}");
    println!("  doc type:   {}", args.doc_type);
    println!("  predicates: {}", predicates.len());
    println!("  time:       {}", args.time);
    Ok(0)
}
