//! # mdoc_prove — Generate a Proof
//!
//! ```bash
//! # Prove the default request (age_over_18 = true) with the sample credential:
//! mdzk mdoc_prove -c circuit.bin -p proof.bin --pk issuer_pk.bin \
//!     -s transcript.bin -t 2026-01-01T00:00:00Z
//!
//! # Prove specific attributes of a credential file:
//! mdzk mdoc_prove -c circuit.bin -p proof.bin --pk issuer_pk.bin \
//!     -s transcript.bin -t 2026-01-01T00:00:00Z --mdoc mdoc.bin \
//!     --attribute issuing_country=DE --presence family_name
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use mdzk_crypto::IssuerPublicKey;
use mdzk_engine::{
    prove, registry, sample, AttributeKind, Circuit, Mdoc, RequestedAttribute, SpecSelector,
};

use crate::io::{read_artifact, write_artifact};

/// Arguments for `mdzk mdoc_prove`.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Circuit artifact to prove against.
    #[arg(short = 'c', long = "circuit")]
    pub circuit: PathBuf,

    /// Output path for the proof artifact.
    #[arg(short = 'p', long = "proof")]
    pub proof: PathBuf,

    /// Issuer public key file (64 raw bytes, x||y).
    #[arg(long = "pk")]
    pub pk: PathBuf,

    /// Session transcript file.
    #[arg(short = 's', long = "transcript")]
    pub transcript: PathBuf,

    /// Evaluation time, UTC with Z suffix (e.g. 2026-01-01T00:00:00Z).
    #[arg(short = 't', long = "time")]
    pub time: String,

    /// Expected document type; cross-checked against the credential.
    #[arg(short = 'd', long = "doc-type")]
    pub doc_type: Option<String>,

    /// Specification selector: "latest" or a registry index.
    #[arg(long, default_value = "latest")]
    pub zkspec: String,

    /// Credential file. Defaults to the built-in sample credential.
    #[arg(long)]
    pub mdoc: Option<PathBuf>,

    /// Equality predicate, as ID=VALUE. Repeatable; order is significant.
    #[arg(long = "attribute", value_name = "ID=VALUE")]
    pub attributes: Vec<String>,

    /// Presence predicate, as a bare ID. Repeatable; appended after
    /// --attribute predicates.
    #[arg(long = "presence", value_name = "ID")]
    pub presence: Vec<String>,
}

/// Execute `mdzk mdoc_prove`.
pub fn run_prove(args: &ProveArgs) -> Result<u8> {
    let selector: SpecSelector = args.zkspec.parse()?;
    let spec = registry::resolve(&selector)?;

    let circuit = Circuit::from_bytes(read_artifact(&args.circuit, "circuit")?)?;
    let pk_bytes = read_artifact(&args.pk, "issuer key")?;
    let issuer_key = IssuerPublicKey::from_raw_bytes(&pk_bytes)?;
    let transcript = read_artifact(&args.transcript, "transcript")?;

    let mdoc_bytes = match &args.mdoc {
        Some(path) => read_artifact(path, "mdoc")?,
        None => sample::sample_mdoc_bytes()?,
    };

    if let Some(expected) = &args.doc_type {
        let mdoc = Mdoc::parse(&mdoc_bytes)?;
        if &mdoc.claims.doc_type != expected {
            bail!(
                "credential doc type {:?} does not match requested {expected:?}",
                mdoc.claims.doc_type
            );
        }
    }

    let predicates = build_predicates(&args.attributes, &args.presence)?;

    let proof = prove(
        &circuit,
        spec,
        &mdoc_bytes,
        &issuer_key,
        &transcript,
        &predicates,
        &args.time,
    )?;
    write_artifact(&args.proof, proof.as_bytes(), "proof")?;

    println!("Proof generated for {spec}");
    println!("  predicates: {}", predicates.len());
    println!("  artifact:   {} ({} bytes)", args.proof.display(), proof.len());
    Ok(0)
}

/// Build the ordered predicate list from CLI arguments.
///
/// Equality predicates come first in the order given, then presence
/// predicates. With no arguments at all, falls back to the default request:
/// `age_over_18 = true`.
pub(crate) fn build_predicates(
    attributes: &[String],
    presence: &[String],
) -> Result<Vec<RequestedAttribute>> {
    if attributes.is_empty() && presence.is_empty() {
        return Ok(vec![sample::sample_predicate()?]);
    }
    let mut predicates = Vec::with_capacity(attributes.len() + presence.len());
    for pair in attributes {
        let (id, value) = pair
            .split_once('=')
            .with_context(|| format!("--attribute {pair:?}: expected ID=VALUE"))?;
        predicates.push(RequestedAttribute::new(id, value, AttributeKind::Primitive)?);
    }
    for id in presence {
        predicates.push(RequestedAttribute::new(
            id.as_str(),
            "",
            AttributeKind::Presence,
        )?);
    }
    Ok(predicates)
}
