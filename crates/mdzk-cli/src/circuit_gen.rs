//! # circuit_gen — Compile a Registered Circuit to Disk
//!
//! ```bash
//! # List the published specifications:
//! mdzk circuit_gen --zkspec list
//!
//! # Compile the newest specification:
//! mdzk circuit_gen --zkspec latest -c circuit.bin
//!
//! # Compile a specific registry entry:
//! mdzk circuit_gen --zkspec 0 -c circuit-v1.bin
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mdzk_engine::{compile, registry, SpecSelector};

use crate::io::write_artifact;

/// Arguments for `mdzk circuit_gen`.
#[derive(Args, Debug)]
pub struct CircuitGenArgs {
    /// Specification selector: "latest", "list", or a registry index.
    #[arg(long, default_value = "latest")]
    pub zkspec: String,

    /// Output path for the circuit artifact. Required unless listing.
    #[arg(short = 'c', long = "circuit")]
    pub circuit: Option<PathBuf>,
}

/// Execute `mdzk circuit_gen`.
pub fn run_circuit_gen(args: &CircuitGenArgs) -> Result<u8> {
    if args.zkspec.eq_ignore_ascii_case("list") {
        return run_list();
    }

    let selector: SpecSelector = args.zkspec.parse()?;
    let spec = registry::resolve(&selector)?;
    let out = args
        .circuit
        .as_deref()
        .context("-c/--circuit is required when generating a circuit")?;

    let circuit = compile(spec)?;
    write_artifact(out, circuit.as_bytes(), "circuit")?;

    println!("Generated circuit for {spec}");
    println!("  artifact: {} ({} bytes)", out.display(), circuit.len());
    println!("  digest:   sha256:{}", circuit.digest_hex());
    Ok(0)
}

fn run_list() -> Result<u8> {
    println!("Published proof system specifications:");
    println!();
    for (index, spec) in registry::zk_specs().iter().enumerate() {
        println!("  [{index}] {spec}");
    }
    println!();
    println!("Total: {} specifications", registry::zk_specs().len());
    Ok(0)
}
