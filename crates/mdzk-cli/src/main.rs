//! # mdzk CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Exit code 0 on success, 1 on any reported failure.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdzk_cli::circuit_gen::{run_circuit_gen, CircuitGenArgs};
use mdzk_cli::example::{run_example, ExampleArgs};
use mdzk_cli::prove::{run_prove, ProveArgs};
use mdzk_cli::verify::{run_verify, VerifyArgs};

/// mdzk — privacy-preserving proofs over mdoc credentials.
///
/// Compiles registered circuits, exports sample data, and generates and
/// verifies zero-knowledge attribute proofs for mobile documents.
#[derive(Parser, Debug)]
#[command(name = "mdzk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a registered circuit specification to a circuit artifact.
    #[command(name = "circuit_gen")]
    CircuitGen(CircuitGenArgs),

    /// Print or export the built-in sample credential, issuer key, and transcript.
    #[command(name = "mdoc_example")]
    MdocExample(ExampleArgs),

    /// Generate a proof that a credential satisfies the requested attributes.
    #[command(name = "mdoc_prove")]
    MdocProve(ProveArgs),

    /// Verify a proof against the public inputs.
    #[command(name = "mdoc_verify")]
    MdocVerify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::CircuitGen(args) => run_circuit_gen(&args),
        Commands::MdocExample(args) => run_example(&args),
        Commands::MdocProve(args) => run_prove(&args),
        Commands::MdocVerify(args) => run_verify(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
