//! # mdzk-cli — Command Handlers for the `mdzk` Binary
//!
//! One module per subcommand, each exposing a `run_*` handler that returns
//! the process exit code. All artifact files are raw bytes with no framing:
//! circuits and proofs as emitted by the engine, issuer public keys as
//! 64 raw bytes (x‖y), transcripts as opaque session bytes.

pub mod circuit_gen;
pub mod example;
pub mod io;
pub mod prove;
pub mod verify;
