//! # mdoc_example — Inspect and Export the Built-in Sample Data
//!
//! Prints a summary of the deterministic sample credential, issuer key, and
//! session transcript. With `--out-dir` the artifacts are written to disk in
//! the raw formats `mdoc_prove` and `mdoc_verify` consume.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mdzk_engine::sample;

use crate::io::write_artifact;

/// Arguments for `mdzk mdoc_example`.
#[derive(Args, Debug)]
pub struct ExampleArgs {
    /// Directory to write `mdoc.bin`, `issuer_pk.bin`, and `transcript.bin`.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute `mdzk mdoc_example`.
pub fn run_example(args: &ExampleArgs) -> Result<u8> {
    let mdoc = sample::sample_mdoc_bytes()?;
    let issuer_pk = sample::sample_issuer()?.public_key().to_raw_bytes();
    let transcript = sample::sample_transcript();

    println!("Sample mdoc credential:");
    println!("  doc type:   {}", sample::SAMPLE_DOC_TYPE);
    println!("  mdoc:       {} bytes", mdoc.len());
    println!("  issuer key: {} bytes (x||y)", issuer_pk.len());
    println!("  transcript: {} bytes", transcript.len());
    println!("  time:       {}", sample::SAMPLE_TIME);

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
        let mdoc_path = dir.join("mdoc.bin");
        let pk_path = dir.join("issuer_pk.bin");
        let transcript_path = dir.join("transcript.bin");
        write_artifact(&mdoc_path, &mdoc, "mdoc")?;
        write_artifact(&pk_path, &issuer_pk, "issuer key")?;
        write_artifact(&transcript_path, &transcript, "transcript")?;
        println!();
        println!("Wrote {}", mdoc_path.display());
        println!("Wrote {}", pk_path.display());
        println!("Wrote {}", transcript_path.display());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdzk_crypto::IssuerPublicKey;
    use mdzk_engine::Mdoc;

    #[test]
    fn summary_only_exits_zero() {
        assert_eq!(run_example(&ExampleArgs { out_dir: None }).unwrap(), 0);
    }

    #[test]
    fn exported_artifacts_are_usable() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExampleArgs {
            out_dir: Some(dir.path().to_path_buf()),
        };
        assert_eq!(run_example(&args).unwrap(), 0);

        let mdoc_bytes = std::fs::read(dir.path().join("mdoc.bin")).unwrap();
        let pk_bytes = std::fs::read(dir.path().join("issuer_pk.bin")).unwrap();
        let transcript = std::fs::read(dir.path().join("transcript.bin")).unwrap();

        assert_eq!(pk_bytes.len(), 64);
        assert_eq!(transcript, sample::sample_transcript());

        let mdoc = Mdoc::parse(&mdoc_bytes).unwrap();
        let pk = IssuerPublicKey::from_raw_bytes(&pk_bytes).unwrap();
        mdoc.verify_issuer(&pk).unwrap();
    }

    #[test]
    fn export_is_deterministic_across_runs() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        for dir in [&a, &b] {
            run_example(&ExampleArgs {
                out_dir: Some(dir.path().to_path_buf()),
            })
            .unwrap();
        }
        for name in ["mdoc.bin", "issuer_pk.bin", "transcript.bin"] {
            assert_eq!(
                std::fs::read(a.path().join(name)).unwrap(),
                std::fs::read(b.path().join(name)).unwrap(),
                "{name}"
            );
        }
    }
}
