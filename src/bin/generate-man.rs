// Writes the pmdash man page to the given directory (default: current directory)

use anyhow::{Context, Result};
use clap::CommandFactory;
use pmdash::cli::Cli;
use std::path::PathBuf;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer).context("Failed to render man page")?;

    let out_path = out_dir.join("pmdash.1");
    std::fs::write(&out_path, buffer)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    println!("Wrote {}", out_path.display());
    Ok(())
}
