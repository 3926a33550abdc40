#![forbid(unsafe_code)]
//! Render shell completions and the man page for `buildnum`.
//!
//! Usage: `generate-assets [OUT_DIR]` (defaults to `dist`).

use anyhow::Context;
use buildnum::cli::Args;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

const BIN_NAME: &str = "buildnum";

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("{}: failed to create", dir.display()))?;
    }

    for shell in Shell::value_variants() {
        let mut cmd = Args::command();
        generate_to(*shell, &mut cmd, BIN_NAME, &completions_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let man_path = man_dir.join(format!("{BIN_NAME}.1"));
    fs::write(&man_path, page)
        .with_context(|| format!("{}: failed to write", man_path.display()))?;

    eprintln!(
        "generated completions in {} and {}",
        completions_dir.display(),
        man_path.display()
    );
    Ok(())
}
