use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Args;
use symbridge_codegen::{Interface, compare, parse_table};

use crate::cli::GlobalFlags;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Interface file (YAML)
    pub interface: PathBuf,

    /// Descriptor table dump (JSON)
    pub descriptors: PathBuf,
}

pub fn execute(args: CheckArgs, _global: &GlobalFlags) -> anyhow::Result<()> {
    let interface = Interface::load(&args.interface)?;
    let table = std::fs::read_to_string(&args.descriptors)
        .with_context(|| format!("failed to read {}", args.descriptors.display()))?;
    let compiled = parse_table(&table)?;
    let declared = interface.descriptors()?;

    let mismatches = compare(&declared, &compiled);
    if !mismatches.is_empty() {
        for mismatch in &mismatches {
            eprintln!("{}", mismatch);
        }
        bail!("{} binding(s) disagree with {}", mismatches.len(), args.interface.display());
    }

    println!("{} binding(s) match {}", declared.len(), args.interface.display());
    Ok(())
}
