use std::path::PathBuf;

use clap::Args;
use symbridge_codegen::{Interface, header};

use crate::cli::GlobalFlags;

#[derive(Args, Debug)]
pub struct HeaderArgs {
    /// Interface files (YAML)
    #[arg(required = true)]
    pub interfaces: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: HeaderArgs, _global: &GlobalFlags) -> anyhow::Result<()> {
    let mut text = String::new();
    for path in &args.interfaces {
        text.push_str(&header::prototypes(&Interface::load(path)?)?);
    }
    super::emit(&text, args.out.as_deref())
}
