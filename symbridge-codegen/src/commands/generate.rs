use std::path::PathBuf;

use clap::Args;
use symbridge_codegen::{Interface, Renderer};

use crate::cli::GlobalFlags;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Interface file (YAML)
    pub interface: PathBuf,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs, _global: &GlobalFlags) -> anyhow::Result<()> {
    let interface = Interface::load(&args.interface)?;
    let text = Renderer::new()?.generate(&interface)?;
    super::emit(&text, args.out.as_deref())
}
