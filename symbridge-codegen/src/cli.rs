//! CLI definition and argument parsing for symbridge-codegen.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "symbridge-codegen", author, version, about = "symbridge binding generator")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render bindings! glue for an interface file
    Generate(crate::commands::generate::GenerateArgs),

    /// Render C prototypes for one or more interface files
    Header(crate::commands::header::HeaderArgs),

    /// Compare a descriptor table dump with an interface file
    Check(crate::commands::check::CheckArgs),
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}
