use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "pickcheck")]
#[clap(about = "Cherry-pick verification tool for GitHub pull requests", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
