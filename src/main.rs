use crate::structs::cli::Cli;
use clap::Parser;
use crate::workers::command_runner::CommandRunner;

mod structs;
mod services;
mod helpers;
mod enums;
mod errors;
mod logger;
mod config;
mod traits;
mod workers;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if runner.run_command(cli.command).await.is_err() {
        std::process::exit(1);
    }
}
