use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use taskboard::cli;
use taskboard::cli::commands::{Cli, Commands};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let server = cli_args.server;

    let exit_code = match cli_args.command {
        Commands::Serve { port, db } => cli::serve::run(port, db).await,
        Commands::Init { db } => cli::init::run(&db, json_output),
        Commands::Countdown { id, watch } => cli::countdown::run(id, watch, &server, json_output).await,
        cmd => cli::task::run(cmd, &server, json_output).await,
    };

    process::exit(exit_code);
}
