//! jdbc-codec CLI - Parse and rebuild JDBC connection URLs.

use clap::Parser;

use jdbc_cli::cli::{Cli, Command};
use jdbc_cli::commands;
use jdbc_cli::config::Context;
use jdbc_cli::error::CliResult;
use jdbc_cli::output;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let ctx = Context::load(&cli.global)?;
    ctx.init_logging(cli.global.verbose);

    match cli.command {
        Command::Parse(args) => commands::parse::run(&ctx, args).await,
        Command::Build(args) => commands::build::run(&ctx, args).await,
        Command::Classify(args) => commands::classify::run(&ctx, args).await,
        Command::Dialect(args) => commands::dialect::run(&ctx, args).await,
        Command::Version => commands::version::run().await,
    }
}
