//! depot CLI
//!
//! Copies files and directories relative to a root directory and uploads
//! files through the configured transfer driver.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::Context;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = Context::new(cli.root, cli.absolute)?;
    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::CopyFile {
            source,
            dest_dir,
            name,
        } => commands::run_copy_file(ctx, &source, &dest_dir, name.as_deref()),
        Commands::CopyMany { dest_dir, sources } => {
            commands::run_copy_many(ctx, &dest_dir, &sources)
        }
        Commands::CopyDir { source, dest_dir } => commands::run_copy_dir(ctx, &source, &dest_dir),
        Commands::Mkdir { path } => commands::run_mkdir(ctx, &path),
        Commands::Delete { path } => commands::run_delete(ctx, &path),
        Commands::Write { path, text, append } => commands::run_write(ctx, &path, &text, append),
        Commands::Ingest { path } => commands::run_ingest(ctx, &path),
        Commands::Upload {
            source,
            dest,
            config,
        } => commands::run_upload(ctx, &source, &dest, &config),
    }
}
