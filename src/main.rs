use std::{fs::File, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

mod check;
mod prefix_tree;
mod rank;
mod ranking;
mod report;
mod segment;
mod source;
mod word;

use check::{execute_check, CheckArgs};
use rank::{execute_rank, RankArgs};

/// Finds the longest words that are made up of other words from the same list.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the longest and second-longest compound words of each word list.
    Rank(RankArgs),
    /// Show how words split against a dictionary.
    Check(CheckArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let writer = match &cli.log_file {
        Some(path) => BoxMakeWriter::new(File::create(path)?),
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .init();

    match cli.command {
        Command::Rank(args) => execute_rank(args).await,
        Command::Check(args) => execute_check(args).await,
    }
}
