mod cli;
mod log;
mod telemetry;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Merge Tailwind CSS class lists so the last conflicting class wins
///
/// EXAMPLES:
///
///   twmerge merge px-2 py-1 p-4        # p-4
///   echo "hover:block hover:inline" | twmerge merge
///   twmerge explain md:hover:text-lg/7!
#[derive(Parser)]
#[command(name = "twmerge")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// TOML file with settings and taxonomy changes applied to the defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log timing, counts and library debug events to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a class list
    ///
    /// All arguments form one class list. Without arguments each line of
    /// stdin is merged and printed on its own line.
    Merge {
        /// Classes to merge
        classes: Vec<String>,
    },

    /// Show how class tokens are parsed and which group they belong to
    Explain {
        /// Class tokens to explain
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error!("twmerge", error = format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let start = Instant::now();
    let engine = cli::load_engine(cli.config.as_deref())?;

    match cli.command {
        Commands::Merge { classes } => {
            let result = cli::merge::execute(&engine, &classes, io::stdin().lock())?;
            for line in &result.lines {
                println!("{line}");
            }
            if cli.verbose {
                log_debug!(
                    "merge",
                    lines = result.lines.len(),
                    elapsed = format!("{:?}", start.elapsed()),
                );
            }
        }
        Commands::Explain { tokens } => {
            let result = cli::explain::execute(&engine, &tokens);
            for explanation in &result.explanations {
                println!("{explanation}");
            }
            if cli.verbose {
                log_debug!(
                    "explain",
                    tokens = result.explanations.len(),
                    elapsed = format!("{:?}", start.elapsed()),
                );
            }
        }
    }

    Ok(())
}
