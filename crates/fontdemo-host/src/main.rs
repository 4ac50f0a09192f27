// fontdemo-host: Desktop runner for the fontdemo directory inspector
//
// Prints the same report the Android app shows, which makes it easy to check
// behavior against a local directory tree.

use anyhow::Result;
use clap::{Parser, Subcommand};

use fontdemo_host::OutputFormat;

#[derive(Parser)]
#[command(name = "fontdemo-host", about = "Desktop runner for the fontdemo directory inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a directory's immediate entries
    Inspect {
        /// Directory to inspect (used verbatim)
        directory: String,

        /// Print the typed outcome as JSON instead of the app's text report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging. Stdout carries the report, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { directory, json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            println!("{}", fontdemo_host::inspect(&directory, format)?);
        }
    }

    Ok(())
}
