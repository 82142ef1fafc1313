//! CLI for the urlq URL toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlq_core::config::{self, OutputFormat};

use commands::{run_completions, run_demo, run_man, run_parse, run_process, run_validate};

/// Top-level CLI for the urlq URL toolkit.
#[derive(Debug, Parser)]
#[command(name = "urlq")]
#[command(about = "urlq: URL decomposition and validation toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a URL into its six components.
    Parse {
        /// URL to decompose.
        url: String,

        /// Print the record as JSON instead of a text table.
        #[arg(long)]
        json: bool,
    },

    /// Check that a URL carries both a scheme and a host.
    Validate {
        /// URL to check.
        url: String,
    },

    /// Filter a list of URLs and decompose the valid ones, in input order.
    Process {
        /// URLs to filter and decompose.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print records as JSON lines instead of text tables.
        #[arg(long)]
        json: bool,
    },

    /// Run the fixed demonstration: startup handlers, then one decomposition.
    Demo,

    /// Generate shell completions for the given shell.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Render the urlq man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let json_default = cfg.output == OutputFormat::Json;

        match cli.command {
            CliCommand::Parse { url, json } => run_parse(&url, json || json_default)?,
            CliCommand::Validate { url } => run_validate(&url)?,
            CliCommand::Process { urls, json } => run_process(&urls, json || json_default)?,
            CliCommand::Demo => run_demo(&cfg.demo_url)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
