//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use diskcheck_core::ReportFormat;
use diskcheck_core::remote::DEFAULT_SSH_PROGRAM;

/// Check disk space usage on a fleet of hosts via SSH
#[derive(Parser)]
#[command(name = "diskcheck")]
#[command(author, version, about = "Check disk space usage on multiple hosts via SSH")]
#[command(subcommand_negates_reqs = true)]
#[command(after_help = "Examples:
  diskcheck -c vms.yml
  diskcheck -c vms.yml --threshold 90
  diskcheck -c vms.yml --format json > output.json")]
pub struct Cli {
    /// Path to the host inventory (YAML, or TOML with a .toml extension)
    #[arg(short, long, required = true, env = "DISKCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disk usage percentage at which a filesystem is flagged (1-100)
    #[arg(
        short,
        long,
        default_value_t = i64::from(diskcheck_core::DEFAULT_THRESHOLD_PERCENT),
        allow_negative_numbers = true
    )]
    pub threshold: i64,

    /// Report format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// SSH client executable
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SSH_PROGRAM)]
    pub ssh_program: String,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Auxiliary commands; without one, the fleet check runs
#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(about = "Generate shell completions for bash, zsh, fish, etc.")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate a man page
    #[command(about = "Write a roff man page to stdout")]
    Manpage,
}

/// Output format for the report
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON array, one object per host
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}
