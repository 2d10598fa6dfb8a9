//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::infra::http::UreqFetcher;

/// Bootstrap configuration for nodes joining a cluster
#[derive(Parser)]
#[command(
    name = "nodeboot",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also disabled by any NO_COLOR value)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch SSH authorized keys from a URL
    Keys(commands::keys::KeysArgs),

    /// Print the canonical cluster server URL
    ServerUrl(commands::server_url::ServerUrlArgs),

    /// Render KEY=VALUE pairs as manifest lines
    Manifest(commands::manifest::ManifestArgs),

    /// Show node readiness
    Status,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Keys(args) => commands::keys::run(&app, &args, &UreqFetcher::default()),
            Command::ServerUrl(args) => commands::server_url::run(&app, &args),
            Command::Manifest(args) => commands::manifest::run(&app, &args),
            Command::Status => commands::status::run(&app),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        }
    }
}
