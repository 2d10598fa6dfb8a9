//! `nodeboot server-url` — canonical cluster server URL.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use nodeboot_common::ServerUrlOutput;

use crate::app::AppContext;
use crate::domain::server_url::{format_server_url, server_url_from_env_data};

/// Arguments for the server-url command.
#[derive(Args)]
pub struct ServerUrlArgs {
    /// Host, IP or URL of the cluster API server
    #[arg(required_unless_present = "env_file", conflicts_with = "env_file")]
    pub address: Option<String>,

    /// Read K3S_URL from an env file ("-" for stdin) and remap it to the alternate port
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

/// Run the server-url command.
///
/// # Errors
///
/// Returns an error if the env file cannot be read or lacks a usable `K3S_URL`.
pub fn run(app: &AppContext, args: &ServerUrlArgs) -> Result<()> {
    let server_url = match (&args.address, &args.env_file) {
        (_, Some(path)) => {
            let data = read_env_data(path)?;
            server_url_from_env_data(&data)?
        }
        (Some(address), None) => format_server_url(address.trim()),
        (None, None) => anyhow::bail!("either an address or --env-file is required"),
    };
    app.renderer()
        .render_server_url(&ServerUrlOutput { server_url })
}

fn read_env_data(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("cannot read env data from stdin")?;
        return Ok(data);
    }
    std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}
