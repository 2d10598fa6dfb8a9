//! `nodeboot keys` — fetch and list SSH authorized keys.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use nodeboot_common::KeysOutput;

use crate::app::AppContext;
use crate::application::ports::Fetcher;
use crate::application::services::{authorized_keys, config_service};
use crate::domain::ssh::key_record;
use crate::output::progress::with_spinner;

/// Arguments for the keys command.
#[derive(Args)]
pub struct KeysArgs {
    /// URL serving authorized-keys lines
    pub url: String,

    /// Print keys as authorized-keys lines only
    #[arg(long)]
    pub raw: bool,

    /// Request timeout in seconds (default: fetch.timeout_secs)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: Option<u64>,
}

/// Run the keys command.
///
/// # Errors
///
/// Returns an error if the fetch fails or no valid key is found.
pub fn run(app: &AppContext, args: &KeysArgs, fetcher: &impl Fetcher) -> Result<()> {
    let timeout_secs = match args.timeout {
        Some(secs) => secs,
        None => config_service::load_config(&app.config_store)?.fetch.timeout_secs,
    };
    let timeout = Duration::from_secs(timeout_secs);

    let keys = with_spinner(&app.output, &format!("Fetching {}", args.url), || {
        authorized_keys::extract_keys_with_timeout(fetcher, &args.url, timeout)
    })?;

    let out = KeysOutput {
        source: args.url.clone(),
        count: keys.len(),
        keys: keys.iter().map(key_record).collect(),
    };
    app.renderer().render_keys(&out, args.raw)
}
