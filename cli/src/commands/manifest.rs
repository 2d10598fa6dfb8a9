//! `nodeboot manifest` — render `key: "value"` manifest lines.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::manifest::{parse_assignment, render_manifest};

/// Arguments for the manifest command.
#[derive(Args)]
pub struct ManifestArgs {
    /// Entries in output order
    #[arg(value_name = "KEY=VALUE", required = true, value_parser = parse_assignment)]
    pub entries: Vec<(String, String)>,
}

/// Run the manifest command.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn run(app: &AppContext, args: &ManifestArgs) -> Result<()> {
    let manifest = render_manifest(args.entries.iter().map(|(k, v)| (k, v)));
    app.renderer().render_manifest(&manifest)
}
