//! `nodeboot status` — report node readiness from local state.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::{config_service, node_status};
use crate::infra::phases::FilePhaseSource;

/// Run the status command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(app: &AppContext) -> Result<()> {
    let config = config_service::load_config(&app.config_store)?;
    let source = FilePhaseSource::new(&config.status.phase_file);
    let status = node_status::gather_status(&source);
    app.renderer().render_status(&status)
}
