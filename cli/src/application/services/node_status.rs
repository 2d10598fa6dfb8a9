//! Application service — node status use-case.
//!
//! Best-effort: a phase source that cannot be read yields `Unknown`, never an
//! error.

use nodeboot_common::{NodeStatus, StatusOutput};

use crate::application::ports::PhaseSource;
use crate::domain::status::status_from_phases;

/// Coarse readiness of the local node.
pub fn get_status(source: &impl PhaseSource) -> NodeStatus {
    gather_status(source).status
}

/// Readiness together with the phases it was computed from.
pub fn gather_status(source: &impl PhaseSource) -> StatusOutput {
    let phases = match source.phases() {
        Ok(phases) => phases,
        Err(e) => {
            tracing::debug!("phase source unavailable: {e:#}");
            Vec::new()
        }
    };
    StatusOutput {
        status: status_from_phases(&phases),
        phases,
    }
}
