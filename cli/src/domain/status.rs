//! Node readiness derived from the phases of its system components.

use nodeboot_common::NodeStatus;

/// Phase a component reports once it is serving.
pub const READY_PHASE: &str = "Running";

/// Collapses component phases into a single status.
///
/// No phases at all means nothing is known about the node yet.
#[must_use]
pub fn status_from_phases<S: AsRef<str>>(phases: &[S]) -> NodeStatus {
    if phases.is_empty() {
        return NodeStatus::Unknown;
    }
    if phases.iter().all(|p| p.as_ref() == READY_PHASE) {
        NodeStatus::Ready
    } else {
        NodeStatus::NotReady
    }
}

/// Parses one phase per line, ignoring blank lines and `#` comments.
#[must_use]
pub fn parse_phases(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}
