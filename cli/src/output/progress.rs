//! Progress indicators using indicatif

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::OutputContext;

/// Create a spinner for indeterminate progress.
///
/// # Panics
///
/// Never in practice: the template is a compile-time constant.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .template("  {spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run a blocking `f` behind a spinner when the terminal wants progress.
///
/// The spinner ticks on its own thread, so `f` may block on network I/O.
pub fn with_spinner<T>(ctx: &OutputContext, msg: &str, f: impl FnOnce() -> T) -> T {
    if !ctx.show_progress() {
        return f();
    }
    let pb = spinner(msg);
    let out = f();
    pb.finish_and_clear();
    out
}
