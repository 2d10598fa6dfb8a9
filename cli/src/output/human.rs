//! Human-readable terminal renderer.

use std::path::Path;

use nodeboot_common::{KeysOutput, NodeStatus, ServerUrlOutput, StatusOutput};
use owo_colors::OwoColorize as _;

use crate::domain::config::NodebootConfig;
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders output types as human-readable terminal output using `OutputContext`.
///
/// Payloads a script might capture (URLs, manifests, raw keys) go to stdout
/// undecorated and are printed even in quiet mode.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render fetched authorized keys.
    pub fn render_keys(&self, keys: &KeysOutput, raw: bool) {
        if raw {
            for key in &keys.keys {
                println!("{}", key.openssh);
            }
            return;
        }
        self.ctx
            .success(&format!("{} key(s) from {}", keys.count, keys.source));
        for key in &keys.keys {
            let comment = key.comment.as_deref().unwrap_or("");
            println!(
                "  {:<20} {}  {}",
                key.algorithm,
                key.fingerprint,
                comment.style(self.ctx.styles.dim)
            );
        }
    }

    /// Render a canonical server URL.
    pub fn render_server_url(&self, out: &ServerUrlOutput) {
        println!("{}", out.server_url);
    }

    /// Render manifest text exactly as produced.
    pub fn render_manifest(&self, manifest: &str) {
        print!("{manifest}");
    }

    /// Render node status.
    pub fn render_status(&self, status: &StatusOutput) {
        let token = status.status.as_str();
        let styled = match status.status {
            NodeStatus::Ready => token.style(self.ctx.styles.success),
            NodeStatus::NotReady => token.style(self.ctx.styles.warning),
            NodeStatus::Unknown => token.style(self.ctx.styles.dim),
        };
        println!("{styled}");
        if !status.phases.is_empty() {
            self.ctx
                .kv("Phases:", &status.phases.join(", "));
        }
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &NodebootConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<22} {}", "fetch.timeout_secs:", config.fetch.timeout_secs);
        println!("  {:<22} {}", "status.phase_file:", config.status.phase_file);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            format!("{CONFIG_ENV}:"),
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "RUST_LOG:",
            std::env::var("RUST_LOG").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }

    /// Render a single configuration value.
    pub fn render_config_value(&self, value: &str) {
        println!("{value}");
    }

    /// Confirm a configuration change. Suppressed when `quiet`.
    pub fn render_config_set(&self, key: &str, value: &str) {
        self.ctx.success(&format!("Set {key} = {value}"));
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("nodeboot {version}");
    }
}
