//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use nodeboot_common::{KeysOutput, ServerUrlOutput, StatusOutput};
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::config::NodebootConfig;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let styles = if use_colors {
            Styles::colored()
        } else {
            Styles::default()
        };

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Dispatches rendering to the human or JSON backend.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render fetched authorized keys.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_keys(&self, keys: &KeysOutput, raw: bool) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_keys(keys, raw);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(keys),
        }
    }

    /// Render a canonical server URL.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_server_url(&self, out: &ServerUrlOutput) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_server_url(out);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(out),
        }
    }

    /// Render manifest text.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_manifest(&self, manifest: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_manifest(manifest);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({ "manifest": manifest })),
        }
    }

    /// Render node status.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_status(&self, status: &StatusOutput) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_status(status);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(status),
        }
    }

    /// Render the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &NodebootConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({
                "path": path.display().to_string(),
                "config": config,
            })),
        }
    }

    /// Render one configuration value.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_value(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config_value(value);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({ key: value })),
        }
    }

    /// Confirm a configuration change.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config_set(key, value);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({ key: value })),
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({ "version": version })),
        }
    }
}
