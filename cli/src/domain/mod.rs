//! Domain layer — pure parsing, validation and rendering.
//!
//! Nothing in this module performs I/O. Functions take bytes or strings in
//! and return data or typed errors out.

pub mod config;
pub mod error;
pub mod manifest;
pub mod server_url;
pub mod ssh;
pub mod status;

pub use config::{NodebootConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, FetchError, KeyExtractError, ServerUrlError};
pub use manifest::render_manifest;
pub use server_url::{format_server_url, server_url_from_env_data};
pub use ssh::{parse_authorized_keys, require_keys};
pub use status::status_from_phases;
