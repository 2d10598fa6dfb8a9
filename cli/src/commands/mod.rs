//! Command implementations

pub mod config;
pub mod keys;
pub mod manifest;
pub mod server_url;
pub mod status;
pub mod version;
