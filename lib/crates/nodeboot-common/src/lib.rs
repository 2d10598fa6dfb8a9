pub mod cluster;
pub mod types;

pub use cluster::{ALTERNATE_PORT, DEFAULT_API_PORT, DEFAULT_SCHEME, K3S_URL_VAR};
pub use types::*;
