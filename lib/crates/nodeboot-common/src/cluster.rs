//! Well-known names and ports of the cluster a node joins.

/// Environment variable carrying the primary API endpoint of the cluster.
pub const K3S_URL_VAR: &str = "K3S_URL";

/// Port of the cluster API server when the address does not name one.
pub const DEFAULT_API_PORT: u16 = 6443;

/// Port of the secondary service co-located with the API server.
pub const ALTERNATE_PORT: u16 = 8443;

/// Scheme used when qualifying a bare host.
pub const DEFAULT_SCHEME: &str = "https";
