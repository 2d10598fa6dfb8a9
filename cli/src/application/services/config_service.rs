//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::NodebootConfig;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<NodebootConfig> {
    store.load()
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &NodebootConfig) -> Result<()> {
    store.save(config)
}

/// Validate and persist a single setting.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<()> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)
}
