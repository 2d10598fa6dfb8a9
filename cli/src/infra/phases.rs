//! Status infrastructure — implements `PhaseSource` from a local file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::PhaseSource;
use crate::domain::status::parse_phases;

/// Reads component phases from a file with one phase per line.
pub struct FilePhaseSource {
    path: PathBuf,
}

impl FilePhaseSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PhaseSource for FilePhaseSource {
    fn phases(&self) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        Ok(parse_phases(&text))
    }
}
