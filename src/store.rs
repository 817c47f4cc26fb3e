use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use thiserror::Error;

use crate::config::Configuration;
use crate::error::FormatError;
use crate::session::Catalog;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read configuration store: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse configuration store: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("store contains no configurations")]
    Empty,
}

/// Loads and holds puzzle configurations from a line-oriented text source
/// or a JSON array. Shape and tile contents are still validated lazily when
/// an entry is applied to a board; the store only guards against empty
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationStore {
    configs: Vec<Configuration>,
}

impl ConfigurationStore {
    /// Reads one configuration per line, skipping blank lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StoreError> {
        let mut configs = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            configs.push(Configuration::new(line)?);
        }
        if configs.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(Self { configs })
    }

    /// Loads the line format from a file on disk.
    pub fn from_text_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let data = fs::read_to_string(path.as_ref())?;
        Self::from_reader(data.as_bytes())
    }

    /// Loads a JSON array of configuration strings from a file on disk.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let data = fs::read_to_string(path.as_ref())?;
        let configs: Vec<Configuration> = serde_json::from_str(&data)?;
        if configs.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(Self { configs })
    }
}

impl Catalog for ConfigurationStore {
    #[inline]
    fn configurations(&self) -> &[Configuration] {
        &self.configs
    }
}
