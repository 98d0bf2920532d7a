//! Storage configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where the flight file lives
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the flat flight file, created on first start if missing
    #[serde(default = "default_path")]
    pub path: String,
}

impl StorageConfig {
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::EmptyStoragePath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "database.txt".to_string()
}
