//! File-based Flight Storage Adapter
//!
//! Keeps the whole flight collection in a single flat text file and
//! rewrites it in full on every save.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

use super::flat_file_codec::{decode, default_flights, encode};
use crate::domain::flight::Flight;
use crate::ports::{FlightStorage, FlightStorageError};

/// File-based storage for the flight collection
#[derive(Debug, Clone)]
pub struct FileFlightStorage {
    path: PathBuf,
}

impl FileFlightStorage {
    /// Create a storage backed by the file at `path`
    ///
    /// The file does not need to exist yet; the first read creates it.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileFlightStorage::new("database.txt");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    async fn ensure_parent_dir(&self) -> Result<(), FlightStorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| FlightStorageError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }

    /// Write the default flights and hand them back, logging (not
    /// returning) a failed write.
    async fn rebuild_with_defaults(&self) -> Vec<Flight> {
        let defaults = default_flights();
        if let Err(e) = self.write(&defaults).await {
            error!(path = %self.path.display(), "Could not write default flights: {}", e);
        }
        defaults
    }
}

#[async_trait]
impl FlightStorage for FileFlightStorage {
    async fn read(&self) -> Vec<Flight> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "Flight file not found, creating default flights");
            return self.rebuild_with_defaults().await;
        }

        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    "Error reading flight file, using defaults: {}", e
                );
                return default_flights();
            }
        };

        let flights = decode(&contents);
        if flights.is_empty() {
            warn!(
                path = %self.path.display(),
                "Flight file empty or invalid, rebuilding with defaults"
            );
            return self.rebuild_with_defaults().await;
        }

        info!(path = %self.path.display(), flights = flights.len(), "Loaded flights");
        flights
    }

    async fn write(&self, flights: &[Flight]) -> Result<(), FlightStorageError> {
        self.ensure_parent_dir().await?;

        fs::write(&self.path, encode(flights))
            .await
            .map_err(|e| FlightStorageError::IoError(e.to_string()))?;

        info!(path = %self.path.display(), flights = flights.len(), "Saved flights");
        Ok(())
    }
}
