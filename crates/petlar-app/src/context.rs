// Rust guideline compliant 2026-10-18

//! Application context created once at startup.
//!
//! The context owns the resolved data paths, the loaded configuration and
//! the active status filter. It is passed by reference to whatever needs
//! them and lives for the rest of the process.

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use petlar_core::{Config, FilterStatus, RecordFile};
use std::path::{Path, PathBuf};

/// Default data directory name, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".petlar";

/// Paths, configuration and UI state for a PetLar session.
#[derive(Debug, Clone)]
pub struct AppContext {
    data_dir: PathBuf,
    reservations_path: PathBuf,
    pets_path: PathBuf,
    hosts_path: PathBuf,
    config: Config,
    filter: FilterStatus,
}

impl AppContext {
    /// Resolves the data directory and loads its configuration.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Explicit data directory; defaults to `./.petlar`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The working directory cannot be resolved
    /// - The data directory is missing
    /// - The configuration cannot be loaded
    pub fn discover(data_dir: Option<&Path>) -> Result<Self> {
        let (data_dir, config) = Self::resolve(data_dir)?;
        Ok(Self::with_config(data_dir, config))
    }

    /// Resolves the data directory and loads its configuration without
    /// building the context.
    ///
    /// Emits no log events, so callers can read settings such as the log
    /// level from the returned config before installing a subscriber.
    ///
    /// # Errors
    ///
    /// Same as [`AppContext::discover`].
    pub fn resolve(data_dir: Option<&Path>) -> Result<(PathBuf, Config)> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?.join(DEFAULT_DATA_DIR),
        };
        if !data_dir.is_dir() {
            return Err(AppError::DataDirMissing { path: data_dir });
        }

        let config = Config::load(&data_dir)?;
        Ok((data_dir, config))
    }

    /// Builds a context from an already loaded configuration.
    #[must_use]
    pub fn with_config(data_dir: PathBuf, config: Config) -> Self {
        tracing::debug!(data_dir = %data_dir.display(), "Initialized application context");
        Self {
            reservations_path: data_dir.join("reservations.json"),
            pets_path: data_dir.join("pets.json"),
            hosts_path: data_dir.join("hosts.json"),
            filter: config.default_filter,
            config,
            data_dir,
        }
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    /// Returns the reservations record file path.
    #[must_use]
    pub fn reservations_path(&self) -> &Path {
        self.reservations_path.as_path()
    }

    /// Returns the pets record file path.
    #[must_use]
    pub fn pets_path(&self) -> &Path {
        self.pets_path.as_path()
    }

    /// Returns the hosts record file path.
    #[must_use]
    pub fn hosts_path(&self) -> &Path {
        self.hosts_path.as_path()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the active status filter.
    #[must_use]
    pub fn filter(&self) -> FilterStatus {
        self.filter
    }

    /// Replaces the active status filter.
    pub fn set_filter(&mut self, filter: FilterStatus) {
        self.filter = filter;
    }

    /// Loads every record file into a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if any record file cannot be read or validated.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let reservations = RecordFile::new(self.reservations_path.clone())?.load_all()?;
        let pets = RecordFile::new(self.pets_path.clone())?.load_all()?;
        let hosts = RecordFile::new(self.hosts_path.clone())?.load_all()?;
        Ok(Catalog::new(reservations, pets, hosts))
    }
}
