// Rust guideline compliant 2026-10-18

//! Loading of backend records exported to disk.
//!
//! A record file holds either a single JSON array or JSON Lines (one object
//! per line, blank lines ignored). Every record is validated on load; a
//! malformed or invalid record fails the whole load instead of producing a
//! partial result.

use crate::models::Record;
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A file of backend records of one kind.
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    /// Creates a handle for the record file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns the record file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates every record in the file.
    ///
    /// A missing file loads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - A line or the array is not valid JSON for the record type
    /// - A record fails validation
    /// - Two records share an id
    pub fn load_all<T: Record>(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let records = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<T>>(&content).map_err(|e| {
                Error::InvalidRecord(format!("{}: {}", self.path.display(), e))
            })?
        } else {
            self.parse_lines(&content)?
        };

        {
            let mut seen = HashSet::new();
            for record in &records {
                record.validate()?;
                if !seen.insert(record.id()) {
                    return Err(Error::InvalidRecord(format!(
                        "{}: duplicate {} id {}",
                        self.path.display(),
                        T::KIND,
                        record.id()
                    )));
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            kind = T::KIND,
            count = records.len(),
            "Loaded records"
        );
        Ok(records)
    }

    /// Loads a single record by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no record has the id, or any error
    /// from [`RecordFile::load_all`].
    pub fn load_by_id<T: Record>(&self, id: &str) -> Result<T> {
        self.load_all::<T>()?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::NotFound(format!("{} {}", T::KIND, id)))
    }

    fn parse_lines<T: Record>(&self, content: &str) -> Result<Vec<T>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str::<T>(line).map_err(|e| {
                    Error::InvalidRecord(format!(
                        "{}:{}: {}",
                        self.path.display(),
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }
}
