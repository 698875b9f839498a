//! Rate table loading and lookup.
//!
//! This module provides the [`RateBook`] type: a year-keyed lookup of
//! [`RateTable`] values, seeded from the built-in tables and optionally
//! extended from YAML rate files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, rate_table_2025, rate_table_2026};

/// Year-keyed lookup of statutory rate tables.
///
/// The book is read-only after construction and may be shared freely
/// across concurrent report requests.
///
/// # Directory Structure
///
/// When loading from disk, the directory holds one YAML file per year:
/// ```text
/// config/rates/
/// ├── 2025.yaml
/// └── 2026.yaml
/// ```
/// File names are not interpreted; each file's `effective_year` field
/// decides which year it registers. A file for an already-known year
/// replaces the built-in table.
///
/// # Example
///
/// ```
/// use daywage_engine::config::RateBook;
///
/// let book = RateBook::builtin();
/// let rates = book.get(2026).unwrap();
/// assert_eq!(rates.effective_year, 2026);
/// assert!(book.get(2019).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RateBook {
    tables: BTreeMap<i32, RateTable>,
}

impl RateBook {
    /// Creates a book holding only the built-in 2025 and 2026 tables.
    pub fn builtin() -> Self {
        let mut tables = BTreeMap::new();
        for table in [rate_table_2025(), rate_table_2026()] {
            tables.insert(table.effective_year, table);
        }
        Self { tables }
    }

    /// Loads rate files from a directory on top of the built-in tables.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rates directory (e.g. "./config/rates")
    ///
    /// # Returns
    ///
    /// Returns a `RateBook` on success, or an error if the directory is
    /// missing or any YAML file fails to parse.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use daywage_engine::config::RateBook;
    ///
    /// let book = RateBook::load("./config/rates")?;
    /// let rates = book.get(2026)?;
    /// # Ok::<(), daywage_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut book = Self::builtin();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

            let file_path = entry.path();
            if file_path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml(&file_path)?;
                book.insert(table);
            }
        }

        Ok(book)
    }

    /// Loads and parses a single rate table file.
    fn load_yaml(path: &Path) -> EngineResult<RateTable> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Registers a table, replacing any existing table for the same year.
    pub fn insert(&mut self, table: RateTable) {
        self.tables.insert(table.effective_year, table);
    }

    /// Returns the rate table for the given year.
    ///
    /// # Errors
    ///
    /// Returns `RateTableNotFound` when no table is registered for `year`.
    pub fn get(&self, year: i32) -> EngineResult<&RateTable> {
        self.tables
            .get(&year)
            .ok_or(EngineError::RateTableNotFound { year })
    }

    /// Returns the years with a registered table, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.tables.keys().copied().collect()
    }
}
