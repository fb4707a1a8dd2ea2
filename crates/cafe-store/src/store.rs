//! # Store
//!
//! Path configuration and repository access for the café's local files.
//!
//! ## Layout on Disk
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Data Directory (root)                              │
//! │                                                                         │
//! │  <root>/                                                                │
//! │  ├── bill_counter.txt      ← next bill number ("8")                     │
//! │  └── Bills/                ← created on first receipt                   │
//! │      ├── Bill_6_Guest_20261019_101500.txt                               │
//! │      └── Bill_7_Asha_20261019_140509.txt                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Relative `counter_file` / `bills_dir` values are resolved against the
//! root; absolute ones are used as-is.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::receipt::ReceiptStore;
use crate::repository::sequencer::FileBillSequencer;

/// Default counter file name.
pub const DEFAULT_COUNTER_FILE: &str = "bill_counter.txt";

/// Default receipt directory name.
pub const DEFAULT_BILLS_DIR: &str = "Bills";

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust
/// use cafe_store::StoreConfig;
///
/// let config = StoreConfig::new("/var/lib/cafe")
///     .counter_file("counter.txt")
///     .bills_dir("/srv/receipts");
///
/// assert_eq!(config.counter_path().to_str(), Some("/var/lib/cafe/counter.txt"));
/// assert_eq!(config.bills_path().to_str(), Some("/srv/receipts"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory everything else is resolved against.
    pub root: PathBuf,

    /// Counter file, relative to `root` unless absolute.
    /// Default: `bill_counter.txt`
    pub counter_file: PathBuf,

    /// Receipt directory, relative to `root` unless absolute.
    /// Default: `Bills`
    pub bills_dir: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration rooted at `root` with default file names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StoreConfig {
            root: root.into(),
            counter_file: PathBuf::from(DEFAULT_COUNTER_FILE),
            bills_dir: PathBuf::from(DEFAULT_BILLS_DIR),
        }
    }

    /// Sets the counter file.
    pub fn counter_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.counter_file = path.into();
        self
    }

    /// Sets the receipt directory.
    pub fn bills_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.bills_dir = path.into();
        self
    }

    /// Resolved counter file path.
    pub fn counter_path(&self) -> PathBuf {
        self.root.join(&self.counter_file)
    }

    /// Resolved receipt directory path.
    pub fn bills_path(&self) -> PathBuf {
        self.root.join(&self.bills_dir)
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle to the café's files, handing out repositories.
#[derive(Debug, Clone)]
pub struct Store {
    counter_path: PathBuf,
    bills_path: PathBuf,
}

impl Store {
    /// Opens the store.
    ///
    /// ## What This Does
    /// 1. Creates the root directory if it doesn't exist
    /// 2. Resolves the counter and receipt paths
    ///
    /// The counter file and the receipt directory themselves are created
    /// lazily, on first bill.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(root = %config.root.display(), "Opening café store");

        if !config.root.as_os_str().is_empty() {
            fs::create_dir_all(&config.root).map_err(|e| StoreError::io(&config.root, e))?;
        }

        let store = Store {
            counter_path: config.counter_path(),
            bills_path: config.bills_path(),
        };

        debug!(
            counter = %store.counter_path.display(),
            bills = %store.bills_path.display(),
            "Store paths resolved"
        );

        Ok(store)
    }

    pub fn counter_path(&self) -> &Path {
        &self.counter_path
    }

    pub fn bills_path(&self) -> &Path {
        &self.bills_path
    }

    /// Returns the bill number sequencer.
    pub fn sequencer(&self) -> FileBillSequencer {
        FileBillSequencer::new(self.counter_path.clone())
    }

    /// Returns the receipt archive.
    pub fn receipts(&self) -> ReceiptStore {
        ReceiptStore::new(self.bills_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = StoreConfig::new("/data");
        assert_eq!(config.counter_path(), PathBuf::from("/data/bill_counter.txt"));
        assert_eq!(config.bills_path(), PathBuf::from("/data/Bills"));
    }

    #[test]
    fn test_open_creates_root_only() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("cafe");

        let store = Store::open(StoreConfig::new(&root)).unwrap();

        assert!(root.is_dir());
        assert!(!store.counter_path().exists());
        assert!(!store.bills_path().exists());
    }

    #[test]
    fn test_open_fails_when_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("not-a-dir");
        fs::write(&root, "x").unwrap();

        let err = Store::open(StoreConfig::new(&root)).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
