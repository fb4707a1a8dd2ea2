//! # Bill Sequencer
//!
//! Hands out bill numbers from a plain-text counter file.
//!
//! ## Counter Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  next_bill_number()                                     │
//! │                                                                         │
//! │  bill_counter.txt                                                       │
//! │       │                                                                 │
//! │       ├── missing ───────────────► N = 1                                │
//! │       ├── "  42\n" ──────────────► N = 42                               │
//! │       └── "abc", "-3", "" ───────► N = 1   (reset, logged at info)      │
//! │                                                                         │
//! │  write N + 1 (overwrite) ──► return N                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A reset is an expected recovery, not a fault, so it is logged at `info`
//! and stays out of the cashier's console under the default `warn` filter.
//!
//! ## Limitations
//! Read and write are two separate file operations with no lock. Two
//! processes billing at the same moment can receive the same number, and a
//! crash between the read and the write can reuse or skip a number. The tool
//! is single-user and single-process, so neither is guarded against.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// First bill number of a fresh (or reset) counter.
pub const FIRST_BILL_NUMBER: u64 = 1;

/// Source of unique, increasing bill numbers.
///
/// `BillingCalculator` depends on this trait rather than on the file
/// sequencer so tests can hand out numbers from memory.
pub trait BillNumberSource {
    /// Issues the next bill number.
    fn next_bill_number(&mut self) -> StoreResult<u64>;
}

/// Counter persisted as a single decimal integer in a text file.
///
/// ## Usage
/// ```rust,no_run
/// use cafe_store::{BillNumberSource, FileBillSequencer};
///
/// let mut sequencer = FileBillSequencer::new("bill_counter.txt");
/// let first = sequencer.next_bill_number().unwrap();
/// let second = sequencer.next_bill_number().unwrap();
/// assert_eq!(second, first + 1);
/// ```
#[derive(Debug, Clone)]
pub struct FileBillSequencer {
    path: PathBuf,
}

impl FileBillSequencer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBillSequencer { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The number the next call to `next_bill_number` would return.
    ///
    /// Reads only; the counter file is not created or modified.
    pub fn peek(&self) -> StoreResult<u64> {
        Ok(self.read_counter()?.unwrap_or(FIRST_BILL_NUMBER))
    }

    /// Reads the stored value.
    ///
    /// ## Returns
    /// - `Ok(Some(n))` for a valid non-negative integer with room to increment
    /// - `Ok(None)` if the file is missing or its content is unusable
    /// - `Err` if the file exists but cannot be read
    fn read_counter(&self) -> StoreResult<Option<u64>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No counter file, starting at 1");
                return Ok(None);
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                info!(path = %self.path.display(), "Counter file is not UTF-8, resetting to 1");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        match parse_counter(&content) {
            Some(n) => Ok(Some(n)),
            None => {
                info!(
                    path = %self.path.display(),
                    content = %content.trim(),
                    "Counter file is corrupt, resetting to 1"
                );
                Ok(None)
            }
        }
    }

    fn write_counter(&self, next: u64) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        fs::write(&self.path, next.to_string()).map_err(|e| StoreError::io(&self.path, e))
    }
}

impl BillNumberSource for FileBillSequencer {
    /// Reads N (1 if missing or corrupt), persists N + 1, returns N.
    fn next_bill_number(&mut self) -> StoreResult<u64> {
        let current = self.read_counter()?.unwrap_or(FIRST_BILL_NUMBER);
        self.write_counter(current + 1)?;

        debug!(bill_number = current, path = %self.path.display(), "Bill number issued");
        Ok(current)
    }
}

/// Parses counter content: ASCII digits only, surrounding whitespace allowed.
///
/// `u64::MAX` is rejected as well, since it cannot be incremented.
fn parse_counter(content: &str) -> Option<u64> {
    let trimmed = content.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    trimmed.parse::<u64>().ok().filter(|n| *n < u64::MAX)
}
