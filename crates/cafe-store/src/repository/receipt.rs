//! # Receipt Store
//!
//! Archives rendered receipts as UTF-8 text files, one per bill.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use cafe_core::Receipt;

/// Directory of `Bill_<n>_<customer>_<timestamp>.txt` files.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    dir: PathBuf,
}

impl ReceiptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReceiptStore { dir: dir.into() }
    }

    /// Writes `receipt` to its own file and returns the path.
    ///
    /// ## Behavior
    /// - Creates the directory on first use
    /// - Never overwrites: an existing file with the same name is
    ///   `StoreError::ReceiptExists`
    pub fn persist(&self, receipt: &Receipt) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let path = self.dir.join(receipt.file_name());
        debug!(bill_number = receipt.bill_number, path = %path.display(), "Writing receipt");

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => StoreError::ReceiptExists(path.clone()),
                _ => StoreError::io(&path, e),
            })?;

        file.write_all(receipt.render().as_bytes())
            .map_err(|e| StoreError::io(&path, e))?;

        info!(bill_number = receipt.bill_number, path = %path.display(), "Receipt saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{BillTotals, BillingPolicy, Menu, Order};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn receipt(bill_number: u64, customer: &str) -> Receipt {
        let mut order = Order::new();
        order.add("pizza", 2).unwrap();
        order.add("coffee", 1).unwrap();
        let policy = BillingPolicy::default();
        let totals = BillTotals::compute(&order, &Menu::builtin(), &policy).unwrap();
        let issued_at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Receipt::new("Chill & Fill Café", bill_number, customer, issued_at, policy, totals)
    }

    #[test]
    fn test_persist_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let store = ReceiptStore::new(dir.path().join("Bills"));
        let receipt = receipt(3, "Asha Rao");

        let path = store.persist(&receipt).unwrap();

        assert_eq!(
            path,
            dir.path().join("Bills").join("Bill_3_Asha_Rao_20261019_093000.txt")
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), receipt.render());
    }

    #[test]
    fn test_each_bill_gets_its_own_file() {
        let dir = TempDir::new().unwrap();
        let store = ReceiptStore::new(dir.path());

        store.persist(&receipt(1, "Guest")).unwrap();
        store.persist(&receipt(2, "Guest")).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_existing_receipt_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let store = ReceiptStore::new(dir.path());
        let path = store.persist(&receipt(1, "Guest")).unwrap();
        fs::write(&path, "original").unwrap();

        let err = store.persist(&receipt(1, "Guest")).unwrap_err();

        assert!(matches!(err, StoreError::ReceiptExists(p) if p == path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_unwritable_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("Bills");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ReceiptStore::new(&blocker).persist(&receipt(1, "Guest")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
