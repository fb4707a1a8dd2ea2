//! # Billing Calculator
//!
//! Turns a finished order into a numbered receipt and archives it.
//!
//! ## Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_and_render(order, customer)                                    │
//! │       │                                                                 │
//! │       ├── 1. BillTotals::compute      ← fails before a number is taken  │
//! │       ├── 2. sequencer.next_bill_number()   (exactly once)              │
//! │       ├── 3. clock()                  ← one timestamp for header + file │
//! │       └── 4. Receipt::new                                               │
//! │                                                                         │
//! │  persist(receipt) ──► Bills/Bill_<n>_<customer>_<timestamp>.txt         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tracing::info;

use cafe_core::validation::normalize_customer_name;
use cafe_core::{BillTotals, BillingPolicy, Menu, Order, Receipt};
use cafe_store::{BillNumberSource, ReceiptStore};

use crate::error::AppResult;

type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// Billing for one café: menu, rules, bill numbers and receipt archive.
pub struct BillingCalculator {
    cafe_name: String,
    menu: Menu,
    policy: BillingPolicy,
    sequencer: Box<dyn BillNumberSource>,
    receipts: ReceiptStore,
    clock: Clock,
}

impl BillingCalculator {
    /// Creates a calculator reading the local wall clock.
    pub fn new(
        cafe_name: impl Into<String>,
        menu: Menu,
        policy: BillingPolicy,
        sequencer: Box<dyn BillNumberSource>,
        receipts: ReceiptStore,
    ) -> Self {
        BillingCalculator {
            cafe_name: cafe_name.into(),
            menu,
            policy,
            sequencer,
            receipts,
            clock: Box::new(|| Local::now().naive_local()),
        }
    }

    /// Replaces the clock (fixed timestamps in tests).
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn cafe_name(&self) -> &str {
        &self.cafe_name
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Prices `order`, takes the next bill number and builds the receipt.
    ///
    /// ## Errors
    /// - `CoreError::EmptyOrder` / `CoreError::ItemNotOnMenu`, with no bill
    ///   number consumed
    /// - `StoreError` if the counter file cannot be read or written
    pub fn compute_and_render(&mut self, order: &Order, customer_name: &str) -> AppResult<Receipt> {
        let totals = BillTotals::compute(order, &self.menu, &self.policy)?;
        let bill_number = self.sequencer.next_bill_number()?;
        let issued_at = (self.clock)();

        info!(
            bill_number,
            items = totals.lines.len(),
            grand_total = %totals.grand_total,
            "Bill computed"
        );

        Ok(Receipt::new(
            self.cafe_name.clone(),
            bill_number,
            normalize_customer_name(customer_name),
            issued_at,
            self.policy,
            totals,
        ))
    }

    /// Archives the receipt text and returns the file path.
    pub fn persist(&self, receipt: &Receipt) -> AppResult<PathBuf> {
        Ok(self.receipts.persist(receipt)?)
    }
}
