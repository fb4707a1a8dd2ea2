//! # Receipt
//!
//! The immutable, printable result of billing one order.
//!
//! ## Layout
//! ```text
//! ========== BILL RECEIPT ==========
//! Chill & Fill Café
//! Bill No: 7
//! Customer: Asha
//! Date/Time: 19-10-2026 14:05:09
//! ----------------------------------
//! Item           Qty  Price   Total
//! -----------------------------------
//! Pizza          2    120.00  ₹240.00
//! Coffee         1    40.00   ₹40.00
//! -----------------------------------
//! Subtotal:                  ₹280.00
//! Discount:                   ₹0.00
//! GST @ 5%:              ₹14.00
//! Grand Total:              ₹294.00
//! ==================================
//! Thank you for visiting! 😊
//! ```
//!
//! The receipt carries its own `issued_at` so the header and the file name
//! always agree on the timestamp.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::billing::{BillTotals, BillingPolicy};
use crate::validation::sanitize_file_component;

const HEADER_RULE: &str = "========== BILL RECEIPT ==========";
const FOOTER_RULE: &str = "==================================";
const THIN_RULE: &str = "----------------------------------";
const TABLE_RULE: &str = "-----------------------------------";
const THANK_YOU: &str = "Thank you for visiting! 😊";

/// Width of the "Discount @ 10%:" and "GST @ 5%:" labels, so their amounts
/// line up whatever the configured rates are.
const RATE_LABEL_WIDTH: usize = 23;

/// Header timestamp format (`19-10-2026 14:05:09`).
pub const DISPLAY_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// File name timestamp format (`20261019_140509`).
pub const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A billed order, ready to print and to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub cafe_name: String,
    pub bill_number: u64,
    pub customer_name: String,
    /// Local wall-clock time the bill was issued.
    pub issued_at: NaiveDateTime,
    pub policy: BillingPolicy,
    pub totals: BillTotals,
}

impl Receipt {
    pub fn new(
        cafe_name: impl Into<String>,
        bill_number: u64,
        customer_name: impl Into<String>,
        issued_at: NaiveDateTime,
        policy: BillingPolicy,
        totals: BillTotals,
    ) -> Self {
        Receipt {
            cafe_name: cafe_name.into(),
            bill_number,
            customer_name: customer_name.into(),
            issued_at,
            policy,
            totals,
        }
    }

    /// Renders the fixed-width receipt text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        let totals = &self.totals;

        writeln!(out, "{}", HEADER_RULE)?;
        writeln!(out, "{}", self.cafe_name)?;
        writeln!(out, "Bill No: {}", self.bill_number)?;
        writeln!(out, "Customer: {}", self.customer_name)?;
        writeln!(out, "Date/Time: {}", self.issued_at.format(DISPLAY_TIME_FORMAT))?;
        writeln!(out, "{}", THIN_RULE)?;
        writeln!(out, "{:<15}{:<5}{:<8}{}", "Item", "Qty", "Price", "Total")?;
        writeln!(out, "{}", TABLE_RULE)?;

        for line in &totals.lines {
            writeln!(
                out,
                "{:<15}{:<5}{:<8}{}",
                line.name,
                line.quantity,
                line.unit_price.to_plain_string(),
                line.line_total
            )?;
        }

        writeln!(out, "{}", TABLE_RULE)?;
        writeln!(out, "Subtotal:{:<18}{}", "", totals.subtotal)?;

        if totals.discount_applied() {
            let label = format!("Discount @ {}:", self.policy.discount_rate);
            writeln!(out, "{:<width$}-{}", label, totals.discount, width = RATE_LABEL_WIDTH)?;
        } else {
            writeln!(out, "Discount:{:<19}{}", "", totals.discount)?;
        }

        let label = format!("GST @ {}:", self.policy.gst_rate);
        writeln!(out, "{:<width$}{}", label, totals.gst, width = RATE_LABEL_WIDTH)?;
        writeln!(out, "Grand Total:{:<14}{}", "", totals.grand_total)?;
        writeln!(out, "{}", FOOTER_RULE)?;
        writeln!(out, "{}", THANK_YOU)?;

        Ok(())
    }

    /// `Bill_<number>_<customer>_<YYYYMMDD_HHMMSS>.txt`
    pub fn file_name(&self) -> String {
        format!(
            "Bill_{}_{}_{}.txt",
            self.bill_number,
            sanitize_file_component(&self.customer_name),
            self.issued_at.format(FILE_TIME_FORMAT)
        )
    }
}
