//! # Billing
//!
//! Turns an [`Order`] into subtotal, discount, GST and grand total.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Bill Calculation                                │
//! │                                                                         │
//! │  Order lines ──► unit price × qty ──► Σ = subtotal                      │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                        subtotal ≥ threshold ?                           │
//! │                          │ yes                 │ no                     │
//! │                          ▼                     ▼                        │
//! │              discount = round(sub × 10%)   discount = 0                 │
//! │                          │                     │                        │
//! │                          └──────────┬──────────┘                        │
//! │                                     ▼                                   │
//! │                     after_discount = subtotal − discount                │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                     gst = round(after_discount × 5%)                    │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                   grand_total = after_discount + gst                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All amounts are integer paise, so the final "round to 2 decimals" of the
//! grand total is exact by construction. Line totals and sums are checked:
//! a menu price too large to bill is `CoreError::AmountOverflow`, never a
//! wrapped amount.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::menu::Menu;
use crate::money::{Money, Percentage};
use crate::order::Order;
use crate::{DISCOUNT_PERCENT, DISCOUNT_THRESHOLD_RUPEES, GST_PERCENT};

/// Discount and tax rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPolicy {
    /// Subtotal from which (inclusive) the discount applies.
    pub discount_threshold: Money,

    /// Discount rate on the subtotal.
    pub discount_rate: Percentage,

    /// GST rate on the discounted subtotal.
    pub gst_rate: Percentage,
}

impl Default for BillingPolicy {
    /// ₹500 threshold, 10% discount, 5% GST.
    fn default() -> Self {
        BillingPolicy {
            discount_threshold: Money::from_rupees(DISCOUNT_THRESHOLD_RUPEES),
            discount_rate: Percentage::from_percent(DISCOUNT_PERCENT),
            gst_rate: Percentage::from_percent(GST_PERCENT),
        }
    }
}

impl BillingPolicy {
    /// Discount owed on `subtotal` (zero below the threshold).
    pub fn discount_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.discount_threshold {
            subtotal.percentage_of(self.discount_rate)
        } else {
            Money::zero()
        }
    }
}

/// A priced order line, frozen at billing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    /// Name as printed (`Pop Corn`).
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Totals of one bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTotals {
    pub lines: Vec<BillLine>,
    pub subtotal: Money,
    pub discount: Money,
    pub after_discount: Money,
    pub gst: Money,
    pub grand_total: Money,
}

impl BillTotals {
    /// Prices every line of `order` against `menu` and applies `policy`.
    ///
    /// ## Errors
    /// - `CoreError::EmptyOrder` if the order has no lines
    /// - `CoreError::ItemNotOnMenu` if a line names an unknown item; the
    ///   console only ever adds menu keys, so this is a programming error
    /// - `CoreError::AmountOverflow` if an amount leaves the `i64` range
    pub fn compute(order: &Order, menu: &Menu, policy: &BillingPolicy) -> CoreResult<Self> {
        if order.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let mut lines = Vec::with_capacity(order.len());
        let mut subtotal = Money::zero();

        for line in order.lines() {
            let item = menu
                .lookup(&line.item)
                .ok_or_else(|| CoreError::ItemNotOnMenu(line.item.clone()))?;

            let line_total = item
                .price
                .checked_multiply_quantity(line.quantity)
                .ok_or(CoreError::AmountOverflow)?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or(CoreError::AmountOverflow)?;

            lines.push(BillLine {
                name: item.display_name(),
                quantity: line.quantity,
                unit_price: item.price,
                line_total,
            });
        }

        let discount = policy.discount_for(subtotal);
        let after_discount = subtotal - discount;
        let gst = after_discount.percentage_of(policy.gst_rate);
        let grand_total = after_discount
            .checked_add(gst)
            .ok_or(CoreError::AmountOverflow)?;

        Ok(BillTotals {
            lines,
            subtotal,
            discount,
            after_discount,
            gst,
            grand_total,
        })
    }

    /// Whether the subtotal qualified for the discount.
    pub fn discount_applied(&self) -> bool {
        !self.discount.is_zero()
    }
}
