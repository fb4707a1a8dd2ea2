//! # cafe-core: Pure Billing Logic for the Café
//!
//! This crate is the **heart** of the café billing tool. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Billing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cafe-cli (Console)                           │   │
//! │  │    Name prompt ──► Item/Qty loop ──► Receipt ──► Bills/ file    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   menu    │  │  billing  │  │  receipt  │  │   │
//! │  │   │   Money   │  │   Menu    │  │ BillTotals│  │  Receipt  │  │   │
//! │  │   │Percentage │  │   Order   │  │  Policy   │  │  render   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cafe-store (File Layer)                      │   │
//! │  │              bill_counter.txt, Bills/Bill_*.txt                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in paise and percentages in basis points
//! - [`menu`] - The fixed price list
//! - [`order`] - Item → quantity accumulation
//! - [`billing`] - Discount and GST calculation
//! - [`receipt`] - Fixed-width receipt text and file name
//! - [`validation`] - Parsing of console input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::{BillTotals, BillingPolicy, Menu, Order};
//!
//! let menu = Menu::builtin();
//! let mut order = Order::new();
//! order.add("pizza", 5).unwrap();
//!
//! let totals = BillTotals::compute(&order, &menu, &BillingPolicy::default()).unwrap();
//! assert_eq!(totals.discount.paise(), 6_000);
//! assert_eq!(totals.grand_total.paise(), 56_700);
//! ```

pub mod billing;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod receipt;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::{BillLine, BillTotals, BillingPolicy};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Menu, MenuItem};
pub use money::{Money, Percentage};
pub use order::{Order, OrderLine};
pub use receipt::Receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name printed at the top of every receipt unless configured otherwise.
pub const DEFAULT_CAFE_NAME: &str = "Chill & Fill Café";

/// Subtotal (in rupees) from which the discount applies.
pub const DISCOUNT_THRESHOLD_RUPEES: i64 = 500;

/// Discount granted once the threshold is met.
pub const DISCOUNT_PERCENT: u32 = 10;

/// Goods and Services Tax applied to the discounted subtotal.
pub const GST_PERCENT: u32 = 5;

/// Keyword that ends item entry.
pub const DONE_KEYWORD: &str = "done";

/// Placeholder used when the customer gives no name.
pub const DEFAULT_CUSTOMER_NAME: &str = "Guest";

/// Maximum quantity of a single item in an order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;
