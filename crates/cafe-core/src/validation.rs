//! # Validation Module
//!
//! Parsing of raw console input into values the billing core accepts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (cafe-cli)                                            │
//! │  ├── Reads a line, calls THIS MODULE                                    │
//! │  └── Reports the problem and prompts again                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Order / BillTotals (cafe-core)                                │
//! │  └── Rejects anything that slipped through as a precondition error      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::validation::{parse_item_entry, parse_quantity, ItemEntry};
//! use cafe_core::Menu;
//!
//! let menu = Menu::builtin();
//! assert_eq!(parse_item_entry(" Pizza ", &menu), ItemEntry::Item("pizza".to_string()));
//! assert_eq!(parse_item_entry("DONE", &menu), ItemEntry::Done);
//! assert_eq!(parse_quantity("3"), Ok(3));
//! ```

use crate::error::ValidationError;
use crate::menu::{normalize_key, Menu};
use crate::{DEFAULT_CUSTOMER_NAME, DONE_KEYWORD, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Name used in receipt file names when nothing usable is left after
/// sanitizing.
pub const FALLBACK_FILE_NAME: &str = "Customer";

/// Outcome of one item prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEntry {
    /// A menu key (normalized).
    Item(String),
    /// The customer is finished ordering.
    Done,
    /// Input that is neither a menu item nor the termination keyword.
    Unknown(String),
}

/// Classifies one line typed at the item prompt.
pub fn parse_item_entry(input: &str, menu: &Menu) -> ItemEntry {
    let key = normalize_key(input);

    if key == DONE_KEYWORD {
        return ItemEntry::Done;
    }

    match menu.lookup(&key) {
        Some(item) => ItemEntry::Item(item.name.clone()),
        None => ItemEntry::Unknown(input.trim().to_string()),
    }
}

/// Parses a quantity.
///
/// ## Rules
/// - Digits only (no sign, no decimal point)
/// - Greater than zero
/// - At most [`MAX_ITEM_QUANTITY`]
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    // All digits, so the only parse failure left is overflow
    let qty: u64 = input.parse().map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: MAX_ITEM_QUANTITY as i64,
    })?;

    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY as u64 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(qty as u32)
}

/// Trims the customer name; an empty name becomes "Guest".
pub fn normalize_customer_name(input: &str) -> String {
    let name = input.trim();
    if name.is_empty() {
        DEFAULT_CUSTOMER_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Makes a customer name safe to embed in a file name.
///
/// Whitespace and characters that are not portable in file names become
/// `_`. An empty result falls back to [`FALLBACK_FILE_NAME`].
pub fn sanitize_file_component(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            c if c.is_whitespace() || c.is_control() => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitized
    }
}
