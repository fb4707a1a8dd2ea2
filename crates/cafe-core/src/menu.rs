//! # Menu
//!
//! The fixed price list the café sells from.
//!
//! A menu is defined once at startup and never changes afterwards. Keys are
//! stored trimmed and lower-cased so lookups are case-insensitive, while the
//! listing order is kept for display.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::ValidationResult;

/// One entry of the price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Lookup key (lower-case).
    pub name: String,

    /// Unit price.
    #[serde(rename = "price_paise")]
    pub price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            name: normalize_key(&name.into()),
            price,
        }
    }

    /// Name as printed on the menu and on receipts (`pop corn` → `Pop Corn`).
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }
}

/// An immutable, ordered, case-insensitive price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Builds a menu, rejecting entries that could never be billed correctly.
    ///
    /// ## Rules
    /// - At least one item
    /// - No empty names
    /// - No negative prices
    /// - No duplicate names (compared case-insensitively)
    pub fn new(items: Vec<MenuItem>) -> ValidationResult<Self> {
        if items.is_empty() {
            return Err(ValidationError::Required {
                field: "menu".to_string(),
            });
        }

        let mut normalized: Vec<MenuItem> = Vec::with_capacity(items.len());
        for item in items {
            let item = MenuItem::new(item.name, item.price);

            if item.name.is_empty() {
                return Err(ValidationError::Required {
                    field: "item name".to_string(),
                });
            }
            if item.price.is_negative() {
                return Err(ValidationError::OutOfRange {
                    field: format!("price of {}", item.name),
                    min: 0,
                    max: i64::MAX,
                });
            }
            if normalized.iter().any(|existing| existing.name == item.name) {
                return Err(ValidationError::Duplicate {
                    field: "menu item".to_string(),
                    value: item.name,
                });
            }

            normalized.push(item);
        }

        Ok(Menu { items: normalized })
    }

    /// The café's standard price list.
    pub fn builtin() -> Self {
        const BUILTIN: &[(&str, i64)] = &[
            ("pizza", 120),
            ("burger", 80),
            ("salad", 60),
            ("pop corn", 90),
            ("coffee", 40),
            ("tea", 20),
            ("fries", 50),
        ];

        Menu {
            items: BUILTIN
                .iter()
                .map(|(name, rupees)| MenuItem::new(*name, Money::from_rupees(*rupees)))
                .collect(),
        }
    }

    /// Finds an item by name, ignoring case and surrounding whitespace.
    pub fn lookup(&self, name: &str) -> Option<&MenuItem> {
        let key = normalize_key(name);
        self.items.iter().find(|item| item.name == key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Items in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu::builtin()
    }
}

/// Trims and lower-cases a name so it can be used as a lookup key.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Upper-cases the first letter of every word, lower-cases the rest.
///
/// A "word" starts after any non-alphabetic character, so `fish-n-chips`
/// becomes `Fish-N-Chips`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
