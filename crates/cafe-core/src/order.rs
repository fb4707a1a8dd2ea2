//! # Order
//!
//! Accumulates item → quantity for one billing session.
//!
//! ## Invariants
//! - Lines are unique by item name (adding the same item increases quantity)
//! - Lines keep the order in which items were first added
//! - Quantity is always between 1 and [`MAX_ITEM_QUANTITY`]

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::menu::normalize_key;
use crate::MAX_ITEM_QUANTITY;

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu key (lower-case).
    pub item: String,
    pub quantity: u32,
}

/// Items ordered so far, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Order { lines: Vec::new() }
    }

    /// Adds `quantity` of `item`, or increases the quantity if already present.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CoreError::Validation)` if `quantity` is zero
    /// - `Err(CoreError::QuantityTooLarge)` if the line would exceed the maximum
    pub fn add(&mut self, item: &str, quantity: u32) -> CoreResult<()> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let key = normalize_key(item);

        if let Some(line) = self.lines.iter_mut().find(|l| l.item == key) {
            let new_qty = line.quantity as u64 + quantity as u64;
            if new_qty > MAX_ITEM_QUANTITY as u64 {
                return Err(CoreError::QuantityTooLarge {
                    item: key,
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty as u32;
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                item: key,
                requested: quantity as u64,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.lines.push(OrderLine {
            item: key,
            quantity,
        });
        Ok(())
    }

    /// Current quantity of `item` (0 if not ordered).
    pub fn quantity_of(&self, item: &str) -> u32 {
        let key = normalize_key(item);
        self.lines
            .iter()
            .find(|l| l.item == key)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
