//! # Session
//!
//! One customer, one order, at most one receipt.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  welcome ──► customer name ──► menu                                     │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │              ┌──► request_item ──┬── done / EOF ──────────┐            │
//! │              │         │ item    │                        │            │
//! │              │         ▼         │                        ▼            │
//! │              │  request_quantity │             order empty?             │
//! │              │         │         │              │ yes       │ no        │
//! │              └── order.add ◄─────┘              ▼           ▼           │
//! │                                          "No items"   compute_and_render│
//! │                                          (no number,        │           │
//! │                                           no file)          ▼           │
//! │                                                       print + persist   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use cafe_core::{CoreError, Menu, Order, Receipt};

use crate::billing::BillingCalculator;
use crate::console::{Console, OrderInput};
use crate::error::AppResult;

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// Nothing was ordered; no bill number used, no file written.
    NoItems,
    /// A receipt was issued and saved.
    Billed { receipt: Receipt, path: PathBuf },
}

/// Builds an order from `input` until the customer is done.
///
/// Repeated items are merged. A quantity that would push a line past the
/// per-item maximum is reported and skipped; the rest of the order stands.
pub fn collect_order<I: OrderInput>(input: &mut I, menu: &Menu) -> AppResult<Order> {
    let mut order = Order::new();

    while let Some(item) = input.request_item(menu)? {
        let Some(qty) = input.request_quantity()? else {
            debug!(item = %item, "Input ended before a quantity was given");
            break;
        };

        match order.add(&item, qty) {
            Ok(()) => input.item_added(&item, qty)?,
            Err(e @ CoreError::QuantityTooLarge { .. }) => input.entry_rejected(&e.to_string())?,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(order)
}

/// Runs one complete ordering session on `console`.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    calculator: &mut BillingCalculator,
) -> AppResult<SessionOutcome> {
    console.welcome(calculator.cafe_name())?;
    let customer = console.request_customer_name()?;
    console.display_menu(calculator.cafe_name(), calculator.menu())?;

    let order = collect_order(console, calculator.menu())?;

    if order.is_empty() {
        info!(customer = %customer, "Session ended without items");
        console.say("")?;
        console.say("No items ordered. Thank you!")?;
        return Ok(SessionOutcome::NoItems);
    }

    let receipt = calculator.compute_and_render(&order, &customer)?;
    console.show_receipt(&receipt.render())?;

    let path = calculator.persist(&receipt)?;
    console.say("")?;
    console.say(&format!("📄 Bill saved successfully as: {}", path.display()))?;

    Ok(SessionOutcome::Billed { receipt, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{BillingPolicy, Money, MAX_ITEM_QUANTITY};
    use cafe_store::{Store, StoreConfig};
    use chrono::NaiveDate;
    use std::collections::VecDeque;
    use std::fs;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    /// Scripted answers to the two order prompts.
    #[derive(Default)]
    struct Script {
        items: VecDeque<Option<&'static str>>,
        quantities: VecDeque<Option<u32>>,
        added: Vec<(String, u32)>,
        rejected: Vec<String>,
    }

    impl OrderInput for Script {
        fn request_item(&mut self, _menu: &Menu) -> io::Result<Option<String>> {
            Ok(self.items.pop_front().flatten().map(str::to_string))
        }

        fn request_quantity(&mut self) -> io::Result<Option<u32>> {
            Ok(self.quantities.pop_front().flatten())
        }

        fn item_added(&mut self, item: &str, quantity: u32) -> io::Result<()> {
            self.added.push((item.to_string(), quantity));
            Ok(())
        }

        fn entry_rejected(&mut self, reason: &str) -> io::Result<()> {
            self.rejected.push(reason.to_string());
            Ok(())
        }
    }

    fn script(items: &[Option<&'static str>], quantities: &[Option<u32>]) -> Script {
        Script {
            items: items.iter().copied().collect(),
            quantities: quantities.iter().copied().collect(),
            ..Script::default()
        }
    }

    #[test]
    fn test_collect_order_merges_repeats() {
        let mut input = script(
            &[Some("coffee"), Some("coffee"), None],
            &[Some(2), Some(3)],
        );

        let order = collect_order(&mut input, &Menu::builtin()).unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(order.quantity_of("coffee"), 5);
        assert_eq!(
            input.added,
            vec![("coffee".to_string(), 2), ("coffee".to_string(), 3)]
        );
    }

    #[test]
    fn test_collect_order_done_immediately() {
        let mut input = script(&[None], &[]);
        assert!(collect_order(&mut input, &Menu::builtin()).unwrap().is_empty());
    }

    #[test]
    fn test_collect_order_skips_oversized_line() {
        let mut input = script(
            &[Some("tea"), Some("tea"), Some("fries"), None],
            &[Some(MAX_ITEM_QUANTITY), Some(1), Some(2)],
        );

        let order = collect_order(&mut input, &Menu::builtin()).unwrap();

        assert_eq!(order.quantity_of("tea"), MAX_ITEM_QUANTITY);
        assert_eq!(order.quantity_of("fries"), 2);
        assert_eq!(input.rejected.len(), 1);
        assert!(input.rejected[0].contains("exceeds maximum"));
    }

    #[test]
    fn test_collect_order_stops_when_quantity_input_ends() {
        let mut input = script(&[Some("pizza"), Some("tea")], &[Some(1), None]);

        let order = collect_order(&mut input, &Menu::builtin()).unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(order.quantity_of("tea"), 0);
    }

    // -------------------------------------------------------------------------
    // Full sessions over an in-memory console and a temporary data directory
    // -------------------------------------------------------------------------

    fn calculator_for(store: &Store) -> BillingCalculator {
        BillingCalculator::new(
            "Chill & Fill Café",
            Menu::builtin(),
            BillingPolicy::default(),
            Box::new(store.sequencer()),
            store.receipts(),
        )
        .with_clock(|| {
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        })
    }

    fn run(store: &Store, input: &str) -> (SessionOutcome, String) {
        let mut calc = calculator_for(store);
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let outcome = run_session(&mut console, &mut calc).unwrap();
        let transcript = String::from_utf8(console.into_output()).unwrap();
        (outcome, transcript)
    }

    #[test]
    fn test_session_bills_and_saves() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path())).unwrap();

        let (outcome, transcript) = run(&store, "Asha\npizza\n2\nwaffle\ncoffee\n1\ndone\n");

        let SessionOutcome::Billed { receipt, path } = outcome else {
            panic!("expected a bill");
        };
        assert_eq!(receipt.bill_number, 1);
        assert_eq!(receipt.totals.grand_total, Money::from_rupees(294));
        assert_eq!(
            path,
            store.bills_path().join("Bill_1_Asha_20261019_120000.txt")
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), receipt.render());

        assert!(transcript.starts_with("Welcome to Chill & Fill Café! ☕🍕🍔\n"));
        assert!(transcript.contains("✔ Added 2 x Pizza\n"));
        assert!(transcript.contains("❌ Item not in menu. Try again.\n"));
        assert!(transcript.contains(&receipt.render()));
        assert!(transcript.contains("📄 Bill saved successfully as: "));
    }

    #[test]
    fn test_empty_session_uses_no_number_and_writes_no_file() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path())).unwrap();

        let (outcome, transcript) = run(&store, "Asha\ndone\n");

        assert!(matches!(outcome, SessionOutcome::NoItems));
        assert!(transcript.ends_with("\nNo items ordered. Thank you!\n"));
        assert!(!store.counter_path().exists());
        assert!(!store.bills_path().exists());

        // The next real bill is still number 1
        let (outcome, _) = run(&store, "\ntea\n1\ndone\n");
        let SessionOutcome::Billed { receipt, .. } = outcome else {
            panic!("expected a bill");
        };
        assert_eq!(receipt.bill_number, 1);
        assert_eq!(receipt.customer_name, "Guest");
    }

    #[test]
    fn test_consecutive_sessions_number_bills_sequentially() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path())).unwrap();

        let numbers: Vec<u64> = ["Asha", "Ravi", "Meera"]
            .iter()
            .map(|name| {
                match run(&store, &format!("{}\nsalad\n1\ndone\n", name)).0 {
                    SessionOutcome::Billed { receipt, .. } => receipt.bill_number,
                    SessionOutcome::NoItems => panic!("expected a bill"),
                }
            })
            .collect();

        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(fs::read_dir(store.bills_path()).unwrap().count(), 3);
    }

    #[test]
    fn test_end_of_input_bills_what_was_ordered() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path())).unwrap();

        let (outcome, _) = run(&store, "Asha\npizza\n5\n");

        let SessionOutcome::Billed { receipt, .. } = outcome else {
            panic!("expected a bill");
        };
        assert_eq!(receipt.totals.discount, Money::from_rupees(60));
        assert_eq!(receipt.totals.grand_total, Money::from_rupees(567));
    }
}
