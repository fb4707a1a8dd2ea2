//! # Console
//!
//! Prompts and messages of the interactive session.
//!
//! ## Prompt Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter item (or 'done' to finish): waffle                               │
//! │  ❌ Item not in menu. Try again.                                        │
//! │  Enter item (or 'done' to finish): Pizza                                │
//! │  Enter quantity: two                                                    │
//! │  ❌ Invalid quantity. Try again.                                        │
//! │  Enter quantity: 2                                                      │
//! │  ✔ Added 2 x Pizza                                                      │
//! │  Enter item (or 'done' to finish): done                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input behaves like `done` at the item prompt and abandons the
//! pending item at the quantity prompt.

use std::io::{self, BufRead, Write};
use tracing::debug;

use cafe_core::menu::title_case;
use cafe_core::validation::{normalize_customer_name, parse_item_entry, parse_quantity, ItemEntry};
use cafe_core::Menu;

/// The two requests the order loop makes of its user, plus feedback.
///
/// [`Console`] answers them from a terminal; tests answer them from a script.
pub trait OrderInput {
    /// A menu key, or `None` once the customer is done.
    fn request_item(&mut self, menu: &Menu) -> io::Result<Option<String>>;

    /// A quantity between 1 and the per-item maximum, or `None` if input ended.
    fn request_quantity(&mut self) -> io::Result<Option<u32>>;

    /// Confirms an accepted line.
    fn item_added(&mut self, item: &str, quantity: u32) -> io::Result<()>;

    /// Explains why an otherwise valid entry was not added.
    fn entry_rejected(&mut self, reason: &str) -> io::Result<()>;
}

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives back the writer (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    pub fn welcome(&mut self, cafe_name: &str) -> io::Result<()> {
        self.say(&format!("Welcome to {}! ☕🍕🍔", cafe_name))
    }

    /// Asks for the customer's name; blank or missing input gives "Guest".
    pub fn request_customer_name(&mut self) -> io::Result<String> {
        let answer = self.prompt("Enter customer name: ")?;
        Ok(normalize_customer_name(answer.as_deref().unwrap_or("")))
    }

    /// Prints the price list.
    pub fn display_menu(&mut self, cafe_name: &str, menu: &Menu) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "------ {} MENU ------", cafe_name)?;
        for item in menu.iter() {
            writeln!(self.output, "{:<12} : {}", title_case(&item.name), item.price)?;
        }
        writeln!(self.output, "{}", "-".repeat(30))?;
        self.output.flush()
    }

    /// Prints a rendered receipt, preceded by a blank line.
    pub fn show_receipt(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Prints `label` and reads one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript on separate lines when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> OrderInput for Console<R, W> {
    fn request_item(&mut self, menu: &Menu) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt("Enter item (or 'done' to finish): ")? else {
                return Ok(None);
            };

            match parse_item_entry(&line, menu) {
                ItemEntry::Item(name) => return Ok(Some(name)),
                ItemEntry::Done => return Ok(None),
                ItemEntry::Unknown(raw) => {
                    debug!(input = %raw, "Rejected item");
                    self.say("❌ Item not in menu. Try again.")?;
                }
            }
        }
    }

    fn request_quantity(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt("Enter quantity: ")? else {
                return Ok(None);
            };

            match parse_quantity(&line) {
                Ok(qty) => return Ok(Some(qty)),
                Err(e) => {
                    debug!(input = %line.trim(), reason = %e, "Rejected quantity");
                    self.say("❌ Invalid quantity. Try again.")?;
                }
            }
        }
    }

    fn item_added(&mut self, item: &str, quantity: u32) -> io::Result<()> {
        self.say(&format!("✔ Added {} x {}", quantity, title_case(item)))
    }

    fn entry_rejected(&mut self, reason: &str) -> io::Result<()> {
        self.say(&format!("❌ {}", reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_request_item_reprompts_until_menu_item() {
        let mut c = console("waffle\n\nPIZZA\n");
        assert_eq!(c.request_item(&Menu::builtin()).unwrap(), Some("pizza".to_string()));

        let out = transcript(c);
        assert_eq!(out.matches("Enter item (or 'done' to finish): ").count(), 3);
        assert_eq!(out.matches("❌ Item not in menu. Try again.").count(), 2);
    }

    #[test]
    fn test_request_item_done_and_eof() {
        let mut c = console("Done\n");
        assert_eq!(c.request_item(&Menu::builtin()).unwrap(), None);

        let mut c = console("");
        assert_eq!(c.request_item(&Menu::builtin()).unwrap(), None);
    }

    #[test]
    fn test_request_quantity_reprompts_until_valid() {
        let mut c = console("two\n0\n-1\n3\n");
        assert_eq!(c.request_quantity().unwrap(), Some(3));

        let out = transcript(c);
        assert_eq!(out.matches("❌ Invalid quantity. Try again.").count(), 3);
    }

    #[test]
    fn test_request_quantity_eof() {
        let mut c = console("abc\n");
        assert_eq!(c.request_quantity().unwrap(), None);
    }

    #[test]
    fn test_customer_name() {
        let mut c = console("  Asha Rao \r\n");
        assert_eq!(c.request_customer_name().unwrap(), "Asha Rao");

        let mut c = console("\n");
        assert_eq!(c.request_customer_name().unwrap(), "Guest");

        let mut c = console("");
        assert_eq!(c.request_customer_name().unwrap(), "Guest");
    }

    #[test]
    fn test_display_menu() {
        let mut c = console("");
        c.display_menu("Chill & Fill Café", &Menu::builtin()).unwrap();

        let out = transcript(c);
        assert!(out.starts_with("\n------ Chill & Fill Café MENU ------\n"));
        assert!(out.contains("Pizza        : ₹120.00\n"));
        assert!(out.contains("Pop Corn     : ₹90.00\n"));
        assert!(out.ends_with(&format!("{}\n", "-".repeat(30))));
    }

    #[test]
    fn test_item_added_echo() {
        let mut c = console("");
        c.item_added("pop corn", 2).unwrap();
        assert_eq!(transcript(c), "✔ Added 2 x Pop Corn\n");
    }
}
