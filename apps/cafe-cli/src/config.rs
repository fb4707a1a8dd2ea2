//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CAFE_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CAFE_NAME` | `Chill & Fill Café` | Name on receipts |
//! | `CAFE_DATA_DIR` | `.` | Root for counter file and Bills/ |
//! | `CAFE_COUNTER_FILE` | `bill_counter.txt` | Counter file |
//! | `CAFE_BILLS_DIR` | `Bills` | Receipt directory |
//! | `CAFE_GST_PERCENT` | `5` | GST, e.g. `5` or `2.5` |
//! | `CAFE_DISCOUNT_PERCENT` | `10` | Discount rate |
//! | `CAFE_DISCOUNT_THRESHOLD` | `500` | Discount threshold in whole rupees |
//! | `CAFE_MENU_FILE` | built-in menu | JSON `[{"name": "tea", "price_paise": 2000}]` |

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use cafe_core::{BillingPolicy, Menu, MenuItem, Money, Percentage, DEFAULT_CAFE_NAME};
use cafe_store::StoreConfig;

use crate::error::ConfigError;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeConfig {
    /// Café name (displayed on receipts)
    pub cafe_name: String,

    /// Directory the counter file and receipt directory live in
    pub data_dir: PathBuf,

    /// Counter file, relative to `data_dir` unless absolute
    pub counter_file: PathBuf,

    /// Receipt directory, relative to `data_dir` unless absolute
    pub bills_dir: PathBuf,

    /// Discount and GST rules
    pub policy: BillingPolicy,

    /// Optional JSON menu replacing the built-in one
    pub menu_file: Option<PathBuf>,
}

impl Default for CafeConfig {
    /// The standard café: built-in menu, ₹500 / 10% / 5%, files in the
    /// working directory.
    fn default() -> Self {
        CafeConfig {
            cafe_name: DEFAULT_CAFE_NAME.to_string(),
            data_dir: PathBuf::from("."),
            counter_file: PathBuf::from(cafe_store::store::DEFAULT_COUNTER_FILE),
            bills_dir: PathBuf::from(cafe_store::store::DEFAULT_BILLS_DIR),
            policy: BillingPolicy::default(),
            menu_file: None,
        }
    }
}

impl CafeConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key → value source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = CafeConfig::default();

        if let Some(name) = get("CAFE_NAME") {
            config.cafe_name = name.trim().to_string();
        }

        if let Some(dir) = get("CAFE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(file) = get("CAFE_COUNTER_FILE") {
            config.counter_file = PathBuf::from(file);
        }

        if let Some(dir) = get("CAFE_BILLS_DIR") {
            config.bills_dir = PathBuf::from(dir);
        }

        if let Some(value) = get("CAFE_GST_PERCENT") {
            config.policy.gst_rate = parse_percent("CAFE_GST_PERCENT", &value)?;
        }

        if let Some(value) = get("CAFE_DISCOUNT_PERCENT") {
            config.policy.discount_rate = parse_percent("CAFE_DISCOUNT_PERCENT", &value)?;
        }

        if let Some(value) = get("CAFE_DISCOUNT_THRESHOLD") {
            let paise = value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|rupees| *rupees >= 0)
                .and_then(|rupees| rupees.checked_mul(100))
                .ok_or_else(|| ConfigError::InvalidValue("CAFE_DISCOUNT_THRESHOLD".to_string()))?;
            config.policy.discount_threshold = Money::from_paise(paise);
        }

        config.menu_file = get("CAFE_MENU_FILE").map(PathBuf::from);

        Ok(config)
    }

    /// Storage paths for cafe-store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
            .counter_file(&self.counter_file)
            .bills_dir(&self.bills_dir)
    }

    /// The menu to bill against: the JSON menu file if configured, the
    /// built-in menu otherwise.
    pub fn load_menu(&self) -> Result<Menu, ConfigError> {
        let Some(path) = &self.menu_file else {
            return Ok(Menu::builtin());
        };

        let content = fs::read_to_string(path).map_err(|source| {
            ConfigError::MenuFileUnreadable {
                path: path.clone(),
                source,
            }
        })?;

        let items: Vec<MenuItem> =
            serde_json::from_str(&content).map_err(|source| ConfigError::MenuFileMalformed {
                path: path.clone(),
                source,
            })?;

        Ok(Menu::new(items)?)
    }
}

/// Parses `5`, `2.5`, `12.75` into a rate between 0% and 100%.
fn parse_percent(key: &str, value: &str) -> Result<Percentage, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|pct| pct.is_finite() && (0.0..=100.0).contains(pct))
        .map(Percentage::from_percentage)
        .ok_or_else(|| ConfigError::InvalidValue(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CafeConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CafeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.cafe_name, "Chill & Fill Café");
        assert_eq!(config.policy, BillingPolicy::default());
        assert!(config.menu_file.is_none());

        let store = config.store_config();
        assert_eq!(store.counter_path(), PathBuf::from("./bill_counter.txt"));
        assert_eq!(store.bills_path(), PathBuf::from("./Bills"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CAFE_NAME", "  Corner Chai  "),
            ("CAFE_DATA_DIR", "/srv/cafe"),
            ("CAFE_BILLS_DIR", "receipts"),
            ("CAFE_GST_PERCENT", "2.5"),
            ("CAFE_DISCOUNT_PERCENT", "15"),
            ("CAFE_DISCOUNT_THRESHOLD", "1000"),
        ])
        .unwrap();

        assert_eq!(config.cafe_name, "Corner Chai");
        assert_eq!(config.policy.gst_rate, Percentage::from_bps(250));
        assert_eq!(config.policy.discount_rate, Percentage::from_percent(15));
        assert_eq!(config.policy.discount_threshold, Money::from_rupees(1000));
        assert_eq!(config.store_config().bills_path(), PathBuf::from("/srv/cafe/receipts"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = config_from(&[("CAFE_NAME", "   "), ("CAFE_GST_PERCENT", "")]).unwrap();
        assert_eq!(config.cafe_name, DEFAULT_CAFE_NAME);
        assert_eq!(config.policy.gst_rate, Percentage::from_percent(5));
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("CAFE_GST_PERCENT", "five"),
            ("CAFE_GST_PERCENT", "-1"),
            ("CAFE_DISCOUNT_PERCENT", "101"),
            ("CAFE_DISCOUNT_PERCENT", "NaN"),
            ("CAFE_DISCOUNT_THRESHOLD", "-500"),
            ("CAFE_DISCOUNT_THRESHOLD", "12.5"),
            // Fits in i64 as rupees, not as paise
            ("CAFE_DISCOUNT_THRESHOLD", "100000000000000000"),
        ] {
            let err = config_from(&[(key, value)]).unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidValue(k) if k == key),
                "{}={} gave {:?}",
                key,
                value,
                err
            );
        }
    }

    #[test]
    fn test_largest_threshold() {
        let max_rupees = (i64::MAX / 100).to_string();
        let config = config_from(&[("CAFE_DISCOUNT_THRESHOLD", max_rupees.as_str())]).unwrap();
        assert_eq!(
            config.policy.discount_threshold,
            Money::from_paise(i64::MAX / 100 * 100)
        );
    }

    #[test]
    fn test_builtin_menu_without_file() {
        let menu = CafeConfig::default().load_menu().unwrap();
        assert_eq!(menu, Menu::builtin());
    }

    #[test]
    fn test_menu_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("menu.json");
        fs::write(
            &path,
            r#"[{"name": "Masala Chai", "price_paise": 2500}, {"name": "Samosa", "price_paise": 1800}]"#,
        )
        .unwrap();

        let config = config_from(&[("CAFE_MENU_FILE", path.to_str().unwrap())]).unwrap();
        let menu = config.load_menu().unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.lookup("masala chai").unwrap().price, Money::from_rupees(25));
    }

    #[test]
    fn test_menu_file_errors() {
        let dir = TempDir::new().unwrap();

        let missing = CafeConfig {
            menu_file: Some(dir.path().join("missing.json")),
            ..CafeConfig::default()
        };
        assert!(matches!(
            missing.load_menu(),
            Err(ConfigError::MenuFileUnreadable { .. })
        ));

        let malformed_path = dir.path().join("bad.json");
        fs::write(&malformed_path, "{ not json").unwrap();
        let malformed = CafeConfig {
            menu_file: Some(malformed_path),
            ..CafeConfig::default()
        };
        assert!(matches!(
            malformed.load_menu(),
            Err(ConfigError::MenuFileMalformed { .. })
        ));

        let empty_path = dir.path().join("empty.json");
        fs::write(&empty_path, "[]").unwrap();
        let empty = CafeConfig {
            menu_file: Some(empty_path),
            ..CafeConfig::default()
        };
        assert!(matches!(empty.load_menu(), Err(ConfigError::InvalidMenu(_))));
    }
}
