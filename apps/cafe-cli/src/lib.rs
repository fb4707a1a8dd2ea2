//! # Café Console Library
//!
//! Everything behind the `cafe` binary: configuration, the interactive
//! console, billing orchestration and the session loop.
//!
//! ## Module Organization
//! ```text
//! cafe_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── CAFE_* environment settings, menu file
//! ├── console.rs      ◄─── Prompts, menu display, receipt display
//! ├── billing.rs      ◄─── Totals → bill number → receipt → file
//! ├── session.rs      ◄─── One customer's ordering session
//! └── error.rs        ◄─── AppError / ConfigError
//! ```

pub mod billing;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cafe_store::Store;

pub use billing::BillingCalculator;
pub use config::CafeConfig;
pub use console::{Console, OrderInput};
pub use error::{AppError, AppResult, ConfigError};
pub use session::{collect_order, run_session, SessionOutcome};

/// Runs one ordering session on the terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • stderr, default "warn", override with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • CAFE_* environment variables, menu file if configured             │
/// │                                                                         │
/// │  3. Open Store                                                          │
/// │     • data directory, counter file, Bills/                              │
/// │                                                                         │
/// │  4. Run Session on stdin / stdout                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<SessionOutcome> {
    init_tracing();

    let config = CafeConfig::from_env()?;
    let menu = config.load_menu()?;
    info!(
        cafe = %config.cafe_name,
        items = menu.len(),
        data_dir = ?config.data_dir,
        "Configuration loaded"
    );

    let store = Store::open(config.store_config())?;
    let mut calculator = BillingCalculator::new(
        config.cafe_name.clone(),
        menu,
        config.policy,
        Box::new(store.sequencer()),
        store.receipts(),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    run_session(&mut console, &mut calculator)
}

/// Logs go to stderr so they never mix with the receipt on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded; keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
