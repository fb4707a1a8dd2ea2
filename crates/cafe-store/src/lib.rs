//! # cafe-store: File Storage for the Café
//!
//! This crate provides durable storage for the billing tool: the bill
//! counter and the receipt archive. Both are plain files on the local disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Billing Data Flow                           │
//! │                                                                         │
//! │  BillingCalculator (cafe-cli)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     cafe-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐                  │   │
//! │  │   │    Store      │    │   Repositories     │                  │   │
//! │  │   │  (store.rs)   │    │                    │                  │   │
//! │  │   │               │    │ FileBillSequencer  │                  │   │
//! │  │   │ StoreConfig   │◄───│ ReceiptStore       │                  │   │
//! │  │   │ paths         │    │                    │                  │   │
//! │  │   └───────────────┘    └────────────────────┘                  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   ./bill_counter.txt          ./Bills/Bill_7_Asha_..._.txt      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Path configuration and repository access
//! - [`repository`] - Bill sequencer and receipt archive
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cafe_store::{BillNumberSource, Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::new("."))?;
//! let bill_number = store.sequencer().next_bill_number()?;
//! let path = store.receipts().persist(&receipt)?;
//! ```

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

pub use repository::receipt::ReceiptStore;
pub use repository::sequencer::{BillNumberSource, FileBillSequencer};
