//! # Repository Module
//!
//! File-backed repositories for the café.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories and Their Files                         │
//! │                                                                         │
//! │  BillingCalculator                                                      │
//! │       │                                                                 │
//! │       ├── store.sequencer().next_bill_number()                          │
//! │       │        │                                                        │
//! │       │        ▼                                                        │
//! │       │   FileBillSequencer ── read N, write N+1 ──► bill_counter.txt   │
//! │       │                                                                 │
//! │       └── store.receipts().persist(&receipt)                            │
//! │                │                                                        │
//! │                ▼                                                        │
//! │           ReceiptStore ── create dir, write text ──► Bills/*.txt        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`FileBillSequencer`](sequencer::FileBillSequencer) - Durable bill numbers
//! - [`ReceiptStore`](receipt::ReceiptStore) - Receipt archive

pub mod receipt;
pub mod sequencer;
