//! # tackle-core: Pure Business Logic for Tackle Hire
//!
//! This crate holds every rule of the hire shop as pure functions with zero
//! I/O dependencies. The console application in `apps/tackle-cli` only reads
//! input, calls into this crate and prints what comes back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tackle Hire Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tackle-cli (console)                         │   │
//! │  │    Menu loop ──► Hire prompts ──► Report ──► Exit              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tackle-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │  ledger   │  │ validation│  │   │
//! │  │   │  11 items │  │  HireQuote│  │HireRecord │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  csv_line │  │  ingest   │  │  report   │  │   menu    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed equipment list and code lookups
//! - [`money`] - Money type with integer pence arithmetic (no floating point!)
//! - [`types`] - Domain types (LineItem, CustomerInfo, HireRecord, ...)
//! - [`validation`] - Field validators used by every input path
//! - [`csv_line`] - Quote-aware single line CSV splitting
//! - [`pricing`] - The tiered hire pricing rule
//! - [`ledger`] - Append-only store of completed hires
//! - [`ingest`] - Decoding test-data rows into hire requests
//! - [`report`] - Earnings report generation
//! - [`menu`] - Main menu state machine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tackle_core::pricing::quote_rates;
//! use tackle_core::Money;
//!
//! // Bed chairs x1 for 2 nights, returned late
//! let quote = quote_rates(&[(Money::from_pence(2500), 1)], 2, false).unwrap();
//!
//! assert_eq!(quote.subtotal.pence(), 3750);
//! assert_eq!(quote.late_penalty.pence(), 1250);
//! assert_eq!(quote.total.pence(), 5000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod csv_line;
pub mod error;
pub mod ingest;
pub mod ledger;
pub mod menu;
pub mod money;
pub mod pricing;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::HireLedger;
pub use money::{Money, Rate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Customer ID handed to the first hire of a run.
pub const FIRST_CUSTOMER_ID: u32 = 101;

/// Maximum quantity of a single item on one hire line.
///
/// Keeps `rate × quantity × nights` comfortably inside `i64`.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum number of nights for a single hire.
pub const MAX_HIRE_NIGHTS: i64 = 365;
