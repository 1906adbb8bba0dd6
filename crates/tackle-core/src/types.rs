//! # Domain Types
//!
//! Core domain types used throughout Tackle Hire.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │    LineItem     │   │  CustomerInfo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (3 char)  │◄──│  code           │   │  name, phone    │       │
//! │  │  name           │   │  quantity ≥ 1   │   │  house, postcode│       │
//! │  │  daily_rate     │   └─────────────────┘   │  card_last4     │       │
//! │  └─────────────────┘            │            └─────────────────┘       │
//! │                                 ▼                     │                │
//! │                        ┌─────────────────┐            │                │
//! │                        │  HireRequest    │◄───────────┘                │
//! │                        │  + nights       │                             │
//! │                        │  + on_time      │                             │
//! │                        └────────┬────────┘                             │
//! │                                 │ HireLedger::record()                 │
//! │                                 ▼                                      │
//! │                        ┌─────────────────┐                             │
//! │                        │   HireRecord    │                             │
//! │                        │  customer_id    │                             │
//! │                        │  quote (frozen) │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::money::Money;
use crate::pricing::HireQuote;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Catalog Item
// =============================================================================

/// One entry of the fixed equipment catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// Three character upper-case code, e.g. `DCH`.
    pub code: &'static str,

    /// Display name shown in summaries and reports.
    pub name: &'static str,

    /// Price of one night's hire for a single unit.
    pub daily_rate: Money,
}

// =============================================================================
// Line Item
// =============================================================================

/// One catalog code plus a requested quantity within a hire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Catalog code, stored upper-case.
    pub code: String,

    /// Number of units hired.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item, normalising the code to upper-case.
    ///
    /// No validation happens here; pricing rejects unknown codes and
    /// quantities below one.
    pub fn new(code: &str, quantity: i64) -> Self {
        LineItem {
            code: code.trim().to_ascii_uppercase(),
            quantity,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Validated and normalised customer details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerInfo {
    pub name: String,
    /// Digits only.
    pub phone: String,
    pub house: String,
    /// Upper-case.
    pub postcode: String,
    pub card_last4: String,
}

impl CustomerInfo {
    /// Validates every field and builds the normalised customer.
    ///
    /// Fields are checked in entry order so the first failure matches the
    /// first prompt the user would be sent back to.
    pub fn new(
        name: &str,
        phone: &str,
        house: &str,
        postcode: &str,
        card_last4: &str,
    ) -> ValidationResult<Self> {
        Ok(CustomerInfo {
            name: validation::validate_required("Name", name)?,
            phone: validation::validate_phone(phone)?,
            house: house.trim().to_string(),
            postcode: validation::normalise_postcode(postcode),
            card_last4: validation::validate_card(card_last4)?,
        })
    }
}

// =============================================================================
// Hire Request
// =============================================================================

/// Everything needed to record a hire, before a customer ID is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HireRequest {
    pub customer: CustomerInfo,
    pub line_items: Vec<LineItem>,
    pub nights: i64,
    pub on_time: bool,
}

// =============================================================================
// Hire Record
// =============================================================================

/// A completed hire transaction.
///
/// Built once by [`crate::HireLedger::record`] and never mutated. The quote
/// is computed from `line_items`, `nights` and `on_time` at that moment and
/// cached here; it uses the snapshot pattern so item names and rates are
/// frozen with the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HireRecord {
    pub customer_id: u32,
    pub customer: CustomerInfo,
    pub line_items: Vec<LineItem>,
    pub nights: i64,
    pub on_time: bool,
    pub quote: HireQuote,
}

impl HireRecord {
    /// Amount charged for the hire, late penalty included.
    #[inline]
    pub fn total(&self) -> Money {
        self.quote.total
    }

    /// Late-return surcharge (zero when returned on time).
    #[inline]
    pub fn late_penalty(&self) -> Money {
        self.quote.late_penalty
    }

    /// `y` or `n`, as shown in the report.
    pub fn on_time_flag(&self) -> char {
        if self.on_time {
            'y'
        } else {
            'n'
        }
    }

    /// Equipment description with quantities, e.g.
    /// `Rods (3lb TC) x 3, Rods (Bait runners) x 2`.
    pub fn equipment_summary(&self) -> String {
        self.quote
            .lines
            .iter()
            .map(|line| format!("{} x {}", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
