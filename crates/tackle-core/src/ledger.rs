//! # Hire Ledger
//!
//! The in-memory, append-only store of completed hires for one run.
//!
//! ## Invariants
//! - Records are kept in the order they were recorded
//! - Customer IDs are sequential, starting at [`FIRST_CUSTOMER_ID`]
//! - A record is appended only after the whole request has validated and
//!   priced; a failed `record` call leaves the ledger and the next ID
//!   untouched
//! - Records are never edited or removed

use tracing::{debug, info};

use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::quote_hire;
use crate::types::{HireRecord, HireRequest};
use crate::validation::validate_nights;
use crate::FIRST_CUSTOMER_ID;

/// Append-only sequence of hire records.
#[derive(Debug, Clone)]
pub struct HireLedger {
    records: Vec<HireRecord>,
    next_customer_id: u32,
}

impl Default for HireLedger {
    fn default() -> Self {
        HireLedger::new()
    }
}

impl HireLedger {
    /// Creates an empty ledger whose first hire gets customer ID 101.
    pub fn new() -> Self {
        HireLedger {
            records: Vec::new(),
            next_customer_id: FIRST_CUSTOMER_ID,
        }
    }

    /// Prices and stores a hire, assigning the next customer ID.
    ///
    /// ## Errors
    /// Whatever [`quote_hire`] rejects: no items, unknown codes, bad
    /// quantities or nights. Nothing is stored on error.
    pub fn record(&mut self, request: HireRequest) -> CoreResult<&HireRecord> {
        let nights = validate_nights(request.nights)?;
        let quote = quote_hire(&request.line_items, nights, request.on_time)?;

        let customer_id = self.next_customer_id;
        debug!(
            customer_id,
            lines = quote.lines.len(),
            nights,
            on_time = request.on_time,
            "Hire priced"
        );

        self.records.push(HireRecord {
            customer_id,
            customer: request.customer,
            line_items: request.line_items,
            nights,
            on_time: request.on_time,
            quote,
        });
        self.next_customer_id += 1;

        let record = &self.records[self.records.len() - 1];
        info!(
            customer_id,
            total_pence = record.total().pence(),
            late_pence = record.late_penalty().pence(),
            "Hire recorded"
        );
        Ok(record)
    }

    /// All records, oldest first.
    #[inline]
    pub fn records(&self) -> &[HireRecord] {
        &self.records
    }

    /// ID the next recorded hire will receive.
    #[inline]
    pub fn next_customer_id(&self) -> u32 {
        self.next_customer_id
    }

    /// Number of hires recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every hire total.
    pub fn total_earnings(&self) -> Money {
        self.records.iter().map(HireRecord::total).sum()
    }

    /// Sum of every late penalty.
    pub fn total_late_penalties(&self) -> Money {
        self.records.iter().map(HireRecord::late_penalty).sum()
    }
}
