//! # Error Types
//!
//! Domain-specific error types for tackle-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tackle-core errors (this file)                                        │
//! │  ├── ValidationError  - One field failed, re-prompt that field         │
//! │  └── CoreError        - Whole-record failures (rows, empty hires)      │
//! │                                                                         │
//! │  tackle-cli errors (app crate)                                         │
//! │  └── AppError         - Console and file I/O failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → anyhow (main)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message (code, digit count, ...)
//! 3. Every `ValidationError` message is shown to the user verbatim when a
//!    prompt is re-issued, so keep them short and actionable

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
///
/// Every variant is recoverable: the caller re-requests the same field
/// without abandoning the hire in progress.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Phone number has too few digits once punctuation is stripped.
    #[error("Phone should contain at least {min} digits (found {digits})")]
    InvalidPhone { digits: usize, min: usize },

    /// Card value is not exactly four digits.
    #[error("Card last 4 digits must be exactly 4 digits")]
    InvalidCard,

    /// Item code is not in the catalog.
    #[error("Unknown code '{code}'. Known: {known}")]
    UnknownItemCode { code: String, known: String },

    /// Quantity below one.
    #[error("Quantity must be at least 1 (got {quantity})")]
    InvalidQuantity { quantity: i64 },

    /// Nights below one.
    #[error("Number of nights must be at least 1 (got {nights})")]
    InvalidNights { nights: i64 },

    /// Main menu selection outside 1-3.
    #[error("Invalid option '{input}', choose 1, 2 or 3")]
    InvalidSelection { input: String },

    /// Text where a whole number was expected.
    #[error("{field} must be a whole number (got '{value}')")]
    InvalidNumber { field: String, value: String },

    /// Numeric value above the permitted ceiling.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Anything other than y/yes/n/no.
    #[error("Please enter 'y' or 'n' (got '{input}')")]
    InvalidYesNo { input: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors that concern a whole line, row or hire rather than one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A double-quoted field was opened and never closed.
    #[error("Malformed CSV line: unterminated quote starting at column {column}")]
    MalformedCsvLine { column: usize },

    /// A hire must contain at least one line item.
    #[error("You must enter at least one item")]
    NoLineItems,

    /// A row had the wrong shape for its purpose.
    #[error("Expected {expected}, found {found} field(s)")]
    FieldCount { expected: String, found: usize },

    /// A test-data row could not be turned into a hire.
    #[error("Row {line}: {reason}")]
    InvalidRow { line: usize, reason: String },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
