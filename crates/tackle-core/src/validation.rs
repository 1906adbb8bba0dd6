//! # Validation Module
//!
//! Input validation utilities shared by the interactive prompts and the
//! test-data loader.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Re-prompt Loop                                     │
//! │                                                                         │
//! │  Prompt "Phone: "                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_phone(input) ← THIS MODULE                                    │
//! │       │                                                                 │
//! │       ├── Err(InvalidPhone) → print message, ask for phone again        │
//! │       │                                                                 │
//! │       └── Ok(digits) → move on to the next field                        │
//! │                                                                         │
//! │  Nothing is committed until every field of the hire is Ok.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: same input, same output, no side effects.

use crate::catalog::{self, catalog_codes};
use crate::error::ValidationError;
use crate::menu::MenuSelection;
use crate::types::CatalogItem;
use crate::{MAX_HIRE_NIGHTS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fewest digits accepted in a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Exact length of the stored card suffix.
pub const CARD_DIGITS: usize = 4;

// =============================================================================
// Customer Field Validators
// =============================================================================

/// Returns the trimmed value, or `Required` when it is blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Validates a phone number and returns its digits.
///
/// ## Rules
/// - Spaces, dashes, brackets and other punctuation are stripped
/// - At least [`MIN_PHONE_DIGITS`] digits must remain
///
/// ```rust
/// use tackle_core::validation::validate_phone;
///
/// assert_eq!(validate_phone("07700 123-456").unwrap(), "07700123456");
/// assert!(validate_phone("123456").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone {
            digits: digits.len(),
            min: MIN_PHONE_DIGITS,
        });
    }
    Ok(digits)
}

/// Validates the last four digits of a payment card.
///
/// The trimmed value must be exactly four ASCII digits; nothing is stripped.
///
/// ```rust
/// use tackle_core::validation::validate_card;
///
/// assert_eq!(validate_card(" 0000 ").unwrap(), "0000");
/// assert!(validate_card("3333a").is_err());
/// assert!(validate_card("44444").is_err());
/// ```
pub fn validate_card(card: &str) -> ValidationResult<String> {
    let card = card.trim();
    if card.len() != CARD_DIGITS || !card.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCard);
    }
    Ok(card.to_string())
}

/// Trims and upper-cases a postcode. Postcodes are not otherwise checked.
pub fn normalise_postcode(postcode: &str) -> String {
    postcode.trim().to_uppercase()
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Looks up an item code case-insensitively.
///
/// ```rust
/// use tackle_core::validation::validate_item_code;
///
/// assert_eq!(validate_item_code("tnt").unwrap().name, "Camping tent");
/// assert!(validate_item_code("XXX").is_err());
/// ```
pub fn validate_item_code(code: &str) -> ValidationResult<&'static CatalogItem> {
    catalog::find_item(code).ok_or_else(|| ValidationError::UnknownItemCode {
        code: code.trim().to_ascii_uppercase(),
        known: catalog_codes(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole number, naming `field` in the error.
pub fn parse_whole_number(field: &str, value: &str) -> ValidationResult<i64> {
    let value = value.trim();
    value.parse::<i64>().map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<i64> {
    if qty < 1 {
        return Err(ValidationError::InvalidQuantity { quantity: qty });
    }
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "Quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(qty)
}

/// Validates a number of nights.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_HIRE_NIGHTS`]
pub fn validate_nights(nights: i64) -> ValidationResult<i64> {
    if nights < 1 {
        return Err(ValidationError::InvalidNights { nights });
    }
    if nights > MAX_HIRE_NIGHTS {
        return Err(ValidationError::OutOfRange {
            field: "Number of nights".to_string(),
            min: 1,
            max: MAX_HIRE_NIGHTS,
        });
    }
    Ok(nights)
}

/// Parses and validates a quantity typed by the user.
pub fn parse_quantity(value: &str) -> ValidationResult<i64> {
    validate_quantity(parse_whole_number("Quantity", value)?)
}

/// Parses and validates a number of nights typed by the user.
pub fn parse_nights(value: &str) -> ValidationResult<i64> {
    validate_nights(parse_whole_number("Number of nights", value)?)
}

// =============================================================================
// Choice Validators
// =============================================================================

/// Parses a main menu selection; only 1, 2 and 3 are accepted.
///
/// ```rust
/// use tackle_core::menu::MenuSelection;
/// use tackle_core::validation::parse_menu_selection;
///
/// assert_eq!(parse_menu_selection(" 2 ").unwrap(), MenuSelection::ShowReport);
/// assert!(parse_menu_selection("4").is_err());
/// assert!(parse_menu_selection("two").is_err());
/// ```
pub fn parse_menu_selection(input: &str) -> ValidationResult<MenuSelection> {
    let invalid = || ValidationError::InvalidSelection {
        input: input.trim().to_string(),
    };
    match input.trim().parse::<i64>().map_err(|_| invalid())? {
        1 => Ok(MenuSelection::RecordHire),
        2 => Ok(MenuSelection::ShowReport),
        3 => Ok(MenuSelection::Exit),
        _ => Err(invalid()),
    }
}

/// Parses a yes/no answer: `y`, `yes`, `n` or `no` in any case.
pub fn parse_yes_no(input: &str) -> ValidationResult<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(ValidationError::InvalidYesNo {
            input: input.trim().to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
