//! # Row Decoding
//!
//! Turns comma separated text into hire inputs. Two shapes are understood:
//!
//! ```text
//! item entry (typed at the prompt):
//!     CODE, quantity
//!
//! hire row (test-data files):
//!     name, phone, house, postcode, card, nights, on_time, CODE, qty [, CODE, qty ...]
//!     "Olivia Gray",07800123456,99,CF11 8TN,8888,2,n,R3T,3,RBR,2
//! ```
//!
//! Both go through [`parse_csv_line`] first and then through the same
//! validators as the interactive prompts, so a row is accepted exactly when
//! the same answers typed at the console would be.

use crate::csv_line::parse_csv_line;
use crate::error::{CoreError, CoreResult};
use crate::types::{CustomerInfo, HireRequest, LineItem};
use crate::validation::{parse_nights, parse_quantity, parse_yes_no, validate_item_code};

/// Fields before the first code/quantity pair in a hire row.
const HIRE_HEADER_FIELDS: usize = 7;

/// Parses a `CODE, quantity` entry into a validated line item.
///
/// ```rust
/// use tackle_core::ingest::parse_item_entry;
///
/// let line = parse_item_entry("dch, 2").unwrap();
/// assert_eq!((line.code.as_str(), line.quantity), ("DCH", 2));
///
/// assert!(parse_item_entry("DCH").is_err());
/// assert!(parse_item_entry("XXX, 1").is_err());
/// ```
pub fn parse_item_entry(line: &str) -> CoreResult<LineItem> {
    let fields = parse_csv_line(line)?;
    let [code, qty] = fields.as_slice() else {
        return Err(CoreError::FieldCount {
            expected: "2 fields: CODE, quantity".to_string(),
            found: fields.len(),
        });
    };
    item_from_fields(code, qty)
}

/// True for lines a test-data file may contain that are not hires.
pub fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Decodes one hire row.
///
/// ## Errors
/// - `MalformedCsvLine` for an unterminated quote
/// - `FieldCount` when the row is short or a quantity is missing its code
/// - Any `ValidationError` raised by the customer, nights, on-time or item
///   fields
pub fn parse_hire_row(line: &str) -> CoreResult<HireRequest> {
    let fields = parse_csv_line(line)?;
    let shape_error = || CoreError::FieldCount {
        expected: format!("{HIRE_HEADER_FIELDS} hire fields followed by CODE, quantity pairs"),
        found: fields.len(),
    };

    let [name, phone, house, postcode, card, nights, on_time, pairs @ ..] = fields.as_slice()
    else {
        return Err(shape_error());
    };
    if pairs.is_empty() || pairs.len() % 2 != 0 {
        return Err(shape_error());
    }

    let customer = CustomerInfo::new(name, phone, house, postcode, card)?;
    let nights = parse_nights(nights)?;
    let on_time = parse_yes_no(on_time)?;
    let line_items = pairs
        .chunks_exact(2)
        .map(|pair| item_from_fields(&pair[0], &pair[1]))
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(HireRequest {
        customer,
        line_items,
        nights,
        on_time,
    })
}

fn item_from_fields(code: &str, qty: &str) -> CoreResult<LineItem> {
    let item = validate_item_code(code)?;
    let quantity = parse_quantity(qty)?;
    Ok(LineItem::new(item.code, quantity))
}
