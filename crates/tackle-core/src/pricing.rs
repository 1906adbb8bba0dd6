//! # Pricing Engine
//!
//! The hire pricing rule, applied per item group (one catalog code and its
//! quantity):
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base        = daily rate × quantity                                    │
//! │  first night = 100% × base                                              │
//! │  extra       =  50% × base × (nights − 1)        (rounded half-up)      │
//! │  late        =  50% × base, once, if not on time (rounded half-up)      │
//! │                                                                         │
//! │  Example: Camping tent x2, 4 nights, late                               │
//! │    base 4000 → first 4000 + extra 6000 + late 2000 = 12000 (£120.00)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is integer pence. Catalog prices are multiples of 10p so the
//! 50% steps are always exact; the half-up rounding only matters for rates
//! supplied directly to [`quote_rates`].

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, Rate};
use crate::types::LineItem;
use crate::validation::{validate_item_code, validate_nights, validate_quantity};

/// Share of the base charged for each night after the first.
pub const ADDITIONAL_NIGHT_RATE: Rate = Rate::HALF;

/// Share of the base charged once when equipment comes back late.
pub const LATE_RETURN_RATE: Rate = Rate::HALF;

// =============================================================================
// Quote Types
// =============================================================================

/// Charges for one item group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Charges {
    pub first_night: Money,
    pub additional_nights: Money,
    pub late_penalty: Money,
}

impl Charges {
    /// First night plus additional nights, without the late penalty.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.first_night + self.additional_nights
    }

    /// Everything charged for the group.
    #[inline]
    pub fn total(&self) -> Money {
        self.subtotal() + self.late_penalty
    }
}

/// Subtotal, late penalty and total for a set of item groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuoteTotals {
    pub subtotal: Money,
    pub late_penalty: Money,
    pub total: Money,
}

impl QuoteTotals {
    fn from_charges<'a>(charges: impl IntoIterator<Item = &'a Charges>) -> Self {
        let mut totals = QuoteTotals::default();
        for c in charges {
            totals.subtotal += c.subtotal();
            totals.late_penalty += c.late_penalty;
        }
        totals.total = totals.subtotal + totals.late_penalty;
        totals
    }
}

/// One priced line of a hire, with the catalog data frozen at quote time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineQuote {
    pub code: String,
    pub name: String,
    pub quantity: i64,
    pub daily_rate: Money,
    pub charges: Charges,
}

/// A fully priced hire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HireQuote {
    pub lines: Vec<LineQuote>,
    pub subtotal: Money,
    pub late_penalty: Money,
    pub total: Money,
}

// =============================================================================
// Pricing Functions
// =============================================================================

/// Prices a single item group.
///
/// ## Errors
/// - `InvalidQuantity` when `quantity < 1`
/// - `InvalidNights` when `nights < 1`
pub fn price_line(daily_rate: Money, quantity: i64, nights: i64, on_time: bool) -> CoreResult<Charges> {
    let quantity = validate_quantity(quantity)?;
    let nights = validate_nights(nights)?;

    let base = daily_rate.multiply_quantity(quantity);
    let late_penalty = if on_time {
        Money::zero()
    } else {
        base.apply_rate(LATE_RETURN_RATE)
    };

    Ok(Charges {
        first_night: base,
        additional_nights: base
            .multiply_quantity(nights - 1)
            .apply_rate(ADDITIONAL_NIGHT_RATE),
        late_penalty,
    })
}

/// Prices raw `(daily rate, quantity)` pairs.
///
/// ```rust
/// use tackle_core::pricing::quote_rates;
/// use tackle_core::Money;
///
/// // Day chairs x2, 1 night, on time
/// let totals = quote_rates(&[(Money::from_pence(1500), 2)], 1, true).unwrap();
/// assert_eq!(totals.total.pence(), 3000);
/// ```
///
/// ## Errors
/// `NoLineItems` for an empty slice, plus anything [`price_line`] returns.
pub fn quote_rates(lines: &[(Money, i64)], nights: i64, on_time: bool) -> CoreResult<QuoteTotals> {
    if lines.is_empty() {
        return Err(CoreError::NoLineItems);
    }
    let charges = lines
        .iter()
        .map(|&(rate, qty)| price_line(rate, qty, nights, on_time))
        .collect::<CoreResult<Vec<_>>>()?;
    Ok(QuoteTotals::from_charges(&charges))
}

/// Prices catalog line items.
///
/// ## Errors
/// - `NoLineItems` when `items` is empty
/// - `UnknownItemCode` for a code not in the catalog
/// - `InvalidQuantity` / `InvalidNights` as for [`price_line`]
pub fn quote_hire(items: &[LineItem], nights: i64, on_time: bool) -> CoreResult<HireQuote> {
    if items.is_empty() {
        return Err(CoreError::NoLineItems);
    }

    let mut lines = Vec::with_capacity(items.len());
    for line in items {
        let item = validate_item_code(&line.code)?;
        let charges = price_line(item.daily_rate, line.quantity, nights, on_time)?;
        lines.push(LineQuote {
            code: item.code.to_string(),
            name: item.name.to_string(),
            quantity: line.quantity,
            daily_rate: item.daily_rate,
            charges,
        });
    }

    let totals = QuoteTotals::from_charges(lines.iter().map(|l| &l.charges));
    Ok(HireQuote {
        lines,
        subtotal: totals.subtotal,
        late_penalty: totals.late_penalty,
        total: totals.total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn pence(p: i64) -> Money {
        Money::from_pence(p)
    }

    #[test]
    fn test_single_night_on_time() {
        let totals = quote_rates(&[(pence(1500), 2)], 1, true).unwrap();
        assert_eq!(totals.subtotal, pence(3000));
        assert_eq!(totals.late_penalty, Money::zero());
        assert_eq!(totals.total, pence(3000));
    }

    #[test]
    fn test_two_nights_late() {
        let totals = quote_rates(&[(pence(2500), 1)], 2, false).unwrap();
        assert_eq!(totals.subtotal, pence(3750));
        assert_eq!(totals.late_penalty, pence(1250));
        assert_eq!(totals.total, pence(5000));
    }

    #[test]
    fn test_four_nights_late_breakdown() {
        let charges = price_line(pence(2000), 2, 4, false).unwrap();
        assert_eq!(charges.first_night, pence(4000));
        assert_eq!(charges.additional_nights, pence(6000));
        assert_eq!(charges.late_penalty, pence(2000));
        assert_eq!(charges.total(), pence(12000));
    }

    #[test]
    fn test_late_penalty_applied_once_per_group() {
        // 5 nights does not multiply the penalty
        let charges = price_line(pence(500), 1, 5, false).unwrap();
        assert_eq!(charges.late_penalty, pence(250));
        assert_eq!(charges.total(), pence(1750));
    }

    #[test]
    fn test_odd_rate_rounds_half_up() {
        // 50% of 5p is 2.5p
        let charges = price_line(pence(5), 1, 2, false).unwrap();
        assert_eq!(charges.additional_nights, pence(3));
        assert_eq!(charges.late_penalty, pence(3));
    }

    #[test]
    fn test_quote_hire_mixed_lines() {
        let items = vec![LineItem::new("r3t", 3), LineItem::new("RBR", 2)];
        let quote = quote_hire(&items, 2, false).unwrap();

        assert_eq!(quote.lines.len(), 2);
        assert_eq!(quote.lines[0].code, "R3T");
        assert_eq!(quote.lines[0].name, "Rods (3lb TC)");
        assert_eq!(quote.lines[0].charges.total(), pence(6000));
        assert_eq!(quote.lines[1].charges.total(), pence(2000));
        assert_eq!(quote.subtotal, pence(6000));
        assert_eq!(quote.late_penalty, pence(2000));
        assert_eq!(quote.total, pence(8000));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            price_line(pence(1500), 0, 1, true),
            Err(CoreError::Validation(ValidationError::InvalidQuantity { quantity: 0 }))
        );
        assert_eq!(
            price_line(pence(1500), 1, 0, true),
            Err(CoreError::Validation(ValidationError::InvalidNights { nights: 0 }))
        );
        assert_eq!(quote_rates(&[], 1, true), Err(CoreError::NoLineItems));
        assert_eq!(quote_hire(&[], 1, true), Err(CoreError::NoLineItems));

        let err = quote_hire(&[LineItem::new("XXX", 1)], 1, true).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::UnknownItemCode { .. })
        ));
    }

    #[test]
    fn test_quote_is_deterministic() {
        let items = vec![LineItem::new("DCH", 1), LineItem::new("BCH", 1), LineItem::new("BA1", 1)];
        let a = quote_hire(&items, 5, false).unwrap();
        let b = quote_hire(&items, 5, false).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total, pence(15750));
    }
}
