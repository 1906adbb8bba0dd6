//! # Equipment Catalog
//!
//! The read-only list of hireable equipment. Prices are whole pence and every
//! one is a multiple of 10p, so the 50% pricing multipliers never produce a
//! fractional penny.

use crate::money::Money;
use crate::types::CatalogItem;

const fn item(code: &'static str, name: &'static str, pence: i64) -> CatalogItem {
    CatalogItem {
        code,
        name,
        daily_rate: Money::from_pence(pence),
    }
}

/// The full catalog, in display order.
pub static CATALOG: [CatalogItem; 11] = [
    item("DCH", "Day chairs", 1500),
    item("BCH", "Bed chairs", 2500),
    item("BAS", "Bite Alarm (set of 3)", 2000),
    item("BA1", "Bite Alarm (single)", 500),
    item("BBT", "Bait Boat", 6000),
    item("TNT", "Camping tent", 2000),
    item("SLP", "Sleeping bag", 2000),
    item("R3T", "Rods (3lb TC)", 1000),
    item("RBR", "Rods (Bait runners)", 500),
    item("REB", "Reels (Bait runners)", 1000),
    item("STV", "Camping Gas stove (Double burner)", 1000),
];

/// Case-insensitive lookup of a catalog item by code.
///
/// ```rust
/// use tackle_core::catalog::find_item;
///
/// assert_eq!(find_item("bch").unwrap().daily_rate.pence(), 2500);
/// assert!(find_item("XXX").is_none());
/// ```
pub fn find_item(code: &str) -> Option<&'static CatalogItem> {
    let code = code.trim();
    CATALOG.iter().find(|it| it.code.eq_ignore_ascii_case(code))
}

/// Comma-separated list of every code, for prompts and error messages.
pub fn catalog_codes() -> String {
    CATALOG.iter().map(|it| it.code).collect::<Vec<_>>().join(", ")
}
