//! Price display classification.
//!
//! Stateless helpers that decide which of the four price layouts a card
//! gets. Decisions are made over normalized numeric values; the strings
//! the shopper sees are always the original pre-formatted fields, so
//! store-level currency formatting survives untouched.

use crate::types::price::PriceVariant;
use crate::types::product::{PriceField, ProductRecord};

/// Normalizes a price field to a comparable number.
///
/// `Amount` passes through. `Text` keeps only digits, `.` and `-`, then
/// parses; "$1,234.56" and "EUR 1.234" both survive. Absent or unparsable
/// input yields `None`.
pub fn normalize(field: Option<&PriceField>) -> Option<f64> {
    match field {
        Some(PriceField::Amount(value)) => Some(*value),
        Some(PriceField::Text(text)) => {
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().ok()
        }
        None => None,
    }
}

/// Classifies a record into its price display variant.
///
/// Range means both bounds are present and differ. Sale means the single
/// compare-at exceeds the price, or a compare-at range exists whose bounds
/// differ, or either compare-at bound exceeds the matching price bound.
/// A one-sided compare-at bump flags the whole range on sale.
pub fn classify(record: &ProductRecord) -> PriceVariant {
    let price = normalize(record.price.as_ref());
    let compare_at = normalize(record.compare_at_price.as_ref());
    let price_min = normalize(record.price_min.as_ref());
    let price_max = normalize(record.price_max.as_ref());
    let compare_min = normalize(record.compare_at_price_min.as_ref());
    let compare_max = normalize(record.compare_at_price_max.as_ref());

    let is_range = match (price_min, price_max) {
        (Some(min), Some(max)) => min != max,
        _ => false,
    };

    let single_sale = match (price, compare_at) {
        (Some(p), Some(c)) => c > p,
        _ => false,
    };

    let range_sale = match (compare_min, compare_max) {
        (Some(cmin), Some(cmax)) => {
            cmin != cmax
                || matches!(price_min, Some(pmin) if cmin > pmin)
                || matches!(price_max, Some(pmax) if cmax > pmax)
        }
        _ => false,
    };

    let is_on_sale = single_sale || range_sale;

    match (is_range, is_on_sale) {
        (true, true) => PriceVariant::RangeOnSale,
        (true, false) => PriceVariant::RangeRegular,
        (false, true) => PriceVariant::SingleOnSale,
        (false, false) => PriceVariant::SingleRegular,
    }
}
