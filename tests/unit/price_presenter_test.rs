//! Unit tests for price normalization and display classification.
//!
//! The classification cases cover the 2x2 variant grid plus the asymmetric
//! compare-at-range rules, parameterized with rstest.

use rstest::rstest;
use shoptrail::services::price_presenter::{classify, normalize};
use shoptrail::types::price::PriceVariant;
use shoptrail::types::product::{PriceField, ProductRecord};

fn record() -> ProductRecord {
    ProductRecord::new(1, "/products/1", "Product 1", "https://cdn.example.com/1.jpg")
}

// === normalize ===

#[rstest]
#[case("$1,234.56", Some(1234.56))]
#[case("1234.56", Some(1234.56))]
#[case("$ 99", Some(99.0))]
#[case("USD 12.50", Some(12.5))]
#[case("-5.00", Some(-5.0))]
#[case("", None)]
#[case("call us", None)]
#[case("...", None)]
fn normalize_text_inputs(#[case] input: &str, #[case] expected: Option<f64>) {
    assert_eq!(normalize(Some(&PriceField::Text(input.to_string()))), expected);
}

#[test]
fn normalize_amount_passes_through() {
    assert_eq!(normalize(Some(&PriceField::Amount(19.99))), Some(19.99));
}

#[test]
fn normalize_absent_is_none() {
    assert_eq!(normalize(None), None);
}

// === classify: single prices ===

#[rstest]
#[case(Some(10.0), None, PriceVariant::SingleRegular)]
#[case(Some(10.0), Some(15.0), PriceVariant::SingleOnSale)]
#[case(Some(10.0), Some(10.0), PriceVariant::SingleRegular)]
#[case(Some(10.0), Some(8.0), PriceVariant::SingleRegular)]
#[case(None, None, PriceVariant::SingleRegular)]
fn classify_single(
    #[case] price: Option<f64>,
    #[case] compare_at: Option<f64>,
    #[case] expected: PriceVariant,
) {
    let mut r = record();
    r.price = price.map(PriceField::Amount);
    r.compare_at_price = compare_at.map(PriceField::Amount);
    assert_eq!(classify(&r), expected);
}

// === classify: ranges ===

#[test]
fn equal_bounds_are_not_a_range() {
    let mut r = record();
    r.price_min = Some(10.0.into());
    r.price_max = Some(10.0.into());
    assert_eq!(classify(&r), PriceVariant::SingleRegular);
}

#[test]
fn differing_bounds_are_a_range() {
    let mut r = record();
    r.price_min = Some(10.0.into());
    r.price_max = Some(20.0.into());
    assert_eq!(classify(&r), PriceVariant::RangeRegular);
}

#[test]
fn one_missing_bound_is_not_a_range() {
    let mut r = record();
    r.price_min = Some(10.0.into());
    assert_eq!(classify(&r), PriceVariant::SingleRegular);
}

#[test]
fn range_with_higher_compare_range_is_on_sale() {
    let mut r = record();
    r.price_min = Some(10.0.into());
    r.price_max = Some(20.0.into());
    r.compare_at_price_min = Some(15.0.into());
    r.compare_at_price_max = Some(25.0.into());
    assert_eq!(classify(&r), PriceVariant::RangeOnSale);
}

#[test]
fn differing_compare_bounds_alone_flag_sale() {
    // Conservative rule: a compare-at range whose bounds differ flags a
    // sale even when neither bound exceeds the price range.
    let mut r = record();
    r.price_min = Some(10.0.into());
    r.price_max = Some(20.0.into());
    r.compare_at_price_min = Some(5.0.into());
    r.compare_at_price_max = Some(8.0.into());
    assert_eq!(classify(&r), PriceVariant::RangeOnSale);
}

#[test]
fn single_bound_bump_flags_sale() {
    let mut r = record();
    r.price_min = Some(10.0.into());
    r.price_max = Some(20.0.into());
    r.compare_at_price_min = Some(12.0.into());
    r.compare_at_price_max = Some(12.0.into());
    assert_eq!(classify(&r), PriceVariant::RangeOnSale);
}

#[test]
fn equal_compare_range_within_prices_is_regular() {
    let mut r = record();
    r.price_min = Some(10.0.into());
    r.price_max = Some(20.0.into());
    r.compare_at_price_min = Some(10.0.into());
    r.compare_at_price_max = Some(10.0.into());
    assert_eq!(classify(&r), PriceVariant::RangeRegular);
}

#[test]
fn sale_single_inside_a_range_is_range_on_sale() {
    let mut r = record();
    r.price = Some(10.0.into());
    r.compare_at_price = Some(15.0.into());
    r.price_min = Some(10.0.into());
    r.price_max = Some(20.0.into());
    assert_eq!(classify(&r), PriceVariant::RangeOnSale);
}

// === classify: heterogeneous string fields ===

#[test]
fn formatted_strings_classify_like_numbers() {
    let mut r = record();
    r.price = Some("$10.00".into());
    r.compare_at_price = Some("$15.00".into());
    assert_eq!(classify(&r), PriceVariant::SingleOnSale);
}

#[test]
fn unparsable_compare_at_never_flags_sale() {
    let mut r = record();
    r.price = Some(10.0.into());
    r.compare_at_price = Some("ask in store".into());
    assert_eq!(classify(&r), PriceVariant::SingleRegular);
}

// === variant predicates ===

#[rstest]
#[case(PriceVariant::RangeOnSale, true, true)]
#[case(PriceVariant::RangeRegular, true, false)]
#[case(PriceVariant::SingleOnSale, false, true)]
#[case(PriceVariant::SingleRegular, false, false)]
fn variant_predicates(
    #[case] variant: PriceVariant,
    #[case] is_range: bool,
    #[case] is_on_sale: bool,
) {
    assert_eq!(variant.is_range(), is_range);
    assert_eq!(variant.is_on_sale(), is_on_sale);
}
