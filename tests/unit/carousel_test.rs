//! Unit tests for carousel configuration derivation.

use rstest::rstest;
use shoptrail::services::carousel::CarouselOptions;

// === defaults and attribute parsing ===

#[test]
fn defaults_are_four_desktop_two_mobile() {
    let options = CarouselOptions::default();
    assert_eq!(options.slides_desktop, 4);
    assert_eq!(options.slides_mobile, 2);
}

#[test]
fn from_attributes_parses_both_values() {
    let options = CarouselOptions::from_attributes(Some("5"), Some("3"));
    assert_eq!(options.slides_desktop, 5);
    assert_eq!(options.slides_mobile, 3);
}

#[test]
fn from_attributes_tolerates_whitespace() {
    let options = CarouselOptions::from_attributes(Some(" 5 "), Some("2"));
    assert_eq!(options.slides_desktop, 5);
}

#[rstest]
#[case(None, None, 4, 2)]
#[case(Some("nope"), Some("2"), 4, 2)]
#[case(Some("5"), Some(""), 5, 2)]
#[case(Some("-1"), Some("abc"), 4, 2)]
fn from_attributes_falls_back_per_field(
    #[case] desktop: Option<&str>,
    #[case] mobile: Option<&str>,
    #[case] expected_desktop: u32,
    #[case] expected_mobile: u32,
) {
    let options = CarouselOptions::from_attributes(desktop, mobile);
    assert_eq!(options.slides_desktop, expected_desktop);
    assert_eq!(options.slides_mobile, expected_mobile);
}

// === breakpoint mapping ===

#[rstest]
#[case(0, 2)]
#[case(479, 2)]
#[case(480, 3)]
#[case(767, 3)]
#[case(768, 3)]
#[case(1023, 3)]
#[case(1024, 4)]
#[case(1920, 4)]
fn slides_for_width_with_defaults(#[case] width: u32, #[case] expected: u32) {
    let options = CarouselOptions::default();
    assert_eq!(options.slides_for_width(width), expected);
}

#[test]
fn middle_bands_respect_desktop_cap_and_mobile_floor() {
    // mobile == desktop collapses every band to the same count
    let flat = CarouselOptions {
        slides_desktop: 2,
        slides_mobile: 2,
    };
    for width in [100, 500, 800, 1200] {
        assert_eq!(flat.slides_for_width(width), 2);
    }
}

#[test]
fn slides_for_width_is_monotonic() {
    let options = CarouselOptions {
        slides_desktop: 5,
        slides_mobile: 2,
    };
    let counts: Vec<u32> = [100, 480, 768, 1024]
        .iter()
        .map(|w| options.slides_for_width(*w))
        .collect();
    assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
}

// === init blob ===

#[test]
fn init_config_carries_breakpoint_cells() {
    let options = CarouselOptions::default();
    let config = options.init_config();

    let responsive = config["responsive"].as_array().unwrap();
    assert_eq!(responsive.len(), 4);
    assert_eq!(responsive[0]["maxWidth"], 480);
    assert_eq!(responsive[0]["cells"], 2);
    assert_eq!(responsive[3]["minWidth"], 1024);
    assert_eq!(responsive[3]["cells"], 4);
}

#[test]
fn init_config_groups_by_desktop_count() {
    let options = CarouselOptions {
        slides_desktop: 5,
        slides_mobile: 2,
    };
    assert_eq!(options.init_config()["groupCells"], 5);
}

// === serde ===

#[test]
fn deserializes_from_empty_object_with_defaults() {
    let options: CarouselOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, CarouselOptions::default());
}

#[test]
fn deserializes_partial_overrides() {
    let options: CarouselOptions = serde_json::from_str(r#"{"slides_desktop": 6}"#).unwrap();
    assert_eq!(options.slides_desktop, 6);
    assert_eq!(options.slides_mobile, 2);
}
