use questionpy_common::{Size, SizeError, SizeUnit};
use rstest::rstest;

#[test]
fn units_equal_plain_integers() {
    assert_eq!(SizeUnit::KiB, 1024u64);
    assert_eq!(SizeUnit::TiB, 1024u64.pow(4));
}

#[test]
fn construction_scales_and_rounds() {
    assert_eq!(Size::new(1, SizeUnit::KiB).unwrap(), 1024i64);
    assert_eq!(Size::new("1.5", SizeUnit::KiB).unwrap(), 1536i64);
    assert_eq!(Size::new(0.5, SizeUnit::B).unwrap(), 0i64);
    assert_eq!(
        Size::from_string("1 TiB").unwrap(),
        Size::new(1, SizeUnit::TiB).unwrap()
    );
}

#[test]
fn display_matches_expected_forms() {
    assert_eq!(Size::from_bytes(1536).to_string(), "1.50 KiB");
    assert_eq!(Size::from_bytes(1).to_string(), "1 B");
}

#[rstest]
#[case("1 5")]
#[case("1 KiB KiB")]
#[case("KiB")]
fn from_string_rejects_garbage(#[case] input: &str) {
    let err = Size::from_string(input).unwrap_err();

    assert!(matches!(err, SizeError::InvalidSizeString { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[rstest]
#[case("512 B")]
#[case("1.50 KiB")]
#[case("3.25 MiB")]
#[case("2.00 GiB")]
#[case("-7.75 TiB")]
fn display_output_parses_back(#[case] rendered: &str) {
    let size = Size::from_string(rendered).unwrap();
    assert_eq!(size.to_string(), rendered);
}

#[test]
fn rendering_is_idempotent() {
    let size = Size::new(3, SizeUnit::GiB).unwrap();
    assert_eq!(size.to_string(), size.to_string());
}

#[test]
fn convert_to_is_lossless_for_whole_units() {
    let size = Size::new(2, SizeUnit::MiB).unwrap();

    assert_eq!(size.convert_to(SizeUnit::B), 2.0 * 1024.0 * 1024.0);
    assert_eq!(size.convert_to(SizeUnit::KiB), 2048.0);
    assert_eq!(size.convert_to(SizeUnit::GiB), 2.0 / 1024.0);
}

#[test]
fn sizes_sort_by_byte_count() {
    let mut sizes: Vec<Size> = ["1 GiB", "12", "3 KiB", "-1 MiB"]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();
    sizes.sort();

    let rendered: Vec<String> = sizes.iter().map(Size::to_string).collect();
    assert_eq!(rendered, ["-1.00 MiB", "12 B", "3.00 KiB", "1.00 GiB"]);
}
