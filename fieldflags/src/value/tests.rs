//! Unit tests for flag value literals.

use std::time::Duration;

use rstest::rstest;

use super::*;

#[rstest]
#[case("300ms", Duration::from_millis(300))]
#[case("1.5h", Duration::from_secs(5_400))]
#[case("2h45m", Duration::from_secs(9_900))]
#[case("1m0.5s", Duration::from_millis(60_500))]
#[case("+10s", Duration::from_secs(10))]
#[case(".5s", Duration::from_millis(500))]
#[case("5.s", Duration::from_secs(5))]
#[case("1µs", Duration::from_micros(1))]
#[case("7us", Duration::from_micros(7))]
#[case("40ns", Duration::from_nanos(40))]
#[case("0", Duration::ZERO)]
#[case("-0", Duration::ZERO)]
#[case("0s", Duration::ZERO)]
fn parses_duration_literals(#[case] raw: &str, #[case] expected: Duration) {
    assert_eq!(parse_duration(raw), Ok(expected));
}

#[rstest]
#[case("", DurationError::Empty)]
#[case("10", DurationError::MissingUnit("10".to_owned()))]
#[case("3d", DurationError::UnknownUnit("d".to_owned()))]
#[case("-1s", DurationError::Negative)]
#[case("s", DurationError::MissingNumber("s".to_owned()))]
#[case("99999999999999999h", DurationError::Overflow)]
fn rejects_malformed_durations(#[case] raw: &str, #[case] expected: DurationError) {
    assert_eq!(parse_duration(raw), Err(expected));
}

#[rstest]
#[case(Duration::ZERO, "0s")]
#[case(Duration::from_secs(5_400), "1h30m0s")]
#[case(Duration::from_millis(125_500), "2m5.5s")]
#[case(Duration::from_secs(42), "42s")]
#[case(Duration::from_millis(250), "250ms")]
#[case(Duration::from_nanos(1_500), "1.5µs")]
#[case(Duration::from_nanos(40), "40ns")]
#[case(Duration::MAX, "5124095576030431h0m15.999999999s")]
fn formats_canonical_durations(#[case] duration: Duration, #[case] expected: &str) {
    let rendered = format_duration(duration);
    assert_eq!(rendered, expected);
    assert_eq!(parse_duration(&rendered), Ok(duration));
}

#[rstest]
#[case("true", Some(true))]
#[case("T", Some(true))]
#[case("1", Some(true))]
#[case("False", Some(false))]
#[case("0", Some(false))]
#[case("yes", None)]
#[case("not-a-bool", None)]
#[case(" true", None)]
fn parses_boolean_literals(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}

#[test]
fn zero_values_match_their_literals() {
    assert!(false.is_zero());
    assert!(String::new().is_zero());
    assert!(Duration::ZERO.is_zero());
    assert!(0.0_f64.is_zero());
    assert!((-0.0_f64).is_zero());
    assert!(0_i32.is_zero() && 0_i64.is_zero() && 0_u32.is_zero() && 0_u64.is_zero());
    assert!(!7_i32.is_zero());
    assert!(!f64::NAN.is_zero());
}

#[test]
fn numeric_literals_are_parsed_into_the_exact_type() {
    assert_eq!(i32::parse_literal("33"), Ok(33));
    assert_eq!(u64::parse_literal("66"), Ok(66));
    assert_eq!(f64::parse_literal("2.5"), Ok(2.5));
    assert!(u32::parse_literal("-2").is_err());
    assert!(i32::parse_literal("4294967296").is_err());
    assert!(i64::parse_literal("12abc").is_err());
}

#[rstest]
#[case("1e400")]
#[case("-1e400")]
fn out_of_range_floats_are_rejected(#[case] raw: &str) {
    let Err(err) = f64::parse_literal(raw) else {
        panic!("`{raw}` must not parse as a float");
    };
    assert_eq!(err.reason(), "value out of range");
}

#[rstest]
#[case("inf", f64::INFINITY)]
#[case("-Infinity", f64::NEG_INFINITY)]
fn spelled_infinities_parse(#[case] raw: &str, #[case] expected: f64) {
    assert_eq!(f64::parse_literal(raw), Ok(expected));
}

#[test]
fn value_error_reports_kind_and_literal() {
    let Err(err) = bool::parse_literal("maybe") else {
        panic!("`maybe` must not parse as a bool");
    };
    assert_eq!(err.kind(), FlagKind::Bool);
    assert_eq!(err.value(), "maybe");
    assert_eq!(
        err.to_string(),
        "invalid bool value `maybe`: expected true or false"
    );
}
