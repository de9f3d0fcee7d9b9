//! Unit tests for the flag and command model.

use std::time::Duration;

use rstest::rstest;

use super::*;

#[rstest]
#[case("path,p", &["path", "p"])]
#[case("path, p", &["path", "p"])]
#[case("v1", &["v1"])]
#[case("a,,b,", &["a", "b"])]
#[case(" , ", &[])]
fn splits_alias_lists(#[case] name: &str, #[case] expected: &[&str]) {
    let names: Vec<_> = split_names(name).collect();
    assert_eq!(names, expected);
}

#[test]
fn typed_flag_exposes_constructor_arguments() {
    let mut port = 0_i32;
    let flag = TypedFlag::new(
        "port",
        "listen port",
        Some("APP_PORT".to_owned()),
        true,
        Some(8080),
        &mut port,
    );
    assert_eq!(flag.name(), "port");
    assert_eq!(flag.usage(), "listen port");
    assert_eq!(flag.env_var(), Some("APP_PORT"));
    assert!(flag.hidden());
    assert_eq!(flag.default(), Some(&8080));
    assert_eq!(flag.current(), &0);
}

#[test]
fn assign_writes_through_to_the_destination() {
    let mut interval = Duration::ZERO;
    {
        let mut flag = TypedFlag::new("interval", "", None, false, None, &mut interval);
        flag.assign(Duration::from_secs(3));
    }
    assert_eq!(interval, Duration::from_secs(3));
}

#[test]
fn flag_summary_renders_defaults_as_literals() {
    let mut timeout = Duration::ZERO;
    let flag = Flag::from(TypedFlag::new(
        "timeout",
        "",
        None,
        false,
        Some(Duration::from_secs(90)),
        &mut timeout,
    ));
    let summary = flag.summary();
    assert_eq!(summary.kind, FlagKind::Duration);
    assert_eq!(summary.default.as_deref(), Some("1m30s"));
    assert_eq!(summary.env_var, None);
}

#[test]
fn looks_flags_up_by_alias() {
    let mut path = String::new();
    let command = Command::new("start").with_flag(TypedFlag::new(
        "path,p",
        "",
        None,
        false,
        None,
        &mut path,
    ));
    assert!(command.flag("path,p").is_some());
    assert!(command.flag("p").is_some());
    assert!(command.flag("path").is_some());
    assert!(command.flag("q").is_none());
}

#[test]
fn structure_ignores_defaults_only() {
    let mut first = 1_u64;
    let mut second = 2_u64;
    let left = App::new("app")
        .with_flag(TypedFlag::new("n", "", None, false, Some(1), &mut first))
        .summary();
    let right = App::new("app")
        .with_flag(TypedFlag::new("n", "", None, false, Some(2), &mut second))
        .summary();
    assert_ne!(left, right);
    assert_eq!(left.structure(), right.structure());
}

#[test]
fn kinds_serialise_in_lower_case() -> serde_json::Result<()> {
    assert_eq!(serde_json::to_string(&FlagKind::Float64)?, "\"float64\"");
    assert_eq!(FlagKind::Uint64.to_string(), "uint64");
    assert_eq!(FlagKind::Duration.zero_literal(), "0s");
    Ok(())
}
