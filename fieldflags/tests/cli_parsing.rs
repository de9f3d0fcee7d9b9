//! End-to-end parsing through clap into a bound configuration.

mod common;

use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use common::{ConfPile, gist_app};
use fieldflags::FieldFlagsError;
use rstest::rstest;
use test_helpers::env;

#[test]
fn root_invocation_applies_defaults_and_flags() -> Result<()> {
    let lock = env::lock();
    let _v1 = lock.remove_var("V1");
    let mut conf = ConfPile::default();
    let mut app = gist_app("cliroot");
    app.bind(&mut conf)?;
    let invocation = app.try_run_from([
        "cliroot",
        "--f-bool",
        "--f-duration",
        "1h30m",
        "--f-float64=0.5",
        "--f-int64",
        "-9000000000",
        "--f-int=-4",
        "--app-log-dir",
        "/var/log/gist",
    ])?;
    ensure!(invocation.is_root());
    ensure!(conf.f_bool);
    ensure!(conf.f_duration == Duration::from_secs(5_400));
    ensure!((conf.f_float64 - 0.5).abs() < f64::EPSILON);
    ensure!(conf.f_int64 == -9_000_000_000);
    ensure!(conf.app.log_dir == "/var/log/gist");
    ensure!(conf.f_int == -4);
    ensure!(conf.f_uint == 2 && conf.f_uint64 == 66);
    ensure!(conf.version1 == "0.0.1" && conf.version2 == "0.0.1");
    ensure!(conf.start.path.is_empty(), "start flags only apply to start");
    Ok(())
}

#[test]
fn start_server_path_writes_both_levels() -> Result<()> {
    let mut conf = ConfPile::default();
    let mut app = gist_app("clistart");
    app.bind(&mut conf)?;
    let invocation = app.try_run_from([
        "clistart", "start", "-p", "/srv", "--interval", "15", "server", "--port", "9443",
    ])?;
    ensure!(invocation.path() == ["start", "server"]);
    ensure!(conf.start.path == "/srv");
    ensure!(conf.start.interval == 15);
    ensure!(conf.start.server.port == 9443);
    Ok(())
}

#[test]
fn environment_fills_root_and_command_flags() -> Result<()> {
    let lock = env::lock();
    let _v1 = lock.set_var("V1", "1.2.3");
    let _db = lock.set_var("CLIENV_PRIMARY_DB_URL", "http://couch:5984");
    let _interval = lock.set_var("CLIENV_START_INTERVAL", "30");
    let _bool = lock.set_var("CLIENV_F_BOOL", "t");

    let mut conf = ConfPile::default();
    let mut app = gist_app("clienv");
    app.bind(&mut conf)?;
    app.try_run_from(["clienv", "start"])?;
    ensure!(conf.version1 == "1.2.3");
    ensure!(conf.primary_db.url == "http://couch:5984");
    ensure!(conf.start.interval == 30);
    ensure!(conf.f_bool);
    ensure!(conf.start.path == "/tmp", "default applies when env is unset");
    Ok(())
}

#[test]
fn preloaded_values_survive_an_empty_command_line() -> Result<()> {
    let mut conf = ConfPile {
        f_string: "from file".to_owned(),
        f_uint: 40,
        ..ConfPile::default()
    };
    let mut app = gist_app("clipreload");
    app.bind(&mut conf)?;
    app.try_run_from(["clipreload"])?;
    ensure!(conf.f_string == "from file");
    ensure!(conf.f_uint == 40);
    Ok(())
}

#[rstest]
#[case::negative_uint(&["cliinvalid", "--f-uint", "-1"])]
#[case::int_overflow(&["cliinvalid", "--f-int", "3000000000"])]
#[case::bad_duration(&["cliinvalid", "--f-duration", "10"])]
#[case::bad_bool(&["cliinvalid", "--f-bool=maybe"])]
#[case::unknown_flag(&["cliinvalid", "--nope"])]
fn invalid_input_is_a_parse_error(#[case] args: &[&str]) -> Result<()> {
    let mut conf = ConfPile::default();
    let mut app = gist_app("cliinvalid");
    app.bind(&mut conf)?;
    let err = app
        .try_run_from(args.iter().copied())
        .err()
        .ok_or_else(|| anyhow!("expected {args:?} to fail"))?;
    ensure!(matches!(err, FieldFlagsError::CliParsing(_)));
    ensure!(!err.is_display_request());
    Ok(())
}

#[test]
fn start_help_lists_command_flags() -> Result<()> {
    let mut conf = ConfPile::default();
    let mut app = gist_app("clihelp");
    app.bind(&mut conf)?;
    let err = app
        .try_run_from(["clihelp", "start", "--help"])
        .err()
        .ok_or_else(|| anyhow!("expected a help request"))?;
    ensure!(err.is_display_request());
    let FieldFlagsError::CliParsing(clap_err) = &err else {
        return Err(anyhow!("unexpected error {err}"));
    };
    let rendered = clap_err.to_string();
    ensure!(rendered.contains("--path"), "help was {rendered}");
    ensure!(rendered.contains("-p ~/C"), "help was {rendered}");
    Ok(())
}
