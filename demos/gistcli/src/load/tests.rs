//! Tests for configuration loading.

use std::ffi::OsStr;
use std::fs;
use std::time::Duration;

use anyhow::{Result, ensure};
use rstest::rstest;
use tempfile::TempDir;

use super::*;
use crate::ConfPile;

#[rstest]
#[case("/usr/local/bin/gistcli", "gistcli")]
#[case("gistcli.exe", "gistcli")]
#[case("./tools/gist-cli", "gist-cli")]
#[case("", "fallback")]
fn app_name_is_the_program_stem(#[case] program: &str, #[case] expected: &str) {
    let options = LoadOptions::from_program(OsStr::new(program), "fallback");
    assert_eq!(options.app_name(), expected);
}

#[test]
fn prefers_the_app_specific_file() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("conf-gistcli.toml"), "f_int = 1\n")?;
    fs::write(dir.path().join("app.toml"), "f_int = 2\n")?;
    let options = LoadOptions::new("gistcli").with_base_dir(dir.path());
    ensure!(options.resolve_path() == dir.path().join("conf-gistcli.toml"));
    let conf: ConfPile = options.load()?;
    ensure!(conf.f_int == 1);
    Ok(())
}

#[test]
fn falls_back_to_app_toml() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("app.toml"), "f_string = \"shared\"\n")?;
    let options = LoadOptions::new("other").with_base_dir(dir.path());
    let conf: ConfPile = options.load()?;
    ensure!(conf.f_string == "shared");
    Ok(())
}

#[test]
fn missing_file_yields_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let conf: ConfPile = LoadOptions::new("gistcli").with_base_dir(dir.path()).load()?;
    ensure!(conf == ConfPile::default());
    Ok(())
}

#[test]
fn malformed_file_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "f_int = \"not a number\"\n")?;
    let result = LoadOptions::new("gistcli").with_config_path(&path).load::<ConfPile>();
    ensure!(matches!(result, Err(LoadError::Parse { .. })));
    Ok(())
}

#[test]
fn nested_sections_and_durations_load() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("full.toml");
    fs::write(
        &path,
        concat!(
            "f_duration = \"1h30m\"\n",
            "[app]\n",
            "postpone_exit = \"250ms\"\n",
            "[primary_db]\n",
            "url = \"http://couch:5984\"\n",
            "[start.server]\n",
            "port = 9000\n",
        ),
    )?;
    let conf: ConfPile = LoadOptions::new("gistcli").with_config_path(&path).load()?;
    ensure!(conf.f_duration == Duration::from_secs(5_400));
    ensure!(conf.app.postpone_exit == Duration::from_millis(250));
    ensure!(conf.primary_db.url == "http://couch:5984");
    ensure!(conf.start.server.port == 9000);
    ensure!(conf.start.path.is_empty());
    Ok(())
}
