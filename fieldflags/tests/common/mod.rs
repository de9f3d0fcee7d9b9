//! Shared fixtures for integration tests.
//!
//! `ConfPile` mirrors a realistic application configuration: versioned
//! root flags, one flag of every kind, a prefix group, a per-database group
//! and a command group with a nested subcommand.

use std::time::Duration;

use fieldflags::{App, Command, Introspect};
use serde::Serialize;

/// Connection settings for one database.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Introspect)]
pub struct CouchDbInfo {
    pub url: String,
    pub user: String,
    pub password: String,
    pub db_name: String,
}

/// Application-wide settings bound under the `app-` prefix.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Introspect)]
pub struct AppSection {
    pub log_dir: String,
    pub postpone_exit: Duration,
    pub env: String,
    pub version1: String,
}

/// Settings of the `start server` command.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Introspect)]
pub struct ServerSection {
    #[fieldflags(value = 8080)]
    pub port: i32,
}

/// Settings of the `start` command.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Introspect)]
pub struct StartSection {
    #[fieldflags(name = "path,p", usage = "-p ~/C", hidden = false, value = "/tmp")]
    pub path: String,
    pub interval: i32,
    pub server: ServerSection,
}

/// The full configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Introspect)]
pub struct ConfPile {
    #[fieldflags(name = "v1", usage = "--v1 0.0.1", hidden = false, envvar = "V1", value = "0.0.1")]
    pub version1: String,
    #[fieldflags(name = "v2", usage = "--v2 0.0.1", hidden = false, value = "0.0.1")]
    pub version2: String,

    pub f_bool: bool,
    pub f_duration: Duration,
    pub f_float64: f64,
    pub f_int64: i64,
    #[fieldflags(value = 33)]
    pub f_int: i32,
    pub f_string: String,
    #[fieldflags(value = 2)]
    pub f_uint: u32,
    #[fieldflags(value = 66)]
    pub f_uint64: u64,

    pub app: AppSection,
    pub primary_db: CouchDbInfo,
    pub start: StartSection,
}

/// An app named `name` with the `start` and `start server` commands.
pub fn gist_app<'a>(name: &str) -> App<'a> {
    App::new(name)
        .with_usage("some app")
        .with_version("0.0.1")
        .with_command(
            Command::new("start")
                .with_usage("starts app")
                .with_subcommand(Command::new("server")),
        )
}
