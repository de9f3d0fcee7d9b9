//! The demo configuration.
//!
//! Every struct deserialises from TOML with missing keys left at their
//! defaults, so a partial file only overrides what it names. Durations use
//! the same literals as the command line (`"1h30m"`).

use std::time::Duration;

use fieldflags::Introspect;
use serde::{Deserialize, Serialize};

/// One database connection.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Introspect)]
#[serde(default)]
pub struct CouchDbInfo {
    /// Server URL.
    pub url: String,
    /// Login name.
    pub user: String,
    /// Login secret.
    #[fieldflags(hidden)]
    pub password: String,
    /// Database name.
    pub db_name: String,
}

/// Process-wide settings, bound as `--app-*` flags.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Introspect)]
#[serde(default)]
pub struct AppSection {
    /// Directory for log files.
    pub log_dir: String,
    /// Grace period before exit.
    #[serde(with = "duration_literal")]
    pub postpone_exit: Duration,
    /// Deployment environment name.
    pub env: String,
    /// Build version.
    pub version1: String,
}

/// Settings of `start server`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Introspect)]
#[serde(default)]
pub struct ServerSection {
    /// Listen port.
    #[fieldflags(value = 8080, usage = "listen port")]
    pub port: i32,
}

/// Settings of `start`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Introspect)]
#[serde(default)]
pub struct StartSection {
    /// Working directory.
    #[fieldflags(name = "path,p", usage = "-p ~/C", hidden = false, value = "/tmp")]
    pub path: String,
    /// Polling interval in seconds.
    pub interval: i32,
    /// Server settings.
    pub server: ServerSection,
}

/// The full demo configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Introspect)]
#[serde(default)]
pub struct ConfPile {
    /// Primary version string.
    #[fieldflags(name = "v1", usage = "--v1 0.0.1", hidden = false, envvar = "V1", value = "0.0.1")]
    pub version1: String,
    /// Secondary version string.
    #[fieldflags(name = "v2", usage = "--v2 0.0.1", hidden = false, value = "0.0.1")]
    pub version2: String,

    /// Sample boolean.
    pub f_bool: bool,
    /// Sample duration.
    #[serde(with = "duration_literal")]
    pub f_duration: Duration,
    /// Sample float.
    pub f_float64: f64,
    /// Sample 64-bit integer.
    pub f_int64: i64,
    /// Sample integer.
    #[fieldflags(value = 33)]
    pub f_int: i32,
    /// Sample string.
    pub f_string: String,
    /// Sample unsigned integer.
    #[fieldflags(value = 2)]
    pub f_uint: u32,
    /// Sample 64-bit unsigned integer.
    #[fieldflags(value = 66)]
    pub f_uint64: u64,

    /// Process-wide settings.
    pub app: AppSection,
    /// Primary database.
    pub primary_db: CouchDbInfo,
    /// `start` command settings.
    pub start: StartSection,
}

/// Serde adapter storing a [`Duration`] as a duration literal.
mod duration_literal {
    use std::time::Duration;

    use fieldflags::value::{format_duration, parse_duration};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_duration(*value))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_duration(&raw).map_err(de::Error::custom)
    }
}
