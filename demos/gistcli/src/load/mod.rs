//! Optional TOML configuration loading.
//!
//! The loader runs before flags are bound: whatever it reads becomes the
//! starting value of the configuration struct, so loaded values show up as
//! flag defaults and the command line and environment still override them.
//!
//! The file name is resolved from explicit [`LoadOptions`] rather than from
//! process-wide hooks. Without an explicit path the loader tries
//! `conf-<app>.toml` and falls back to `app.toml`. A missing file is not an
//! error; a malformed one is.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// File name used when no app-specific file exists.
pub const FALLBACK_FILE: &str = "app.toml";

/// Failure to read or parse an existing configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid TOML for the configuration type.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Where to look for the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    app_name: String,
    config_path: Option<PathBuf>,
    base_dir: PathBuf,
}

impl LoadOptions {
    /// Options for the application called `app_name`, searching the working
    /// directory.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            config_path: None,
            base_dir: PathBuf::from("."),
        }
    }

    /// Options named after the invoked program, as found in `argv[0]`.
    ///
    /// The file stem is used, so `/usr/bin/gistcli` and `gistcli.exe` both
    /// yield `gistcli`. Falls back to `fallback` when `program` has no stem.
    #[must_use]
    pub fn from_program(program: &OsStr, fallback: &str) -> Self {
        let name = Path::new(program)
            .file_stem()
            .map_or_else(|| fallback.to_owned(), |stem| stem.to_string_lossy().into_owned());
        Self::new(name)
    }

    /// Reads exactly `path` instead of searching.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Searches `dir` instead of the working directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Application name used to name the file.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The file the loader will read.
    #[must_use]
    pub fn resolve_path(&self) -> PathBuf {
        if let Some(path) = &self.config_path {
            return path.clone();
        }
        let named = self.base_dir.join(format!("conf-{}.toml", self.app_name));
        if named.is_file() {
            named
        } else {
            self.base_dir.join(FALLBACK_FILE)
        }
    }

    /// Loads the configuration, or its default when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load<T>(&self) -> Result<T, LoadError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.resolve_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "configuration file not found, using defaults");
                return Ok(T::default());
            }
            Err(source) => return Err(LoadError::Read { path, source }),
        };
        let conf = toml::from_str(&text).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(conf)
    }
}

#[cfg(test)]
mod tests;
