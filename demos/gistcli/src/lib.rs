//! Library half of the `gistcli` demo so tests can reuse its configuration
//! types, loader and command tree.

pub mod config;
pub mod error;
pub mod load;

use std::io::{self, Write};

use fieldflags::{App, Command};

pub use config::ConfPile;
pub use error::{GistError, Result};
pub use load::LoadOptions;

/// Application name used for help output and derived environment variables.
pub const APP_NAME: &str = "gistcli";

/// Builds the command tree the configuration binds into.
#[must_use]
pub fn app<'a>() -> App<'a> {
    App::new(APP_NAME)
        .with_usage("some app")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_command(
            Command::new("start")
                .with_usage("starts app")
                .with_subcommand(Command::new("server").with_usage("runs the server")),
        )
}

/// Writes `conf` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error when serialisation or the write fails.
pub fn show<W: Write>(out: &mut W, conf: &ConfPile) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, conf)?;
    writeln!(out)?;
    Ok(())
}

/// Writes `conf` to standard output; see [`show`].
///
/// # Errors
///
/// Returns an error when serialisation or the write fails.
pub fn print(conf: &ConfPile) -> Result<()> {
    let mut stdout = io::stdout().lock();
    show(&mut stdout, conf)
}
