//! `gistcli` entry point: load the optional config file, bind it to flags,
//! parse the command line and act on the selected command.

use std::ffi::OsString;

use fieldflags::{FieldFlagsError, Invocation, is_display_request};
use tracing_subscriber::EnvFilter;

use gistcli::{APP_NAME, ConfPile, LoadOptions, Result};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();
    run().map_err(color_eyre::eyre::Report::from)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<()> {
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from(APP_NAME));
    let options = LoadOptions::from_program(&program, APP_NAME);
    let mut conf: ConfPile = options.load()?;

    let invocation = parse_command_line(&mut conf)?;
    dispatch(&invocation, &conf)
}

fn parse_command_line(conf: &mut ConfPile) -> Result<Invocation> {
    let mut app = gistcli::app();
    let diagnostics = app.bind(conf)?;
    if !diagnostics.is_empty() {
        tracing::warn!(count = diagnostics.len(), "some field attributes were ignored");
    }
    match app.try_run() {
        Ok(invocation) => Ok(invocation),
        Err(FieldFlagsError::CliParsing(err)) if is_display_request(&err) => err.exit(),
        Err(err) => Err(err.into()),
    }
}

fn dispatch(invocation: &Invocation, conf: &ConfPile) -> Result<()> {
    match invocation.path() {
        [] => gistcli::print(conf),
        [start] if start == "start" => {
            tracing::info!(path = %conf.start.path, interval = conf.start.interval, "starting");
            tracing::debug!(?conf, "effective configuration");
            Ok(())
        }
        [start, server] if start == "start" && server == "server" => {
            tracing::info!(port = conf.start.server.port, path = %conf.start.path, "serving");
            tracing::debug!(?conf, "effective configuration");
            Ok(())
        }
        other => {
            tracing::warn!(command = ?other, "no handler for command");
            Ok(())
        }
    }
}
