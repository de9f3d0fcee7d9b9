//! Error types for the `gistcli` demo.

use std::io;

use thiserror::Error;

use crate::load::LoadError;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum GistError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Binding or parsing flags failed.
    #[error(transparent)]
    Flags(#[from] fieldflags::FieldFlagsError),
    /// The configuration could not be rendered.
    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Result alias for the demo.
pub type Result<T, E = GistError> = std::result::Result<T, E>;
