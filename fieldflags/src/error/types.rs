//! Primary error enum for the binder and the clap engine.

use thiserror::Error;

/// Errors that abort an operation.
///
/// Per-field problems such as a malformed `value` literal never show up
/// here; they are collected as [`crate::Diagnostics`] instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldFlagsError {
    /// The introspector could not enumerate the fields of a value.
    #[error("failed to enumerate fields of `{type_name}`: {message}")]
    Introspection {
        /// Name of the type being introspected.
        type_name: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Two fields of one struct were registered under the same name.
    #[error("field `{field}` is declared more than once in `{type_name}`")]
    DuplicateField {
        /// Name of the type owning the fields.
        type_name: String,
        /// Repeated field name.
        field: String,
    },

    /// Two flags of one command claim the same switch.
    #[error("flag `{flag}` is declared more than once in command `{command}`")]
    DuplicateFlag {
        /// Command owning the flags.
        command: String,
        /// Switch claimed twice.
        flag: String,
    },

    /// A flag carries no usable name.
    #[error("flag `{flag}` in command `{command}` has no usable name")]
    InvalidFlagName {
        /// Command owning the flag.
        command: String,
        /// Raw flag name as bound.
        flag: String,
    },

    /// Error parsing command-line arguments, including help and version
    /// display requests.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// A parsed value could not be read back with the flag's type.
    #[error("Failed to read parsed value: {0}")]
    Matches(#[from] clap::parser::MatchesError),
}

/// Result alias used throughout the crate.
pub type FieldFlagsResult<T> = Result<T, FieldFlagsError>;

impl FieldFlagsError {
    /// Builds an [`FieldFlagsError::Introspection`] for `type_name`.
    ///
    /// Hand-written [`crate::Introspect`] implementations use this to report
    /// values that cannot be enumerated.
    #[must_use]
    pub fn introspection(type_name: &str, message: impl Into<String>) -> Self {
        Self::Introspection {
            type_name: type_name.to_owned(),
            message: message.into(),
        }
    }

    /// Returns `true` when the error is a help or version display request.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        matches!(self, Self::CliParsing(err) if super::is_display_request(err))
    }
}

impl From<clap::Error> for FieldFlagsError {
    fn from(e: clap::Error) -> Self {
        Self::CliParsing(Box::new(e))
    }
}
