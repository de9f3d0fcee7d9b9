//! Error types produced while introspecting, binding and parsing.

mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{FieldFlagsError, FieldFlagsResult};
