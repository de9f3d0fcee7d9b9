//! Test helpers shared across the fieldflags workspace.
//!
//! Flags resolve environment variables at parse time, so tests that set
//! variables must serialise their changes. The [`env`] module does that.

pub mod env;
