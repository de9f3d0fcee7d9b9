//! Bind the fields of a configuration struct to command-line flags.
//!
//! Derive [`Introspect`] on a struct, seed an [`App`] with the commands the
//! program understands, and call [`App::bind`]. Every scalar field becomes
//! a flag whose name, help text, environment variable and default come from
//! naming conventions and optional `#[fieldflags(...)]` metadata. A nested
//! struct whose field name matches a command binds into that command; any
//! other nested struct contributes prefixed flags to the enclosing list.
//! [`App::try_run_from`] hands the tree to `clap` and writes the parsed
//! values straight into the struct.
//!
//! ```
//! use std::time::Duration;
//!
//! use fieldflags::{App, Command, Introspect};
//!
//! #[derive(Introspect, Default)]
//! struct Server {
//!     #[fieldflags(value = 8080)]
//!     port: i32,
//! }
//!
//! #[derive(Introspect, Default)]
//! struct Start {
//!     #[fieldflags(name = "path,p", usage = "directory to serve", value = "/tmp")]
//!     path: String,
//!     interval: Duration,
//!     server: Server,
//! }
//!
//! #[derive(Introspect, Default)]
//! struct Conf {
//!     verbose: bool,
//!     start: Start,
//! }
//!
//! let mut conf = Conf::default();
//! let mut app = App::new("gistcli")
//!     .with_command(Command::new("start").with_subcommand(Command::new("server")));
//! let diagnostics = app.bind(&mut conf)?;
//! assert!(diagnostics.is_empty());
//!
//! let invocation =
//!     app.try_run_from(["gistcli", "--verbose", "start", "--interval", "5s", "server"])?;
//! assert!(invocation.is(&["start", "server"]));
//! assert!(conf.verbose);
//! assert_eq!(conf.start.path, "/tmp");
//! assert_eq!(conf.start.interval, Duration::from_secs(5));
//! assert_eq!(conf.start.server.port, 8080);
//! # Ok::<(), fieldflags::FieldFlagsError>(())
//! ```

extern crate self as fieldflags;

pub use fieldflags_macros::Introspect;

mod binder;
mod diagnostics;
mod engine;
mod error;
mod introspect;
mod model;
pub mod value;

pub use binder::build;
pub use diagnostics::{Attribute, Diagnostic, Diagnostics};
pub use engine::Invocation;
pub use error::{FieldFlagsError, FieldFlagsResult, is_display_request};
pub use introspect::{Field, FieldMap, Introspect, IntoSlot, Metadata, Slot, keys};
pub use model::{
    App, AppSummary, Command, CommandSummary, Flag, FlagKind, FlagSummary, TypedFlag,
};
pub use value::{FlagValue, ValueError};
