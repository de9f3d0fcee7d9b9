//! Flag and command model handed to the CLI engine.
//!
//! An [`App`] owns the root flag list and a tree of [`Command`]s. Callers
//! seed the tree with command names and usage text, the binder fills in
//! flags, and the engine turns the finished tree into a parser.

mod command;
mod flag;
mod summary;

pub use command::{App, Command};
pub(crate) use flag::each_flag;
pub use flag::{Flag, FlagKind, TypedFlag};
pub(crate) use flag::split_names;
pub use summary::{AppSummary, CommandSummary, FlagSummary};

#[cfg(test)]
mod tests;
