//! Procedural macros for `fieldflags`.
//!
//! `#[derive(Introspect)]` enumerates the named fields of a struct, the
//! `#[fieldflags(...)]` metadata attached to each of them, and hands out
//! exclusive handles into the struct so the binder can turn every field into
//! a command-line flag.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `fieldflags::Introspect`.
///
/// Field-level keys inside `#[fieldflags(...)]` become flag metadata
/// (`name`, `usage`, `envvar`, `hidden`, `value`); `skip` omits the field.
/// The struct-level `crate = "path"` key overrides the runtime crate path.
#[proc_macro_derive(Introspect, attributes(fieldflags))]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests;
