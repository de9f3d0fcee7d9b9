//! Parsing utilities for the `Introspect` derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Token, parenthesized};

mod input;
mod literals;

pub(crate) use input::{ParsedField, parse_input};
use literals::{lit_str, metadata_value};

/// Struct-level attributes recognised by `#[derive(Introspect)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[fieldflags(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `::fieldflags::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Introspect)]`.
///
/// - `skip` omits the field from the generated field map.
/// - Every other `key = literal` pair is recorded verbatim as metadata, in
///   declaration order. The runtime decides which keys it understands.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub metadata: Vec<(String, String)>,
}

impl FieldAttrs {
    fn push(&mut self, key: String, value: String, meta: &ParseNestedMeta) -> syn::Result<()> {
        if self.metadata.iter().any(|(existing, _)| *existing == key) {
            return Err(meta.error(format!("duplicate `{key}` key")));
        }
        self.metadata.push((key, value));
        Ok(())
    }
}

/// Iterate all `#[fieldflags(...)]` attributes once and apply a callback.
fn parse_fieldflags<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("fieldflags")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[fieldflags(...)]` metadata applied to a struct.
///
/// Only `crate` is recognised. Unknown keys are ignored so callers keep
/// compiling when new struct-level attributes appear.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_fieldflags(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[fieldflags(...)]` attributes.
///
/// `skip` (optionally `skip = true`) removes the field. A bare `hidden` is
/// shorthand for `hidden = "true"`. Any other key must be followed by a
/// literal, which is stored as metadata in its string form. Repeating a key
/// on the same field is rejected.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_fieldflags(attrs, |meta| {
        let Some(ident) = meta.path.get_ident() else {
            return Err(meta.error("expected a plain key such as `name` or `usage`"));
        };
        let key = ident.to_string();
        if key == "skip" {
            out.skip = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<syn::LitBool>()?.value
            } else {
                true
            };
            return Ok(());
        }
        if !meta.input.peek(Token![=]) {
            if key == "hidden" {
                return out.push(key, "true".to_owned(), meta);
            }
            return Err(meta.error(format!("expected `{key} = <literal>`")));
        }
        let value = metadata_value(meta, &key)?;
        out.push(key, value, meta)
    })?;
    Ok(out)
}
