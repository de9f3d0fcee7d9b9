//! Input parsing for the `Introspect` derive macro.
//!
//! Gathers the struct identifier, generics, fields and attribute metadata in
//! one pass so expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// Everything the generator needs to know about the derived struct.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub struct_attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// A named field together with its parsed attributes.
pub(crate) struct ParsedField {
    /// Member used to access the field (`self.#ident`).
    pub ident: syn::Ident,
    /// Declared name with any raw-identifier prefix removed.
    pub name: String,
    pub attrs: FieldAttrs,
}

/// Gathers information from the user-provided struct.
///
/// Structs with named fields and unit structs are accepted; tuple structs,
/// enums and unions are rejected.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Introspect can only be derived for structs",
        ));
    };
    let named = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                data.struct_token,
                "Introspect requires named fields",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        fields.push(ParsedField {
            name: ident.unraw().to_string(),
            attrs: parse_field_attrs(&field.attrs)?,
            ident,
        });
    }

    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        struct_attrs,
        fields,
    })
}
