//! Expansion of `#[derive(Introspect)]`.

mod crate_path;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use parse::{ParsedField, parse_input};

/// Expands the derive into an `Introspect` implementation.
///
/// Every field that is not marked `skip` is inserted into the returned field
/// map under its declared name, paired with its metadata and a slot obtained
/// through `IntoSlot`. Scalar fields become leaf slots; any other field type
/// must itself implement `Introspect` and becomes a nested map.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse_input(input)?;
    let krate = crate_path::resolve(parsed.struct_attrs.crate_path.as_ref());
    let ident = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();
    let inserts = parsed
        .fields
        .iter()
        .filter(|field| !field.attrs.skip)
        .map(|field| field_insert(&krate, field));

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Introspect for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> #krate::FieldFlagsResult<#krate::FieldMap<'_>> {
                #[allow(unused_mut, reason = "structs without fields never insert")]
                let mut fields = #krate::FieldMap::new(::core::any::type_name::<Self>());
                #( #inserts )*
                ::core::result::Result::Ok(fields)
            }
        }
    })
}

fn field_insert(krate: &TokenStream, field: &ParsedField) -> TokenStream {
    let member = &field.ident;
    let name = &field.name;
    let keys = field.attrs.metadata.iter().map(|(key, _)| key);
    let values = field.attrs.metadata.iter().map(|(_, value)| value);
    quote! {
        fields.insert(
            #name,
            #krate::Field::new(
                #krate::Metadata::from_pairs(&[ #( (#keys, #values) ),* ]),
                #krate::IntoSlot::slot(&mut self.#member)?,
            ),
        )?;
    }
}
