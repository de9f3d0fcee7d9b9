//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[fieldflags(crate = "...")]` attribute value into
//! the tokens that prefix every runtime path in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::fieldflags` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::fieldflags }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use anyhow::{Context, Result, ensure};
    use rstest::rstest;

    #[rstest]
    #[case::default(None, "::fieldflags")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("vendored::fieldflags"), "vendored::fieldflags")]
    fn resolve_produces_expected_tokens(
        #[case] input: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = input
            .map(syn::parse_str::<syn::Path>)
            .transpose()
            .context("valid path")?;
        let tokens = resolve(parsed.as_ref());
        ensure!(
            tokens.to_string().replace(' ', "") == expected,
            "unexpected tokens: {tokens}"
        );
        Ok(())
    }
}
