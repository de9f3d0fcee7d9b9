//! Unit tests for the `Introspect` token generator.

use crate::derive::expand;
use anyhow::{Result, anyhow, ensure};
use syn::{DeriveInput, parse_quote};

fn expand_to_string(input: &DeriveInput) -> Result<String> {
    let tokens = expand(input).map_err(|err| anyhow!(err))?;
    Ok(tokens.to_string().replace(' ', ""))
}

#[test]
fn implements_introspect_for_the_struct() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Conf {
            #[fieldflags(value = 33)]
            f_int: i32,
            name: String,
        }
    };
    let tokens = expand_to_string(&input)?;
    ensure!(
        tokens.contains("impl::fieldflags::IntrospectforConf"),
        "missing impl header: {tokens}"
    );
    ensure!(
        tokens.contains("fields.insert(\"f_int\""),
        "missing f_int insert: {tokens}"
    );
    ensure!(
        tokens.contains("(\"value\",\"33\")"),
        "metadata pair not rendered: {tokens}"
    );
    ensure!(
        tokens.contains("::fieldflags::IntoSlot::slot(&mutself.name)?"),
        "slot call not rendered: {tokens}"
    );
    Ok(())
}

#[test]
fn skipped_fields_are_not_inserted() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Conf {
            #[fieldflags(skip)]
            secret: String,
            visible: bool,
        }
    };
    let tokens = expand_to_string(&input)?;
    ensure!(!tokens.contains("\"secret\""), "skipped field rendered");
    ensure!(tokens.contains("\"visible\""), "visible field missing");
    Ok(())
}

#[test]
fn honours_crate_override_and_generics() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[fieldflags(crate = "ff")]
        struct Wrapper<T: ff::Introspect> {
            inner: T,
        }
    };
    let tokens = expand_to_string(&input)?;
    ensure!(
        tokens.contains("impl<T:ff::Introspect>ff::IntrospectforWrapper<T>"),
        "unexpected impl header: {tokens}"
    );
    ensure!(
        !tokens.contains("::fieldflags::"),
        "default crate path leaked: {tokens}"
    );
    Ok(())
}
