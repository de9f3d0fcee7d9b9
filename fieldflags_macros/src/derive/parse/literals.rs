//! Literal parsing helpers for derive attributes.

use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Parses a string literal from an attribute.
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Parses a metadata value and returns its string form.
///
/// Strings are taken verbatim. Integer and float literals keep their base-10
/// digits without any type suffix, optionally negated, and booleans become
/// `true`/`false`. This lets `value = 33` and `value = "33"` mean the same.
pub(crate) fn metadata_value(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<String> {
    let expr = meta.value()?.parse::<Expr>()?;
    match &expr {
        Expr::Lit(ExprLit { lit, .. }) => lit_string(lit)
            .ok_or_else(|| syn::Error::new(lit.span(), format!("{key} must be a literal"))),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: lit @ (Lit::Int(_) | Lit::Float(_)),
                ..
            }) => lit_string(lit).map(|digits| format!("-{digits}")).ok_or_else(|| {
                syn::Error::new_spanned(&expr, format!("{key} must be a literal"))
            }),
            _ => Err(syn::Error::new_spanned(
                &expr,
                format!("{key} must be a numeric literal"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &expr,
            format!("{key} must be a string, number or boolean literal"),
        )),
    }
}

fn lit_string(lit: &Lit) -> Option<String> {
    match lit {
        Lit::Str(s) => Some(s.value()),
        Lit::Int(i) => Some(i.base10_digits().to_owned()),
        Lit::Float(f) => Some(f.base10_digits().to_owned()),
        Lit::Bool(b) => Some(b.value.to_string()),
        _ => None,
    }
}
