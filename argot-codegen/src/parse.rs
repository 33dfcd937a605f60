//! Parsers for the option declaration surface syntax.

use {
    syn::{
        parse::{Parse, ParseStream, Result},
        Attribute, Expr, Ident, Token, Visibility,
    },
    crate::{OptionDecl, OptionSet},
};

impl Parse for OptionDecl {
    fn parse(input: ParseStream) -> Result<Self> {
        // `#[...]* vis Name: Type` with an optional `= default` suffix; the
        // terminating semicolon belongs to the enclosing block.
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse::<Visibility>()?;
        let name = input.parse::<Ident>()?;
        input.parse::<Token![:]>()?;
        let value_type = input.parse::<syn::Type>()?;
        let default = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };
        Ok(OptionDecl {
            attrs,
            vis,
            name,
            value_type,
            default,
        })
    }
}

impl Parse for OptionSet {
    fn parse(input: ParseStream) -> Result<Self> {
        let decls = input
            .parse_terminated::<OptionDecl, Token![;]>(OptionDecl::parse)?
            .into_iter()
            .collect();
        Ok(OptionSet { decls })
    }
}

/// The contents of a `#[arg(...)]` helper attribute on a `derive(Arg)`
/// type.
#[derive(Debug, Clone)]
pub enum ArgDefault {
    /// `#[arg(default)]`: fall back to the type's own `Default` impl.
    Inherit,
    /// `#[arg(default = expr)]`: use the given expression.
    Expr(Expr),
}

impl Parse for ArgDefault {
    fn parse(input: ParseStream) -> Result<Self> {
        let key = input.parse::<Ident>()?;
        if key != "default" {
            return Err(syn::Error::new(
                key.span(),
                "unrecognized #[arg(...)] key; expected `default`",
            ));
        }
        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Ok(ArgDefault::Expr(input.parse()?))
        } else {
            Ok(ArgDefault::Inherit)
        }
    }
}
