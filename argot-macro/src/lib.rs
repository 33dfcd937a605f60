//! Procedural macros for the `argot` crate.
//!
//! These are thin wrappers: all parsing and code generation lives in
//! `argot-codegen`, where it can be tested as an ordinary library. Users
//! should depend on `argot` itself, which re-exports everything here.

extern crate proc_macro;

use {proc_macro::TokenStream, syn::parse_macro_input};

/// Declare a block of named option types.
///
/// Each declaration is `vis Name: Type;` or `vis Name: Type = default;`,
/// and produces a distinct single-field wrapper type implementing
/// `argot::Arg` and `argot::HasDefault`. See the `argot` crate
/// documentation for the full story.
#[proc_macro]
pub fn options(input: TokenStream) -> TokenStream {
    let set = parse_macro_input!(input as argot_codegen::OptionSet);
    match argot_codegen::expand_options(&set) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_syn_error().to_compile_error().into(),
    }
}

/// Derive `argot::Arg` for a scalar option: a type which is itself the
/// option value and is passed bare in argument packs.
///
/// An optional `#[arg(default)]` or `#[arg(default = expr)]` attribute also
/// derives `argot::HasDefault`.
#[proc_macro_derive(Arg, attributes(arg))]
pub fn derive_arg(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match argot_codegen::expand_derive_arg(&input) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Generate `Tuple`/`List` conversion impls for every arity up to the given
/// maximum. Used inside `argot`'s `tuple` module; the generated impls refer
/// to `crate::tuple::*` and are not usable from other crates.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as syn::LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => argot_codegen::expand_impl_tuples(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
