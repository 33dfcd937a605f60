//! Declaration model and code generation for the `argot` option macros.
//!
//! This crate does all the real work behind `argot::options!`, the
//! `derive(Arg)` macro, and the internal `impl_tuples!` generator, as an
//! ordinary library so that parsing and emission can be unit-tested without
//! a proc-macro context.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote, ToTokens},
    std::{
        collections::HashSet,
        fmt::{self, Display, Formatter},
    },
    syn::{Attribute, DeriveInput, Expr, Ident, Type, Visibility},
    thiserror::Error,
};

pub mod parse;

pub use parse::ArgDefault;

/// A single named option declaration: `pub Name: Type = default;`.
///
/// The default expression is optional; a declaration without one falls back
/// to the value type's `Default` impl.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDecl {
    /// Outer attributes (doc comments, extra derives) passed through to the
    /// generated struct.
    pub attrs: Vec<Attribute>,
    /// Visibility of the generated option type.
    pub vis: Visibility,
    /// The option's name, which becomes the generated type's name.
    pub name: Ident,
    /// The wrapped value type.
    pub value_type: Type,
    /// The declared default, if any.
    pub default: Option<Expr>,
}

/// The contents of one `options! { ... }` invocation: a sequence of
/// semicolon-terminated [`OptionDecl`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet {
    /// The declarations, in source order.
    pub decls: Vec<OptionDecl>,
}

/// A semantic error in a block of option declarations.
///
/// Syntax errors are reported directly by [`syn`] during parsing; the
/// variants here are the checks performed after a block parses.
#[derive(Error, Debug)]
pub enum DeclError {
    /// The same option name appeared twice in one block.
    #[error("option `{name}` is declared more than once in this block")]
    DuplicateName {
        /// The second occurrence of the name.
        name: Ident,
    },
    /// `derive(Arg)` was applied to a generic type. Every instantiation
    /// would share one declaration-site tag while being a distinct type,
    /// which the lookup machinery cannot distinguish.
    #[error("`derive(Arg)` does not support generic types")]
    GenericOption {
        /// The offending type's name.
        name: Ident,
    },
}

impl DeclError {
    /// Convert into a [`syn::Error`] spanning the offending identifier, for
    /// reporting from the proc-macro boundary.
    pub fn to_syn_error(&self) -> syn::Error {
        let span = match self {
            DeclError::DuplicateName { name } => name.span(),
            DeclError::GenericOption { name } => name.span(),
        };
        syn::Error::new(span, self.to_string())
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x100_0000_01b3;

fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Compute the 64-bit key identifying one option declaration.
///
/// The key folds in the declaration's file, line, column, name, and value
/// type, so that two options declared at different sites never share a key
/// even when their names and value types coincide. The key has no meaning
/// beyond distinctness; it is encoded into the generated option's
/// `Arg::Tag` by [`tag_type`].
pub fn site_key(span: Span, name: &str, value_type: &str) -> u64 {
    let start = span.start();
    let mut hash = FNV_OFFSET_BASIS;
    hash = fnv1a(hash, span.file().as_bytes());
    hash = fnv1a(hash, &(start.line as u64).to_le_bytes());
    hash = fnv1a(hash, &(start.column as u64).to_le_bytes());
    hash = fnv1a(hash, name.as_bytes());
    hash = fnv1a(hash, value_type.as_bytes());
    hash
}

/// Render a 64-bit key as a type-level bit string: 64 nested `B0`/`B1`
/// wrappers around `End`, the outermost corresponding to bit 0 of the key.
///
/// The inverse is `argot::tag::Tag::KEY`, which reassembles the `u64` from
/// the nesting.
pub fn tag_type(key: u64) -> TokenStream {
    let mut ty = quote!(argot::tag::End);
    for i in (0..64).rev() {
        ty = if (key >> i) & 1 == 1 {
            quote!(argot::tag::B1<#ty>)
        } else {
            quote!(argot::tag::B0<#ty>)
        };
    }
    ty
}

/// Expand one declaration into the option type and its impls.
///
/// The generated items are exactly:
///
/// - a single-field tuple struct wrapping the value type, deriving `Clone`,
///   with the declaration's attributes and visibility;
/// - `impl argot::Arg` carrying the site tag;
/// - `impl argot::HasDefault` returning the declared default, or the value
///   type's `Default::default()` when no default was declared;
/// - `impl Default`, so that `Name::default()` is the "not supplied" form.
pub fn expand_option(decl: &OptionDecl) -> TokenStream {
    let OptionDecl {
        attrs,
        vis,
        name,
        value_type,
        default,
    } = decl;
    let key = site_key(
        name.span(),
        &name.to_string(),
        &value_type.to_token_stream().to_string(),
    );
    let tag = tag_type(key);
    let default_body = match default {
        Some(expr) => quote!(#expr),
        None => quote!(<#value_type as std::default::Default>::default()),
    };
    quote! {
        #(#attrs)*
        #[derive(Clone)]
        #vis struct #name(pub #value_type);

        impl argot::Arg for #name {
            type Tag = #tag;
            type Value = #value_type;

            fn into_value(self) -> #value_type {
                self.0
            }
        }

        impl argot::HasDefault for #name {
            fn default_value() -> #value_type {
                #default_body
            }
        }

        impl std::default::Default for #name {
            fn default() -> Self {
                #name(<#name as argot::HasDefault>::default_value())
            }
        }
    }
}

/// Expand a whole `options!` block, checking block-level semantics first.
pub fn expand_options(set: &OptionSet) -> Result<TokenStream, DeclError> {
    let mut seen = HashSet::new();
    for decl in &set.decls {
        if !seen.insert(decl.name.to_string()) {
            return Err(DeclError::DuplicateName {
                name: decl.name.clone(),
            });
        }
    }
    Ok(set.decls.iter().map(expand_option).collect())
}

/// Expand `derive(Arg)` for a scalar option: a user-defined type (usually a
/// fieldless enum) that is itself the option value, passed bare in packs.
///
/// Generates `impl argot::Arg` with `Value = Self` and a fresh site tag,
/// plus `impl argot::HasDefault` when a `#[arg(default)]` or
/// `#[arg(default = expr)]` helper attribute is present.
pub fn expand_derive_arg(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(DeclError::GenericOption {
            name: input.ident.clone(),
        }
        .to_syn_error());
    }

    let ident = &input.ident;
    let mut default = None;
    for attr in &input.attrs {
        if attr.path.is_ident("arg") {
            if default.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[arg(...)] attribute",
                ));
            }
            default = Some(attr.parse_args::<ArgDefault>()?);
        }
    }

    let name = ident.to_string();
    let key = site_key(ident.span(), &name, &name);
    let tag = tag_type(key);

    let has_default = match &default {
        None => quote!(),
        Some(ArgDefault::Inherit) => quote! {
            impl argot::HasDefault for #ident {
                fn default_value() -> #ident {
                    <#ident as std::default::Default>::default()
                }
            }
        },
        Some(ArgDefault::Expr(expr)) => quote! {
            impl argot::HasDefault for #ident {
                fn default_value() -> #ident {
                    #expr
                }
            }
        },
    };

    Ok(quote! {
        impl argot::Arg for #ident {
            type Tag = #tag;
            type Value = #ident;

            fn into_value(self) -> #ident {
                self
            }
        }

        #has_default
    })
}

/// Generate `Tuple`/`List` conversion impls for every arity up to and
/// including `max_arity`. Invoked from the main crate's `tuple` module, so
/// the emitted paths are `crate::tuple::*`.
pub fn expand_impl_tuples(max_arity: usize) -> TokenStream {
    (0..=max_arity).map(tuple_conversion_impl).collect()
}

fn tuple_conversion_impl(arity: usize) -> TokenStream {
    let params: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let vars: Vec<Ident> = (0..arity).map(|i| format_ident!("x{}", i)).collect();

    let generics = if arity == 0 {
        quote!()
    } else {
        quote!(<#(#params,)*>)
    };
    let flat = quote!((#(#params,)*));
    let flat_pat = quote!((#(#vars,)*));

    let mut list = quote!(());
    for param in params.iter().rev() {
        list = quote!((#param, #list));
    }
    let mut list_pat = quote!(());
    for var in vars.iter().rev() {
        list_pat = quote!((#var, #list_pat));
    }

    quote! {
        impl #generics crate::tuple::Tuple for #flat {
            type AsList = #list;

            fn into_list(self) -> Self::AsList {
                let #flat_pat = self;
                #list_pat
            }
        }

        impl #generics crate::tuple::List for #list {
            type AsTuple = #flat;

            fn into_tuple(self) -> Self::AsTuple {
                let #list_pat = self;
                #flat_pat
            }
        }
    }
}

impl Display for OptionDecl {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !matches!(self.vis, Visibility::Inherited) {
            write!(f, "{} ", self.vis.to_token_stream())?;
        }
        write!(
            f,
            "{}: {}",
            self.name,
            self.value_type.to_token_stream()
        )?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default.to_token_stream())?;
        }
        Ok(())
    }
}

impl Display for OptionSet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for decl in &self.decls {
            writeln!(f, "{};", decl)?;
        }
        Ok(())
    }
}

#[cfg(feature = "quickcheck")]
impl quickcheck::Arbitrary for OptionDecl {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const NAMES: &[&str] = &["Alpha", "Beta", "Gamma", "ItemCount", "Verbose", "Label"];
        const TYPES: &[&str] = &["usize", "bool", "String", "u8", "(u8, bool)", "Vec<u32>"];
        const DEFAULTS: &[&str] = &["0", "256", "true", "false", "String::new()", "1 + 2"];

        let vis = if bool::arbitrary(g) {
            syn::parse_str("pub").unwrap()
        } else {
            Visibility::Inherited
        };
        let name = Ident::new(g.choose(NAMES).unwrap(), Span::call_site());
        let value_type = syn::parse_str(g.choose(TYPES).unwrap()).unwrap();
        let default = if bool::arbitrary(g) {
            Some(syn::parse_str(g.choose(DEFAULTS).unwrap()).unwrap())
        } else {
            None
        };

        OptionDecl {
            attrs: Vec::new(),
            vis,
            name,
            value_type,
            default,
        }
    }
}

#[cfg(feature = "quickcheck")]
impl quickcheck::Arbitrary for OptionSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % 5;
        OptionSet {
            decls: (0..len).map(|_| OptionDecl::arbitrary(g)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_key_is_deterministic() {
        let a = site_key(Span::call_site(), "ItemCount", "usize");
        let b = site_key(Span::call_site(), "ItemCount", "usize");
        assert_eq!(a, b);
    }

    #[test]
    fn site_key_separates_names_and_types() {
        let span = Span::call_site();
        let base = site_key(span, "ItemCount", "usize");
        assert_ne!(base, site_key(span, "ItemTotal", "usize"));
        assert_ne!(base, site_key(span, "ItemCount", "u32"));
    }

    #[test]
    fn tag_type_encodes_every_bit() {
        let rendered = tag_type(0b1011).to_string();
        let zeros = rendered.matches("B0").count();
        let ones = rendered.matches("B1").count();
        assert_eq!(ones, 3);
        assert_eq!(zeros, 61);
        assert_eq!(rendered.matches("End").count(), 1);
    }

    #[test]
    fn tag_type_outermost_is_bit_zero() {
        // Key 1 has only bit 0 set, which must be the outermost wrapper.
        let rendered = tag_type(1).to_string();
        assert!(rendered.starts_with("argot :: tag :: B1 <"));
        // Key with only bit 63 set puts its B1 right around End.
        let rendered = tag_type(1 << 63).to_string();
        assert!(rendered.contains("B1 < argot :: tag :: End >"));
    }
}
