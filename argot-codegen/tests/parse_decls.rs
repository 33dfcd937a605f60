use argot_codegen::{expand_option, expand_options, OptionSet};

#[test]
fn block_with_defaults_and_without() {
    let to_parse = "
        /// How many items to preallocate.
        pub ItemCount: usize = 256;
        pub VerboseLogs: bool = false;
        Label: String;
    ";

    let set = syn::parse_str::<OptionSet>(to_parse).unwrap();
    assert_eq!(set.decls.len(), 3);
    assert_eq!(set.decls[0].name.to_string(), "ItemCount");
    assert!(set.decls[0].default.is_some());
    assert_eq!(set.decls[0].attrs.len(), 1);
    assert_eq!(set.decls[2].name.to_string(), "Label");
    assert!(set.decls[2].default.is_none());
}

#[test]
fn empty_block() {
    let set = syn::parse_str::<OptionSet>("").unwrap();
    assert!(set.decls.is_empty());
    assert!(expand_options(&set).unwrap().is_empty());
}

#[test]
fn trailing_semicolon_is_optional() {
    let set = syn::parse_str::<OptionSet>("A: u8; B: u8").unwrap();
    assert_eq!(set.decls.len(), 2);
}

#[test]
fn missing_colon_is_rejected() {
    assert!(syn::parse_str::<OptionSet>("pub ItemCount usize;").is_err());
}

#[test]
fn missing_separator_is_rejected() {
    assert!(syn::parse_str::<OptionSet>("A: u8 B: u8;").is_err());
}

#[test]
fn duplicate_names_are_rejected() {
    let set = syn::parse_str::<OptionSet>("A: u8; B: bool; A: u8;").unwrap();
    let err = expand_options(&set).unwrap_err();
    assert!(err.to_string().contains("`A`"));
}

#[test]
fn same_name_in_separate_blocks_is_fine() {
    let a = syn::parse_str::<OptionSet>("Limit: usize = 1;").unwrap();
    let b = syn::parse_str::<OptionSet>("Limit: usize = 1;").unwrap();
    assert!(expand_options(&a).is_ok());
    assert!(expand_options(&b).is_ok());
}

#[test]
fn expansion_contains_the_expected_items() {
    let set = syn::parse_str::<OptionSet>("pub ItemCount: usize = 256;").unwrap();
    let expanded = expand_option(&set.decls[0]).to_string();

    assert!(expanded.contains("pub struct ItemCount (pub usize)"));
    assert!(expanded.contains("impl argot :: Arg for ItemCount"));
    assert!(expanded.contains("impl argot :: HasDefault for ItemCount"));
    assert!(expanded.contains("impl std :: default :: Default for ItemCount"));
    assert!(expanded.contains("256"));
}

#[test]
fn declarations_without_default_use_the_value_types_default() {
    let set = syn::parse_str::<OptionSet>("Label: String;").unwrap();
    let expanded = expand_option(&set.decls[0]).to_string();
    assert!(expanded.contains("< String as std :: default :: Default > :: default ()"));
}

#[test]
fn distinct_declarations_get_distinct_tags() {
    let set = syn::parse_str::<OptionSet>("A: u8; B: u8;").unwrap();
    let a = expand_option(&set.decls[0]).to_string();
    let b = expand_option(&set.decls[1]).to_string();

    let tag_of = |expanded: &str| {
        let start = expanded.find("type Tag =").unwrap();
        let end = expanded[start..].find(';').unwrap();
        expanded[start..start + end].to_string()
    };
    assert_ne!(tag_of(&a), tag_of(&b));
}

#[test]
fn derive_rejects_generic_types() {
    let input = syn::parse_str::<syn::DeriveInput>("enum Mode<T> { A(T) }").unwrap();
    assert!(argot_codegen::expand_derive_arg(&input).is_err());
}

#[test]
fn derive_with_default_expr() {
    let input = syn::parse_str::<syn::DeriveInput>(
        "#[arg(default = Mode::Fast)] enum Mode { Fast, Slow }",
    )
    .unwrap();
    let expanded = argot_codegen::expand_derive_arg(&input).unwrap().to_string();
    assert!(expanded.contains("impl argot :: Arg for Mode"));
    assert!(expanded.contains("impl argot :: HasDefault for Mode"));
    assert!(expanded.contains("Mode :: Fast"));
}

#[test]
fn derive_without_attr_skips_has_default() {
    let input = syn::parse_str::<syn::DeriveInput>("enum Mode { Fast, Slow }").unwrap();
    let expanded = argot_codegen::expand_derive_arg(&input).unwrap().to_string();
    assert!(expanded.contains("impl argot :: Arg for Mode"));
    assert!(!expanded.contains("HasDefault"));
}

#[test]
fn derive_rejects_unknown_attr_keys() {
    let input =
        syn::parse_str::<syn::DeriveInput>("#[arg(fallback = 3)] struct Level(u8);").unwrap();
    assert!(argot_codegen::expand_derive_arg(&input).is_err());
}

#[test]
fn impl_tuples_covers_every_arity() {
    let expanded = argot_codegen::expand_impl_tuples(4).to_string();
    // one Tuple and one List impl per arity, zero through four
    assert_eq!(expanded.matches("crate :: tuple :: Tuple for").count(), 5);
    assert_eq!(expanded.matches("crate :: tuple :: List for").count(), 5);
    assert!(expanded.contains("(T0 , (T1 , (T2 , (T3 , ()))))"));
}
