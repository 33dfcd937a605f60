//! Conversions back and forth between flat tuples and their corresponding
//! inductive list structures.
//!
//! Lookup recurses over an inductive head/tail list, but call sites write
//! argument packs as flat tuples, for readability. The traits here convert
//! between the two equivalent representations, at the type level and at the
//! value level.
//!
//! At present, packs of up to 32 options are supported.

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Restructure the tuple's values into the list form.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Restructure the list's values into the flat tuple form.
    fn into_tuple(self) -> Self::AsTuple;
}

argot_macro::impl_tuples!(32);
