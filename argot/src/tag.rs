//! Type-level identity tags, represented as bit strings built from [`B0`],
//! [`B1`], and [`End`].
//!
//! Every option type carries a 64-bit tag derived from its declaration site
//! (file, line, column, and name), encoded in its [`Arg::Tag`] associated
//! type. Tags make type equality *decidable* inside the lookup recursion:
//! stable Rust cannot ask "is the head of this pack *not* the target
//! type?", but it can compare two bit strings structurally and branch on
//! the outcome with [`Cmp`].
//!
//! Tags are an implementation detail of the `options!` and `derive(Arg)`
//! macros; nothing here is constructed at runtime.
//!
//! [`Arg::Tag`]: crate::Arg::Tag

use std::marker::PhantomData;

/// The end of a tag's bit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct End;

/// A zero bit, followed by the rest of the bit string.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    Default(bound = "")
)]
pub struct B0<Rest>(PhantomData<fn() -> Rest>);

/// A one bit, followed by the rest of the bit string.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    Default(bound = "")
)]
pub struct B1<Rest>(PhantomData<fn() -> Rest>);

/// A well-formed tag bit string.
///
/// The outermost constructor is bit 0 of the key; [`KEY`](Tag::KEY)
/// reassembles the `u64` the code generator started from. The key is
/// diagnostic only; lookup never consults it, comparing the bit strings
/// structurally instead.
///
/// # Examples
///
/// ```
/// use argot::tag::{Tag, B0, B1, End};
///
/// assert_eq!(<End>::KEY, 0);
/// assert_eq!(<B1<B0<End>>>::KEY, 0b01);
/// assert_eq!(<B0<B1<End>>>::KEY, 0b10);
/// ```
pub trait Tag: sealed::Tag + Sized + Sync + Send + 'static {
    /// The key encoded by this bit string.
    const KEY: u64;
}

impl Tag for End {
    const KEY: u64 = 0;
}

impl<Rest: Tag> Tag for B0<Rest> {
    const KEY: u64 = Rest::KEY << 1;
}

impl<Rest: Tag> Tag for B1<Rest> {
    const KEY: u64 = (Rest::KEY << 1) | 1;
}

/// Compare two equal-length tags and branch on the outcome, at the type
/// level.
///
/// `Result` is `IfEqual` when the two bit strings are identical and
/// `IfUnequal` otherwise. The lookup machinery instantiates the branches
/// with its own markers; any types will do.
///
/// # Examples
///
/// ```
/// use argot::tag::{Cmp, B0, B1, End};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(B1<End>, B1<End>) as Cmp<u8, u16>>::Result, u8);
/// assert_type_eq_all!(<(B0<End>, B1<End>) as Cmp<u8, u16>>::Result, u16);
/// assert_type_eq_all!(<(B0<B1<End>>, B0<B0<End>>) as Cmp<u8, u16>>::Result, u16);
/// ```
pub trait Cmp<IfEqual, IfUnequal>: sealed::Cmp {
    /// The selected branch: `IfEqual` or `IfUnequal`.
    type Result;
}

impl<IfEqual, IfUnequal> Cmp<IfEqual, IfUnequal> for (End, End) {
    type Result = IfEqual;
}

impl<A: Tag, B: Tag, IfEqual, IfUnequal> Cmp<IfEqual, IfUnequal> for (B0<A>, B0<B>)
where
    (A, B): Cmp<IfEqual, IfUnequal>,
{
    type Result = <(A, B) as Cmp<IfEqual, IfUnequal>>::Result;
}

impl<A: Tag, B: Tag, IfEqual, IfUnequal> Cmp<IfEqual, IfUnequal> for (B1<A>, B1<B>)
where
    (A, B): Cmp<IfEqual, IfUnequal>,
{
    type Result = <(A, B) as Cmp<IfEqual, IfUnequal>>::Result;
}

impl<A: Tag, B: Tag, IfEqual, IfUnequal> Cmp<IfEqual, IfUnequal> for (B0<A>, B1<B>) {
    type Result = IfUnequal;
}

impl<A: Tag, B: Tag, IfEqual, IfUnequal> Cmp<IfEqual, IfUnequal> for (B1<A>, B0<B>) {
    type Result = IfUnequal;
}

mod sealed {
    use super::*;

    pub trait Tag: 'static {}
    impl Tag for End {}
    impl<Rest: Tag> Tag for B0<Rest> {}
    impl<Rest: Tag> Tag for B1<Rest> {}

    pub trait Cmp {}
    impl<A: Tag, B: Tag> Cmp for (A, B) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    #[test]
    fn keys_reassemble_bit_by_bit() {
        assert_eq!(<B1<B1<B0<End>>>>::KEY, 0b011);
        assert_eq!(<B0<B0<B1<End>>>>::KEY, 0b100);
    }

    #[test]
    fn comparison_distinguishes_any_differing_bit() {
        struct Same;
        struct Different;

        assert_type_eq_all!(
            <(B1<B0<End>>, B1<B0<End>>) as Cmp<Same, Different>>::Result,
            Same
        );
        // differ in the first bit
        assert_type_eq_all!(
            <(B0<B0<End>>, B1<B0<End>>) as Cmp<Same, Different>>::Result,
            Different
        );
        // differ in the last bit
        assert_type_eq_all!(
            <(B0<B1<End>>, B0<B0<End>>) as Cmp<Same, Different>>::Result,
            Different
        );
    }
}
