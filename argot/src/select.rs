//! Retrieval of option values from argument packs, by type.
//!
//! These traits operate on the inductive list form of a pack (see
//! [`tuple`](crate::tuple)); most code reaches them through the methods on
//! [`Pack`](crate::Pack) instead. The recursion fully unrolls during
//! monomorphization: what remains at runtime is a move of the matched
//! payload (or of the default), with no branching and no search.
//!
//! All three lookups share one shape. At each list cell the head's
//! [`Arg::Tag`](crate::Arg::Tag) is compared against the target's with
//! [`Cmp`], whose result ([`Hit`] or [`Miss`]) selects the next step
//! through a secondary dispatch trait. A [`Hit`] takes the head and stops,
//! so when the same option appears more than once in a pack, the **first
//! occurrence wins** and later ones are ignored.

use crate::{
    arg::{Arg, HasDefault},
    tag::Cmp,
};

/// Marker: the head of the pack is the target option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hit;

/// Marker: the head of the pack is some other option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Miss;

/// Find option `O` in a pack and produce its value, falling back to `O`'s
/// own declared default when the pack does not contain it.
///
/// Total over every pack of [`Arg`]s: the empty-pack base case
/// default-constructs the value, so `O` need not appear at all. The
/// `O: HasDefault` requirement surfaces only when that base case is
/// reachable, so a pack containing `O` can be searched even if `O` declares
/// no default.
///
/// # Examples
///
/// ```
/// use argot::select::Select;
///
/// argot::options! {
///     ItemCount: usize = 256;
///     VerboseLogs: bool = false;
/// }
///
/// let list = (VerboseLogs(true), (ItemCount(50), ()));
/// assert_eq!(<_ as Select<ItemCount>>::select(list), 50);
///
/// // Absent from the pack: the declared default.
/// assert_eq!(<() as Select<ItemCount>>::select(()), 256);
/// ```
pub trait Select<O: Arg>: Sized {
    /// Produce `O`'s value from this pack.
    fn select(self) -> O::Value;
}

impl<O: HasDefault> Select<O> for () {
    fn select(self) -> O::Value {
        O::default_value()
    }
}

impl<O, Head, Tail> Select<O> for (Head, Tail)
where
    O: Arg,
    Head: Arg,
    (Head::Tag, O::Tag): Cmp<Hit, Miss>,
    (Head, Tail): SelectCase<O, <(Head::Tag, O::Tag) as Cmp<Hit, Miss>>::Result>,
{
    fn select(self) -> O::Value {
        <(Head, Tail) as SelectCase<O, <(Head::Tag, O::Tag) as Cmp<Hit, Miss>>::Result>>::select_case(
            self,
        )
    }
}

/// One step of [`Select`], chosen by the tag comparison's result.
pub trait SelectCase<O: Arg, Case>: Sized {
    /// Take the head or keep searching, per `Case`.
    fn select_case(self) -> O::Value;
}

impl<O: Arg, Tail> SelectCase<O, Hit> for (O, Tail) {
    fn select_case(self) -> O::Value {
        self.0.into_value()
    }
}

impl<O: Arg, Head, Tail: Select<O>> SelectCase<O, Miss> for (Head, Tail) {
    fn select_case(self) -> O::Value {
        self.1.select()
    }
}

/// Find option `O` in a pack and produce its value converted to `R`,
/// falling back to a caller-supplied default when the pack does not contain
/// it.
///
/// Unlike [`Select`] this never consults `O`'s own default, so it works for
/// options that declare none. On a match the value is converted with
/// `Into<R>`; for a wrapper option that is usually the identity
/// (`R = O::Value`), while a scalar option, whose `Value` is itself, is
/// returned directly, without any payload field to unwrap.
///
/// # Examples
///
/// ```
/// use argot::select::SelectOr;
///
/// argot::options! {
///     RetryLimit: u8 = 3;
/// }
///
/// // The matched u8 converts into the u32 the caller asked for.
/// let list = (RetryLimit(5), ());
/// assert_eq!(<_ as SelectOr<RetryLimit, u32>>::select_or(list, 10), 5);
///
/// // No match: the supplied default, unchanged.
/// assert_eq!(<() as SelectOr<RetryLimit, u32>>::select_or((), 10), 10);
/// ```
pub trait SelectOr<O: Arg, R>: Sized {
    /// Produce `O`'s value converted to `R`, or `default`.
    fn select_or(self, default: R) -> R;
}

impl<O: Arg, R> SelectOr<O, R> for () {
    fn select_or(self, default: R) -> R {
        default
    }
}

impl<O, R, Head, Tail> SelectOr<O, R> for (Head, Tail)
where
    O: Arg,
    Head: Arg,
    (Head::Tag, O::Tag): Cmp<Hit, Miss>,
    (Head, Tail): SelectOrCase<O, R, <(Head::Tag, O::Tag) as Cmp<Hit, Miss>>::Result>,
{
    fn select_or(self, default: R) -> R {
        <(Head, Tail) as SelectOrCase<
            O,
            R,
            <(Head::Tag, O::Tag) as Cmp<Hit, Miss>>::Result,
        >>::select_or_case(self, default)
    }
}

/// One step of [`SelectOr`], chosen by the tag comparison's result.
pub trait SelectOrCase<O: Arg, R, Case>: Sized {
    /// Take the head converted to `R` or keep searching, per `Case`.
    fn select_or_case(self, default: R) -> R;
}

impl<O, R, Tail> SelectOrCase<O, R, Hit> for (O, Tail)
where
    O: Arg,
    O::Value: Into<R>,
{
    fn select_or_case(self, _default: R) -> R {
        self.0.into_value().into()
    }
}

impl<O: Arg, R, Head, Tail: SelectOr<O, R>> SelectOrCase<O, R, Miss> for (Head, Tail) {
    fn select_or_case(self, default: R) -> R {
        self.1.select_or(default)
    }
}

/// Whether a pack contains option `O`, as an associated constant.
///
/// Usable in constant contexts, e.g. to gate a `const` on an option's
/// presence.
///
/// # Examples
///
/// ```
/// use argot::select::Contains;
///
/// argot::options! {
///     VerboseLogs: bool = false;
/// }
///
/// assert!(<(VerboseLogs, ()) as Contains<VerboseLogs>>::FOUND);
/// assert!(!<() as Contains<VerboseLogs>>::FOUND);
/// ```
pub trait Contains<O: Arg> {
    /// `true` when the pack has at least one `O`.
    const FOUND: bool;
}

impl<O: Arg> Contains<O> for () {
    const FOUND: bool = false;
}

impl<O, Head, Tail> Contains<O> for (Head, Tail)
where
    O: Arg,
    Head: Arg,
    (Head::Tag, O::Tag): Cmp<Hit, Miss>,
    (Head, Tail): ContainsCase<O, <(Head::Tag, O::Tag) as Cmp<Hit, Miss>>::Result>,
{
    const FOUND: bool =
        <(Head, Tail) as ContainsCase<O, <(Head::Tag, O::Tag) as Cmp<Hit, Miss>>::Result>>::FOUND;
}

/// One step of [`Contains`], chosen by the tag comparison's result.
pub trait ContainsCase<O: Arg, Case> {
    /// Whether the search succeeds from this cell onward.
    const FOUND: bool;
}

impl<O: Arg, Head, Tail> ContainsCase<O, Hit> for (Head, Tail) {
    const FOUND: bool = true;
}

impl<O: Arg, Head, Tail: Contains<O>> ContainsCase<O, Miss> for (Head, Tail) {
    const FOUND: bool = Tail::FOUND;
}

#[cfg(test)]
mod tests {
    use crate as argot;
    use crate::pack::Pack;
    use crate::select::{Contains, Select};
    use static_assertions::assert_impl_all;

    argot::options! {
        Alpha: u32 = 7;
        Beta: bool = false;
        Gamma: i64 = -3;
    }

    assert_impl_all!(Alpha: crate::Arg, crate::HasDefault, Clone);

    include!(concat!(env!("OUT_DIR"), "/permutations.rs"));

    #[test]
    fn first_match_wins() {
        let pack = (Alpha(10), Alpha(20));
        assert_eq!(pack.get::<Alpha>(), 10);

        let pack = (Beta(true), Alpha(10), Gamma(1), Alpha(20));
        assert_eq!(pack.get::<Alpha>(), 10);
    }

    #[test]
    fn select_never_needs_a_default_for_a_present_option() {
        // Lists can be built by hand too; `Select` only demands
        // `HasDefault` when the empty base case is reachable.
        let list = (Alpha(3), ());
        assert_eq!(<_ as Select<Alpha>>::select(list), 3);
    }

    #[test]
    fn select_or_prefers_the_pack_over_the_fallback() {
        let pack = (Alpha(5),);
        assert_eq!(pack.get_or::<Alpha, u32>(9), 5);
        assert_eq!(().get_or::<Alpha, u32>(9), 9);
    }

    #[test]
    fn select_or_converts_into_the_requested_type() {
        let pack = (Alpha(5),);
        let widened: u64 = pack.get_or::<Alpha, u64>(9);
        assert_eq!(widened, 5);
    }

    #[test]
    fn contains_reports_presence() {
        let list_found = <(Beta, (Alpha, ())) as Contains<Alpha>>::FOUND;
        let list_missing = <(Beta, ()) as Contains<Alpha>>::FOUND;
        assert!(list_found);
        assert!(!list_missing);

        assert!((Beta(true), Alpha(1)).has::<Alpha>());
        assert!(!(Beta(true),).has::<Alpha>());
    }

    #[test]
    fn omitted_options_resolve_through_default_too() {
        assert_eq!(Alpha::default().0, 7);
        assert_eq!(Gamma::default().0, -3);
    }

    #[test]
    fn select_or_ignores_later_duplicates() {
        let pack = (Gamma(1), Gamma(2));
        assert_eq!(pack.get_or::<Gamma, i64>(0), 1);
    }
}
