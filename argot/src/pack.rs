//! The call-site surface: retrieval methods on argument-pack tuples.

use crate::{
    apply::Apply,
    arg::Arg,
    select::{Contains, Select, SelectOr},
    tuple::Tuple,
};

/// The extension trait giving every argument pack its retrieval methods.
///
/// A pack is any tuple of option values: any subset of the declared
/// options, in any order, each constructed with its payload
/// (`ItemCount(50)`) or omitted entirely. This trait is implemented for all
/// tuples of up to 32 `Clone` elements; the per-option requirements appear
/// as bounds on the individual methods, so a pack only has to satisfy the
/// machinery for the options actually retrieved from it.
///
/// # Examples
///
/// A function taking named, optional, defaulted arguments:
///
/// ```
/// use argot::prelude::*;
///
/// argot::options! {
///     /// How many widgets to spawn.
///     pub ItemCount: usize = 256;
///     /// Whether to narrate what happens.
///     pub VerboseLogs: bool = false;
/// }
///
/// fn spawn_widgets<P: Pack>(_name: &str, options: P) -> (usize, bool)
/// where
///     P::AsList: Select<ItemCount> + Select<VerboseLogs>,
/// {
///     let count = options.get::<ItemCount>();
///     let verbose = options.get::<VerboseLogs>();
///     (count, verbose)
/// }
///
/// assert_eq!(spawn_widgets("defaults", ()), (256, false));
/// assert_eq!(spawn_widgets("count only", (ItemCount(50),)), (50, false));
///
/// // Order never matters:
/// assert_eq!(
///     spawn_widgets("both, reversed", (VerboseLogs(true), ItemCount(100))),
///     (100, true)
/// );
/// ```
///
/// # Counterexamples
///
/// Misuse is rejected before anything runs.
///
/// 1. A value of the wrong type cannot be wrapped in an option:
///
///    ```compile_fail
///    argot::options! {
///        ItemCount: usize = 256;
///    }
///
///    let _ = ItemCount("several");
///    ```
///
/// 2. Retrieval targeting a type that is not a declared option does not
///    compile:
///
///    ```compile_fail
///    use argot::prelude::*;
///
///    argot::options! {
///        ItemCount: usize = 256;
///    }
///
///    struct NotAnOption;
///
///    let _ = (ItemCount(1),).get::<NotAnOption>();
///    ```
///
/// 3. A pack element the receiving type has no [`Accept`](crate::Accept)
///    impl for cannot be [`apply_to`](Pack::apply_to)'d:
///
///    ```compile_fail
///    use argot::prelude::*;
///
///    argot::options! {
///        Capacity: usize = 64;
///        Unrelated: bool = false;
///    }
///
///    struct Arena {
///        capacity: usize,
///    }
///
///    impl argot::Accept<Capacity> for Arena {
///        fn accept(&mut self, option: Capacity) {
///            self.capacity = option.0;
///        }
///    }
///
///    let mut arena = Arena { capacity: 0 };
///    (Capacity(1), Unrelated(true)).apply_to(&mut arena);
///    ```
pub trait Pack: Tuple + Clone {
    /// The value of option `O` in this pack, or `O`'s declared default when
    /// the pack does not contain it.
    ///
    /// When the pack contains `O` more than once, the first occurrence
    /// wins.
    ///
    /// The `HasDefault` machinery is only demanded where the fallback is
    /// actually reachable, so an option with no declared default can still
    /// be `get` from a pack that contains it.
    fn get<O>(&self) -> O::Value
    where
        O: Arg,
        Self::AsList: Select<O>,
    {
        <Self::AsList as Select<O>>::select(self.clone().into_list())
    }

    /// The value of option `O` converted to `R`, or `default` when the
    /// pack does not contain `O`.
    ///
    /// This works for options without a declared default, and for scalar
    /// options (see [`derive(Arg)`](macro@crate::Arg)) it returns the bare
    /// value directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot::prelude::*;
    ///
    /// #[derive(argot::Arg, Clone, Copy, PartialEq, Debug)]
    /// enum Compression {
    ///     Off,
    ///     Fast,
    ///     Best,
    /// }
    ///
    /// let pack = (Compression::Best,);
    /// assert_eq!(pack.get_or::<Compression, _>(Compression::Off), Compression::Best);
    /// assert_eq!(().get_or::<Compression, _>(Compression::Off), Compression::Off);
    /// ```
    fn get_or<O, R>(&self, default: R) -> R
    where
        O: Arg,
        Self::AsList: SelectOr<O, R>,
    {
        <Self::AsList as SelectOr<O, R>>::select_or(self.clone().into_list(), default)
    }

    /// Whether this pack contains option `O`.
    fn has<O>(&self) -> bool
    where
        O: Arg,
        Self::AsList: Contains<O>,
    {
        <Self::AsList as Contains<O>>::FOUND
    }

    /// Feed every element of this pack to `target`, in pack order, via the
    /// target's [`Accept`](crate::Accept) impls.
    ///
    /// Unlike [`get`](Pack::get), this visits every element, so duplicated
    /// options resolve last-write-wins.
    fn apply_to<Target>(self, target: &mut Target)
    where
        Self::AsList: Apply<Target>,
    {
        <Self::AsList as Apply<Target>>::apply(self.into_list(), target)
    }
}

impl<P: Tuple + Clone> Pack for P {}
