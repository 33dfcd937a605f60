//! The traits implemented by every option type.

use crate::tag::Tag;

/// A type that can appear in an argument pack and be found by a typed
/// lookup.
///
/// Implementations are generated: by [`options!`](crate::options) for
/// wrapper options, where `Value` is the declared value type and
/// [`into_value`](Arg::into_value) unwraps the payload, and by
/// [`derive(Arg)`](macro@crate::Arg) for scalar options, where
/// `Value = Self` and [`into_value`](Arg::into_value) is the identity.
/// Hand-written impls are possible but discouraged: the generated
/// declaration-site [`Tag`](Arg::Tag) is what guarantees that two
/// independently declared options never match each other's lookups.
pub trait Arg: Sized {
    /// The tag identifying this option's declaration site.
    type Tag: Tag;

    /// The type of the value this option carries.
    type Value;

    /// Consume the option, producing the carried value.
    fn into_value(self) -> Self::Value;
}

/// An [`Arg`] with a declared fallback, produced when the option is absent
/// from a pack.
///
/// Every option declared with [`options!`](crate::options) has one: either
/// the expression written after `=` in its declaration, or the value
/// type's `Default::default()`. Scalar options get one from
/// `#[arg(default)]` or `#[arg(default = expr)]`.
///
/// The bound is only demanded where an absent option can actually be
/// resolved to its default; a lookup over a pack that is known to contain
/// the option never requires it.
pub trait HasDefault: Arg {
    /// The value produced when the option is not supplied.
    fn default_value() -> Self::Value;
}
