//! Folding a pack into a receiving value, one option at a time.
//!
//! This is the other way to consume a pack: instead of looking options up
//! one by one, hand the whole pack to a target that implements [`Accept`]
//! for each option it understands. Options the target has no [`Accept`]
//! impl for are rejected at compile time, so a misspelled or unsupported
//! option at a call site can never be silently dropped.
//!
//! Note the difference from [`Select`](crate::select::Select): the fold
//! visits *every* element in pack order, so if the same option appears
//! twice the later occurrence overwrites the earlier one.

/// A target that can absorb option `O`.
///
/// # Examples
///
/// ```
/// use argot::Pack;
///
/// argot::options! {
///     Capacity: usize = 64;
///     Resizable: bool = true;
/// }
///
/// struct Arena {
///     capacity: usize,
///     resizable: bool,
/// }
///
/// impl argot::Accept<Capacity> for Arena {
///     fn accept(&mut self, option: Capacity) {
///         self.capacity = option.0;
///     }
/// }
///
/// impl argot::Accept<Resizable> for Arena {
///     fn accept(&mut self, option: Resizable) {
///         self.resizable = option.0;
///     }
/// }
///
/// let mut arena = Arena { capacity: 64, resizable: true };
/// (Resizable(false), Capacity(128)).apply_to(&mut arena);
/// assert_eq!(arena.capacity, 128);
/// assert!(!arena.resizable);
/// ```
pub trait Accept<O> {
    /// Absorb one option into `self`.
    fn accept(&mut self, option: O);
}

/// Fold every element of a pack into a target, in pack order.
///
/// Implemented over the inductive list form; use
/// [`Pack::apply_to`](crate::Pack::apply_to) at call sites.
pub trait Apply<Target>: Sized {
    /// Feed each element to `target.accept(..)`, first to last.
    fn apply(self, target: &mut Target);
}

impl<Target> Apply<Target> for () {
    fn apply(self, _target: &mut Target) {}
}

impl<Target, Head, Tail> Apply<Target> for (Head, Tail)
where
    Target: Accept<Head>,
    Tail: Apply<Target>,
{
    fn apply(self, target: &mut Target) {
        target.accept(self.0);
        self.1.apply(target);
    }
}

#[cfg(test)]
mod tests {
    use crate as argot;
    use crate::pack::Pack;

    argot::options! {
        Width: u16 = 80;
        Height: u16 = 24;
    }

    #[derive(Default)]
    struct Geometry {
        width: u16,
        height: u16,
    }

    impl argot::Accept<Width> for Geometry {
        fn accept(&mut self, option: Width) {
            self.width = option.0;
        }
    }

    impl argot::Accept<Height> for Geometry {
        fn accept(&mut self, option: Height) {
            self.height = option.0;
        }
    }

    #[test]
    fn every_element_is_absorbed() {
        let mut geometry = Geometry::default();
        (Height(50), Width(120)).apply_to(&mut geometry);
        assert_eq!(geometry.width, 120);
        assert_eq!(geometry.height, 50);
    }

    #[test]
    fn the_empty_pack_changes_nothing() {
        let mut geometry = Geometry::default();
        ().apply_to(&mut geometry);
        assert_eq!(geometry.width, 0);
        assert_eq!(geometry.height, 0);
    }

    #[test]
    fn later_duplicates_overwrite_earlier_ones() {
        let mut geometry = Geometry::default();
        (Width(1), Width(2)).apply_to(&mut geometry);
        assert_eq!(geometry.width, 2);
    }
}
