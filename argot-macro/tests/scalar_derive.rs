use argot::prelude::*;
use static_assertions::{assert_impl_all, assert_type_eq_all};

#[derive(argot::Arg, Clone, Copy, PartialEq, Debug)]
enum Endian {
    Little,
    Big,
}

#[derive(argot::Arg, Clone, Copy, PartialEq, Debug, Default)]
#[arg(default)]
struct WindowBits(u8);

#[derive(argot::Arg, Clone, Copy, PartialEq, Debug)]
#[arg(default = Dictionary::Builtin)]
enum Dictionary {
    Builtin,
    External,
}

assert_impl_all!(Endian: argot::Arg);
assert_type_eq_all!(<Endian as argot::Arg>::Value, Endian);
assert_impl_all!(WindowBits: argot::HasDefault);
assert_impl_all!(Dictionary: argot::HasDefault);

#[test]
fn scalars_flow_through_get_or_bare() {
    assert_eq!(
        (Endian::Big,).get_or::<Endian, _>(Endian::Little),
        Endian::Big
    );
    assert_eq!(().get_or::<Endian, _>(Endian::Little), Endian::Little);
}

#[test]
fn a_scalar_without_a_default_can_still_be_got_when_present() {
    // `HasDefault` is only demanded when the empty base case is reachable.
    assert_eq!((Endian::Big,).get::<Endian>(), Endian::Big);
}

#[test]
fn arg_default_inherits_the_default_impl() {
    assert_eq!(().get::<WindowBits>(), WindowBits(0));
}

#[test]
fn arg_default_accepts_an_expression() {
    assert_eq!(().get::<Dictionary>(), Dictionary::Builtin);
    assert_eq!(
        (Dictionary::External,).get::<Dictionary>(),
        Dictionary::External
    );
}
