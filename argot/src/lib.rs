/*!
> **argot (noun):** A specialized, often secret vocabulary shared by a
> particular group, unintelligible to outsiders.
>
> **argot (crate):** Named, optional, defaulted arguments for Rust,
> resolved entirely at compile time.

Positional arguments stop scaling long before functions stop growing: the
fourth `bool` in a call expression means nothing to a reader, reordering
parameters is a silent API break, and "optional with a default" has no
direct expression at all. This crate encodes each option as its own nominal
type instead of a positional slot, so that call sites name what they pass,
pass only what they need, and get every mistake rejected by the type
checker. Concretely:

- call sites are **self-describing**: `ItemCount(50)`, never a bare `50`;
- any subset of options may be supplied, **in any order**;
- omitted options resolve to **declared defaults**;
- misspelled, mistyped, or unsupported options are **compile errors**;
- retrieval costs **nothing at runtime**: the type-level search unrolls
  during monomorphization into a direct field access.

# Quick reference

Most programs begin with `use argot::prelude::*;`.

| To | Write |
| :------------------------------ | :---------------------------------------------------------- |
| Declare options                 | `options! { pub ItemCount: usize = 256; }`                  |
| Accept a pack                   | `fn f<P: Pack>(opts: P) where P::AsList: Select<ItemCount>` |
| Read one option                 | `opts.get::<ItemCount>()`                                   |
| Read with an explicit fallback  | `opts.get_or::<Mode, _>(Mode::Fast)`                        |
| Check presence                  | `opts.has::<ItemCount>()`                                   |
| Fold a pack into a struct       | `opts.apply_to(&mut target)`                                |
| Declare a bare scalar option    | `#[derive(Arg)] enum Mode { ... }`                          |

# Example

```
use argot::prelude::*;

argot::options! {
    /// How many entries the table starts with.
    pub Capacity: usize = 256;
    /// Log every probe.
    pub VerboseLogs: bool = false;
}

fn build_table<P: Pack>(options: P) -> Vec<u64>
where
    P::AsList: Select<Capacity> + Select<VerboseLogs>,
{
    let capacity = options.get::<Capacity>();
    if options.get::<VerboseLogs>() {
        eprintln!("table capacity = {}", capacity);
    }
    Vec::with_capacity(capacity)
}

let defaulted = build_table(());
assert!(defaulted.capacity() >= 256);

let customized = build_table((VerboseLogs(true), Capacity(32)));
assert!(customized.capacity() >= 32);
```

For the full story, including scalar options, explicit fallbacks, and the
builder-style [`apply_to`](Pack::apply_to), start with the
[tutorial](tutorial).

# How uniqueness works

Two options declared with the same name and value type in different places
are different types and never match each other's lookups. The `options!`
macro brands every declaration with a tag derived from its file, line,
column, and name (see [`tag`]); the lookup in [`select`] compares tags
structurally, which is what lets a pack be searched with plain stable-Rust
trait dispatch, no specialization required.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod apply;
pub mod arg;
pub mod select;
pub mod tag;
pub mod tuple;
pub mod tutorial;

mod pack;

pub use apply::Accept;
pub use arg::{Arg, HasDefault};
pub use argot_macro::{options, Arg};
pub use pack::Pack;

/// The prelude module for quickly getting started with argot.
///
/// Designed to be imported as `use argot::prelude::*;`, bringing into scope
/// everything needed to declare options, accept packs, and retrieve values.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::apply::{Accept, Apply};
    #[doc(no_inline)]
    pub use crate::arg::{Arg, HasDefault};
    #[doc(no_inline)]
    pub use crate::select::{Contains, Select, SelectOr};
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple};
    #[doc(no_inline)]
    pub use crate::Pack;
    #[doc(no_inline)]
    pub use argot_macro::{options, Arg};
}
