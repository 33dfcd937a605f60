//! A tutorial-style tour of the crate.
//!
//! This module contains no code; it is a guided walk through declaring
//! options, passing them, and consuming them, in roughly the order a new
//! user needs each piece.
//!
//! # Declaring options
//!
//! An option is a named, typed, optional parameter. Each one is declared
//! once, usually in a small module shared by the APIs that accept it, with
//! the [`options!`](crate::options) macro:
//!
//! ```
//! pub mod opt {
//!     argot::options! {
//!         /// How many worker slots to reserve.
//!         pub Workers: usize = 4;
//!         /// A human-readable label for diagnostics.
//!         pub Label: String;
//!     }
//! }
//! # fn main() {}
//! ```
//!
//! Every declaration produces a distinct single-field wrapper type. The
//! value after `=` is the option's default; a declaration without one (like
//! `Label` above) defaults to the value type's `Default::default()`, the
//! zero or empty value.
//!
//! Grouping declarations in a module like `opt` keeps short names from
//! cluttering the caller's namespace while leaving call sites readable:
//! `opt::Workers(8)`.
//!
//! # Passing options
//!
//! A call site passes a *pack*: a tuple containing any subset of the
//! declared options, in any order. The accepting function is generic over
//! the pack and states which options it will read:
//!
//! ```
//! use argot::prelude::*;
//!
//! pub mod opt {
//!     argot::options! {
//!         pub Workers: usize = 4;
//!         pub Pinned: bool = false;
//!     }
//! }
//!
//! fn start_pool<P: Pack>(options: P) -> (usize, bool)
//! where
//!     P::AsList: Select<opt::Workers> + Select<opt::Pinned>,
//! {
//!     (options.get::<opt::Workers>(), options.get::<opt::Pinned>())
//! }
//!
//! assert_eq!(start_pool(()), (4, false));
//! assert_eq!(start_pool((opt::Workers(16),)), (16, false));
//! assert_eq!(start_pool((opt::Pinned(true), opt::Workers(16))), (16, true));
//! ```
//!
//! Three things to notice:
//!
//! - the empty pack `()` is a perfectly good pack; every option falls back
//!   to its default;
//! - a one-option pack is a one-element tuple, so it needs the trailing
//!   comma: `(opt::Workers(16),)`;
//! - the pack `(Pinned, Workers)` retrieves exactly like
//!   `(Workers, Pinned)`; position carries no meaning.
//!
//! If the same option is passed twice, retrieval takes the first
//! occurrence and ignores the rest. Nothing stops a call site from doing
//! so; it is simply pointless.
//!
//! # Explicit fallbacks and scalar options
//!
//! [`get`](crate::Pack::get) uses the option's own declared default.
//! When the fallback should be chosen by the *reader* of the pack instead,
//! [`get_or`](crate::Pack::get_or) takes it as an argument, and also
//! accepts *scalar* options, types that are themselves the value and are
//! passed bare, without a wrapper:
//!
//! ```
//! use argot::prelude::*;
//!
//! #[derive(argot::Arg, Clone, Copy, PartialEq, Debug)]
//! enum OnConflict {
//!     Abort,
//!     Replace,
//!     Skip,
//! }
//!
//! fn insert<P: Pack>(options: P) -> OnConflict
//! where
//!     P::AsList: SelectOr<OnConflict, OnConflict>,
//! {
//!     options.get_or::<OnConflict, _>(OnConflict::Abort)
//! }
//!
//! assert_eq!(insert(()), OnConflict::Abort);
//! assert_eq!(insert((OnConflict::Skip,)), OnConflict::Skip);
//! ```
//!
//! `get_or` converts the matched value into the requested result type with
//! `Into`, so a `u8`-valued option can be read as a `u64` without
//! ceremony.
//!
//! # Builder-style consumption
//!
//! For constructors that want to absorb every supplied option into fields,
//! looking options up one by one inverts awkwardly. The
//! [`apply_to`](crate::Pack::apply_to) fold hands each element to an
//! [`Accept`](crate::Accept) impl on the target instead:
//!
//! ```
//! use argot::prelude::*;
//!
//! argot::options! {
//!     pub Capacity: usize = 64;
//!     pub Zeroed: bool = false;
//! }
//!
//! pub struct Buffer {
//!     capacity: usize,
//!     zeroed: bool,
//! }
//!
//! impl Accept<Capacity> for Buffer {
//!     fn accept(&mut self, option: Capacity) {
//!         self.capacity = option.0;
//!     }
//! }
//!
//! impl Accept<Zeroed> for Buffer {
//!     fn accept(&mut self, option: Zeroed) {
//!         self.zeroed = option.0;
//!     }
//! }
//!
//! impl Buffer {
//!     pub fn new<P: Pack>(options: P) -> Self
//!     where
//!         P::AsList: Apply<Self>,
//!     {
//!         let mut buffer = Buffer { capacity: 64, zeroed: false };
//!         options.apply_to(&mut buffer);
//!         buffer
//!     }
//! }
//!
//! let buffer = Buffer::new((Zeroed(true),));
//! assert!(buffer.zeroed);
//! assert_eq!(buffer.capacity, 64);
//! ```
//!
//! The compile-time checking is strict in a useful direction: passing an
//! option the target has no [`Accept`](crate::Accept) impl for fails to
//! compile, so a caller can never hand `Buffer::new` an option it would
//! silently ignore. Note that `apply_to` visits every element in pack
//! order, so a duplicated option resolves last-write-wins there, the
//! opposite end of the pack from `get`'s first-match-wins.
//!
//! # Why two identically-named options never collide
//!
//! Declarations are nominal types, so Rust already keeps
//! `network::opt::Timeout` and `disk::opt::Timeout` apart. The interesting
//! question is how lookup *finds* an option inside a heterogeneous pack at
//! all: stable Rust has no way to say "this impl applies when the head is
//! **not** the target". The `options!` macro therefore brands each
//! declaration with a 64-bit tag (a hash of file, line, column, and name,
//! encoded as a type-level bit string in [`tag`](crate::tag)) and lookup
//! compares tags structurally with [`Cmp`](crate::tag::Cmp), which is a
//! *positive* fact available to ordinary trait dispatch. Matching is
//! first-match-wins down the pack, and an exhausted pack resolves to the
//! default.
//!
//! None of this survives to runtime. Once monomorphized, a `get` is a move
//! of one field out of the pack, and an omitted option is a call to its
//! default expression.
