//! Type class traits shared by the crate's containers.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: Mapping over contained values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing dependent computations
//!
//! [`Maybe`](crate::control::Maybe) and
//! [`PersistentStack`](crate::persistent::PersistentStack) implement all of
//! them; the implementations live next to each type.
//!
//! # Examples
//!
//! ```rust
//! use microfp::control::Maybe;
//! use microfp::typeclass::{Applicative, Monad};
//!
//! fn checked_half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::some(value / 2) } else { Maybe::none() }
//! }
//!
//! let start: Maybe<i32> = <Maybe<()>>::pure(20);
//! assert_eq!(start.flat_map(checked_half).flat_map(checked_half), Maybe::some(5));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
