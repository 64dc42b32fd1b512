//! # microfp
//!
//! Small functional programming primitives for Rust.
//!
//! ## Overview
//!
//! - **Optional values**: [`Maybe`](control::Maybe), a presence/absence sum type
//!   with `map`, `bind`, `apply` and lazy fallbacks
//! - **Persistent stack**: [`PersistentStack`](persistent::PersistentStack), an
//!   immutable singly-linked stack with structural sharing
//! - **Combinators**: `identity`, `ignore`, `curry2`..`curry7`,
//!   `partial_apply2`..`partial_apply7`
//! - **Type Classes**: Functor, Applicative and Monad over both types
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `compose`: Function combinators (identity, curry, partial application)
//! - `control`: The `Maybe` type and its iterator helpers
//! - `persistent`: The persistent stack
//! - `arc`: Share stack nodes through `Arc` instead of `Rc`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use microfp::prelude::*;
//!
//! let stack = PersistentStack::of_sequence([1, 2, 3]);
//! let first_even = stack.iter().copied().find_maybe(|value| value % 2 == 0);
//! assert_eq!(first_even, Maybe::some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use microfp::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;
