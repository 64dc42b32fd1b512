//! Function combinators.
//!
//! Stateless helpers over plain function values:
//!
//! - [`identity`], [`ignore`], [`boxed`], [`upcast`]
//! - [`curry2`] through [`curry7`]: convert an N-argument function to a chain
//!   of N single-argument functions
//! - [`partial_apply2`] through [`partial_apply7`]: fix the first argument of
//!   an N-argument function
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use microfp::compose::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five = curry2(add)(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use microfp::compose::partial_apply3;
//!
//! fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
//!
//! let non_negative = partial_apply3(clamp, 0);
//! assert_eq!(non_negative(100, -5), 0);
//! assert_eq!(non_negative(100, 42), 42);
//! ```
//!
//! # Laws
//!
//! ```text
//! curryN(f)(a)(b)...(n)       == f(a, b, ..., n)
//! partial_applyN(f, a)(b, ..) == f(a, b, ..)
//! identity(x)                 == x
//! ```

mod curry;
mod partial;
mod utils;

pub use curry::{curry2, curry3, curry4, curry5, curry6, curry7};
pub use partial::{
    partial_apply2, partial_apply3, partial_apply4, partial_apply5, partial_apply6,
    partial_apply7,
};
pub use utils::{boxed, identity, ignore, upcast};
