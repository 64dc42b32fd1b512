//! Control structures for possibly-absent values.
//!
//! - [`Maybe`]: a value of type `T`, or nothing, with `map`, `bind`,
//!   `apply`, `apply2` and lazy fallbacks
//! - [`lift`], [`lift_bind`]: turn plain functions into functions on `Maybe`
//! - [`try_head`], [`try_find`], [`choose`] and [`MaybeIteratorExt`]: bridges
//!   between iterators and `Maybe`
//!
//! # Examples
//!
//! ```rust
//! use microfp::control::{choose, Maybe};
//!
//! fn parse_port(text: &str) -> Maybe<u16> {
//!     text.parse::<u16>().ok().into()
//! }
//!
//! let ports: Vec<u16> = choose(["80", "http", "443"], parse_port).collect();
//! assert_eq!(ports, vec![80, 443]);
//!
//! let configured = parse_port("none").or_else(Maybe::some(8080));
//! assert_eq!(configured, Maybe::some(8080));
//! ```

mod maybe;
mod sequence;

pub use maybe::{IntoIter, Iter, Maybe, lift, lift_bind};
pub use sequence::{Choose, MaybeIteratorExt, choose, try_find, try_head};
