//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use microfp::control::Maybe;
//! use microfp::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0).into()
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! ```

use super::applicative::Applicative;

/// An [`Applicative`] whose next step may depend on the previous result.
pub trait Monad: Applicative {
    /// Binds every contained value to a new context and flattens the result.
    ///
    /// `B: Clone` lets contexts with shared structure copy the produced
    /// values into the flattened result.
    fn flat_map<B: Clone, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B: Clone, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the values of `self`.
    #[inline]
    fn then<B: Clone>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }
}
