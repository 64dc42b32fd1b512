//! Applicative type class - combining independent values in a context.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(identity).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use microfp::control::Maybe;
//! use microfp::typeclass::Applicative;
//!
//! let sum = Maybe::some(3).map2(Maybe::some(4), |x, y| x + y);
//! assert_eq!(sum, Maybe::some(7));
//!
//! let missing = Maybe::some(3).map2(Maybe::<i32>::none(), |x, y| x + y);
//! assert!(missing.is_none());
//! ```

use super::functor::Functor;

/// A [`Functor`] that can lift plain values and combine independent contexts.
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    ///
    /// `B: Clone` lets multi-element contexts pair every left value with
    /// every right value.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Applies the contained function(s) to the contained argument(s).
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        B: Clone,
        Self::Inner: FnMut(B) -> Output;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B: Clone>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |left, right| (left, right))
    }
}
