//! Functor type class - mapping over contained values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use microfp::control::Maybe;
//! use microfp::typeclass::Functor;
//!
//! let transformed = Maybe::some(5).fmap(|n: i32| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//!
//! let untouched = Maybe::<i32>::none().fmap(|n| n.to_string());
//! assert!(untouched.is_none());
//! ```

use super::higher::TypeConstructor;

/// A type whose contents can be transformed while keeping its shape.
///
/// The mapping function is `FnMut` so that multi-element containers such as
/// [`PersistentStack`](crate::persistent::PersistentStack) can call it once
/// per element; single-value containers call it at most once.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every contained value, consuming `self`.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to every contained value by reference.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every contained value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    /// use microfp::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(1).replace("done"), Maybe::some("done"));
    /// ```
    #[inline]
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the contained values, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
