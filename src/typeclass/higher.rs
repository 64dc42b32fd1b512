//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records the applied parameter (`Inner`) and the same
//! constructor re-applied to another type (`WithType<B>`), which is enough to
//! state [`Functor`](super::Functor) and [`Monad`](super::Monad) generically.
//!
//! # Example
//!
//! ```rust
//! use microfp::control::Maybe;
//! use microfp::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = empty_like(&Maybe::some(42));
//! assert!(emptied.is_none());
//! ```

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
