//! Maybe type - a value that may be absent.
//!
//! [`Maybe<T>`] is either `Just(value)` or `Nothing`. Every operation
//! returns a new `Maybe`; none of them mutate the receiver.
//!
//! # Examples
//!
//! ```rust
//! use microfp::control::Maybe;
//!
//! let port = Maybe::some("8080")
//!     .bind(|text| Maybe::of_option(text.parse::<u16>().ok()))
//!     .map(|port| port + 1);
//! assert_eq!(port, Maybe::some(8081));
//!
//! let fallback = Maybe::<u16>::none().default_with(|| 80);
//! assert_eq!(fallback, 80);
//! ```
//!
//! # Equality with plain values
//!
//! Absence on the Rust side is `std::option::Option`, so a `Maybe<T>` can be
//! compared directly with an `Option<T>`:
//!
//! ```rust
//! use microfp::control::Maybe;
//!
//! assert_eq!(Maybe::some(3), Some(3));
//! assert_eq!(Maybe::<i32>::none(), None);
//! assert_ne!(Maybe::<i32>::none(), Some(0));
//! assert!(Maybe::some(3).contains(&3));
//! ```

use std::fmt;

use crate::compose::curry2;
use crate::error::EmptyValueAccess;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value of type `T`, or nothing.
///
/// Two `Maybe`s are equal when both are `Nothing` or both hold equal values.
///
/// # Examples
///
/// ```rust
/// use microfp::control::Maybe;
///
/// let present = Maybe::some(42);
/// assert!(present.is_some());
/// assert_eq!(present.value(), Ok(&42));
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert!(absent.is_none());
/// assert!(absent.value().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Just(value)
    }

    /// The absent value. All `none()` values of the same `T` are equal.
    #[inline]
    pub const fn none() -> Self {
        Self::Nothing
    }

    /// Converts Rust's nullable representation: `None` becomes `none()`,
    /// `Some(v)` becomes `some(v)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// let lookup = [("a", 1)].into_iter().find(|(key, _)| *key == "b");
    /// assert!(Maybe::of_option(lookup).is_none());
    /// ```
    #[inline]
    pub fn of_option(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }

    /// Converts back to `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueAccess`] when called on `none()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    /// use microfp::error::EmptyValueAccess;
    ///
    /// assert_eq!(Maybe::some("x").value(), Ok(&"x"));
    /// assert_eq!(Maybe::<&str>::none().value(), Err(EmptyValueAccess));
    /// ```
    #[inline]
    pub const fn value(&self) -> Result<&T, EmptyValueAccess> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(EmptyValueAccess),
        }
    }

    /// Consumes the `Maybe` and returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueAccess`] when called on `none()`.
    #[inline]
    pub fn into_value(self) -> Result<T, EmptyValueAccess> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(EmptyValueAccess),
        }
    }

    /// Returns `true` if a value is present and equals `expected`.
    #[inline]
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Just(value) if value == expected)
    }

    /// Borrows the held value, leaving the receiver in place.
    ///
    /// Mirrors `Option::as_ref`: the result is a new `Maybe` holding a
    /// reference, so this is not an `AsRef` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// let owned = Maybe::some(String::from("text"));
    /// let length = owned.as_ref().map(String::len);
    /// assert_eq!(length, Maybe::some(4));
    /// assert_eq!(owned.value().map(String::as_str), Ok("text"));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Monadic interface
    // =========================================================================

    /// Transforms the held value. `function` is not called on `none()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|n| n * 10), Maybe::some(20));
    /// assert_eq!(Maybe::<i32>::none().map(|n| n * 10), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Monadic bind: threads the held value through a computation that may
    /// itself produce `none()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// let reciprocal = |n: f64| if n == 0.0 { Maybe::none() } else { Maybe::some(1.0 / n) };
    /// assert_eq!(Maybe::some(4.0).bind(reciprocal), Maybe::some(0.25));
    /// assert!(Maybe::some(0.0).bind(reciprocal).is_none());
    /// assert!(Maybe::none().bind(reciprocal).is_none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => binder(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `self` if present, otherwise `fallback`.
    #[inline]
    pub fn or_else(self, fallback: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => fallback,
        }
    }

    /// Returns `self` if present, otherwise the result of `thunk`.
    ///
    /// `thunk` runs only when `self` is `none()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// let kept = Maybe::some(1).or_else_with(|| unreachable!());
    /// assert_eq!(kept, Maybe::some(1));
    ///
    /// let replaced = Maybe::none().or_else_with(|| Maybe::some(2));
    /// assert_eq!(replaced, Maybe::some(2));
    /// ```
    #[inline]
    pub fn or_else_with<F>(self, thunk: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => thunk(),
        }
    }

    /// Unwraps to the held value, or `default` when absent.
    #[inline]
    pub fn default_value(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Unwraps to the held value, or the result of `thunk` when absent.
    ///
    /// `thunk` runs only when `self` is `none()`.
    #[inline]
    pub fn default_with<F>(self, thunk: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => thunk(),
        }
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Iterates over the held value: one element when present, none when
    /// absent. Each call starts a fresh iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// let present = Maybe::some(7);
    /// assert_eq!(present.iter().collect::<Vec<_>>(), vec![&7]);
    /// assert_eq!(present.iter().count(), 1);
    /// assert_eq!(Maybe::<i32>::none().iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_option(),
        }
    }
}

// =============================================================================
// Applicative lifting
// =============================================================================

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The result is present only when both the function and the argument
    /// are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// let double = Maybe::some(|n: i32| n * 2);
    /// assert_eq!(double.apply(Maybe::some(21)), Maybe::some(42));
    /// assert!(double.apply(Maybe::none()).is_none());
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.bind(|function| argument.map(function))
    }

    /// Applies a wrapped binary function to two wrapped arguments.
    ///
    /// The function is curried and applied one argument at a time, so any
    /// absent operand short-circuits to `none()`. The curried stages are
    /// boxed, hence the `'static` bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::control::Maybe;
    ///
    /// let add = Maybe::some(|a: i32, b: i32| a + b);
    /// assert_eq!(add.apply2(Maybe::some(1), Maybe::some(2)), Maybe::some(3));
    /// assert!(add.apply2(Maybe::some(1), Maybe::none()).is_none());
    /// ```
    #[inline]
    pub fn apply2<A, B, C>(self, first: Maybe<A>, second: Maybe<B>) -> Maybe<C>
    where
        A: Clone + 'static,
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        self.map(curry2::<A, B, C, F>).apply(first).apply(second)
    }
}

// =============================================================================
// Free-standing lifts
// =============================================================================

/// Lifts `function` to work on `Maybe` values.
///
/// # Examples
///
/// ```rust
/// use microfp::control::{lift, Maybe};
///
/// let length = lift(|text: &str| text.len());
/// assert_eq!(length(Maybe::some("four")), Maybe::some(4));
/// assert!(length(Maybe::none()).is_none());
/// ```
#[inline]
pub fn lift<A, B, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> B,
{
    move |maybe| maybe.map(&function)
}

/// Lifts `binder` to a function from `Maybe<A>` to `Maybe<B>`.
///
/// # Examples
///
/// ```rust
/// use microfp::control::{lift_bind, Maybe};
///
/// let parse = lift_bind(|text: &str| Maybe::of_option(text.parse::<i32>().ok()));
/// assert_eq!(parse(Maybe::some("12")), Maybe::some(12));
/// assert!(parse(Maybe::some("twelve")).is_none());
/// ```
#[inline]
pub fn lift_bind<A, B, F>(binder: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> Maybe<B>,
{
    move |maybe| maybe.bind(&binder)
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over a reference to the value of a [`Maybe`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An owning iterator over the value of a [`Maybe`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::of_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for Maybe<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        match (self, other) {
            (Self::Just(value), Some(other_value)) => value == other_value,
            (Self::Nothing, None) => true,
            _ => false,
        }
    }
}

impl<T: PartialEq> PartialEq<Maybe<T>> for Option<T> {
    #[inline]
    fn eq(&self, other: &Maybe<T>) -> bool {
        other == self
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Some {value}"),
            Self::Nothing => write!(formatter, "None"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, mut function: F) -> Maybe<C>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => Maybe::Just(function(left, right)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        B: Clone,
        T: FnMut(B) -> Output,
    {
        self.bind(|function| other.map(function))
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B: Clone, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_some_construction() {
        let value = Maybe::some(42);
        assert!(value.is_some());
        assert!(!value.is_none());
        assert_eq!(value.value(), Ok(&42));
    }

    #[rstest]
    fn test_none_construction() {
        let value: Maybe<i32> = Maybe::none();
        assert!(value.is_none());
        assert_eq!(value.value(), Err(EmptyValueAccess));
        assert_eq!(value.into_value(), Err(EmptyValueAccess));
        assert_eq!(value, Maybe::default());
    }

    #[rstest]
    #[case(Some(3), Maybe::some(3))]
    #[case(None, Maybe::none())]
    fn test_of_option(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::of_option(option), expected);
        assert_eq!(Maybe::of_option(option).into_option(), option);
    }

    #[rstest]
    #[case(Maybe::some(1), Some(1), true)]
    #[case(Maybe::some(1), Some(2), false)]
    #[case(Maybe::some(1), None, false)]
    #[case(Maybe::none(), Some(1), false)]
    #[case(Maybe::none(), None, true)]
    fn test_equality_with_option(
        #[case] maybe: Maybe<i32>,
        #[case] option: Option<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(maybe == option, expected);
        assert_eq!(option == maybe, expected);
    }

    #[rstest]
    fn test_contains() {
        assert!(Maybe::some(5).contains(&5));
        assert!(!Maybe::some(5).contains(&6));
        assert!(!Maybe::<i32>::none().contains(&5));
    }

    #[rstest]
    fn test_map_does_not_call_function_on_none() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::none().map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert!(result.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_apply2_short_circuits() {
        let add = Maybe::some(|a: i32, b: i32| a + b);
        assert_eq!(add.apply2(Maybe::some(2), Maybe::some(3)), Maybe::some(5));
        assert!(add.apply2(Maybe::none(), Maybe::some(3)).is_none());
        assert!(add.apply2(Maybe::some(2), Maybe::none()).is_none());

        let missing: Maybe<fn(i32, i32) -> i32> = Maybe::none();
        assert!(missing.apply2(Maybe::some(2), Maybe::some(3)).is_none());
    }

    #[rstest]
    fn test_apply2_with_owned_arguments() {
        let join = Maybe::some(|left: String, right: String| format!("{left}-{right}"));
        let joined = join.apply2(Maybe::some(String::from("a")), Maybe::some(String::from("b")));
        assert_eq!(joined, Maybe::some(String::from("a-b")));
    }

    #[rstest]
    fn test_as_ref_borrows_without_consuming() {
        let owned = Maybe::some(String::from("text"));
        let borrowed: Maybe<&String> = owned.as_ref();
        assert_eq!(borrowed.map(String::len), Maybe::some(4));
        assert!(Maybe::<String>::none().as_ref().is_none());
        assert_eq!(owned, Maybe::some(String::from("text")));
    }

    #[rstest]
    fn test_default_with_is_lazy() {
        let calls = Cell::new(0);
        let thunk = || {
            calls.set(calls.get() + 1);
            0
        };
        assert_eq!(Maybe::some(9).default_with(thunk), 9);
        assert_eq!(calls.get(), 0);
        assert_eq!(Maybe::none().default_with(thunk), 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_into_iter_yields_at_most_one() {
        assert_eq!(Maybe::some("a").into_iter().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(Maybe::<&str>::none().into_iter().len(), 0);
    }

    #[rstest]
    #[case(Maybe::some(3), "Some 3")]
    #[case(Maybe::none(), "None")]
    fn test_display(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(format!("{value}"), expected);
    }

    #[rstest]
    fn test_typeclass_methods_agree_with_inherent_ones() {
        let value = Maybe::some(4);
        assert_eq!(value.fmap(|n| n + 1), value.map(|n| n + 1));
        assert_eq!(value.fmap_ref(|n| n * 2), Maybe::some(8));
        assert_eq!(
            value.flat_map(|n| Maybe::some(n - 1)),
            value.bind(|n| Maybe::some(n - 1))
        );
        assert_eq!(value.then(Maybe::some("next")), Maybe::some("next"));
        assert_eq!(value.product(Maybe::some('x')), Maybe::some((4, 'x')));
    }
}
