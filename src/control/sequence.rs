//! Iterator helpers that produce or consume [`Maybe`] values.
//!
//! - [`try_head`]: the first element, pulling at most one
//! - [`try_find`]: the first element matching a predicate
//! - [`choose`]: a lazy iterator over the present results of a chooser
//!
//! The same operations are available as methods on any iterator through
//! [`MaybeIteratorExt`].
//!
//! # Examples
//!
//! ```rust
//! use microfp::control::{Maybe, MaybeIteratorExt};
//!
//! let tens: Vec<i32> = [1, 2, 3, 4]
//!     .into_iter()
//!     .choose(|n| if n % 2 == 0 { Maybe::some(n * 10) } else { Maybe::none() })
//!     .collect();
//! assert_eq!(tens, vec![20, 40]);
//!
//! assert_eq!([5, 3, 8, 1].into_iter().find_maybe(|n| *n > 4), Maybe::some(5));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::maybe::Maybe;

/// Returns the first element of `source`, or `none()` when it is empty.
///
/// Only the first element is pulled, so infinite sources are fine.
///
/// # Examples
///
/// ```rust
/// use microfp::control::{try_head, Maybe};
///
/// assert_eq!(try_head(1..), Maybe::some(1));
/// assert!(try_head(Vec::<i32>::new()).is_none());
/// ```
#[inline]
pub fn try_head<I>(source: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    Maybe::of_option(source.into_iter().next())
}

/// Returns the first element of `source` satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use microfp::control::{try_find, Maybe};
///
/// assert_eq!(try_find([5, 3, 8, 1], |n| *n > 4), Maybe::some(5));
/// assert!(try_find([1, 2], |n| *n > 4).is_none());
/// ```
#[inline]
pub fn try_find<I, P>(source: I, predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    try_head(source.into_iter().filter(predicate))
}

/// Maps each element through `chooser` and keeps the present results, in
/// source order.
///
/// Nothing is evaluated until the returned iterator is pulled.
///
/// # Examples
///
/// ```rust
/// use microfp::control::{choose, Maybe};
///
/// let numbers: Vec<u8> =
///     choose(["1", "x", "3"], |text| Maybe::of_option(text.parse::<u8>().ok())).collect();
/// assert_eq!(numbers, vec![1, 3]);
/// ```
#[inline]
pub fn choose<I, U, F>(source: I, chooser: F) -> Choose<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Maybe<U>,
{
    Choose {
        source: source.into_iter(),
        chooser,
    }
}

/// Iterator returned by [`choose`].
#[derive(Clone)]
pub struct Choose<I, F> {
    source: I,
    chooser: F,
}

impl<I, U, F> Iterator for Choose<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Maybe<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        for element in self.source.by_ref() {
            if let Maybe::Just(chosen) = (self.chooser)(element) {
                return Some(chosen);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<I, U, F> FusedIterator for Choose<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Maybe<U>,
{
}

impl<I: fmt::Debug, F> fmt::Debug for Choose<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Choose")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Method forms of [`try_head`], [`try_find`] and [`choose`].
pub trait MaybeIteratorExt: Iterator + Sized {
    /// See [`try_head`].
    #[inline]
    fn try_head(self) -> Maybe<Self::Item> {
        try_head(self)
    }

    /// See [`try_find`].
    #[inline]
    fn find_maybe<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        try_find(self, predicate)
    }

    /// See [`choose`].
    #[inline]
    fn choose<U, F>(self, chooser: F) -> Choose<Self, F>
    where
        F: FnMut(Self::Item) -> Maybe<U>,
    {
        choose(self, chooser)
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_try_head_pulls_only_first_element() {
        let pulled = Cell::new(0);
        let source = (1..).inspect(|_| pulled.set(pulled.get() + 1));
        assert_eq!(try_head(source), Maybe::some(1));
        assert_eq!(pulled.get(), 1);
    }

    #[rstest]
    #[case(vec![5, 3, 8, 1], Maybe::some(5))]
    #[case(vec![1, 2, 3], Maybe::none())]
    #[case(vec![], Maybe::none())]
    fn test_try_find(#[case] source: Vec<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(try_find(source, |n| *n > 4), expected);
    }

    #[rstest]
    fn test_choose_is_lazy() {
        let calls = Cell::new(0);
        let mut chosen = choose(1.., |n: i32| {
            calls.set(calls.get() + 1);
            if n % 3 == 0 { Maybe::some(n) } else { Maybe::none() }
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(chosen.next(), Some(3));
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_choose_preserves_order_and_drops_absent() {
        let chosen: Vec<i32> = [1, 2, 3, 4]
            .into_iter()
            .choose(|n| if n % 2 == 0 { Maybe::some(n * 10) } else { Maybe::none() })
            .collect();
        assert_eq!(chosen, vec![20, 40]);
    }

    #[rstest]
    fn test_choose_size_hint_upper_bound() {
        let chosen = choose(vec![1, 2, 3], Maybe::some);
        assert_eq!(chosen.size_hint(), (0, Some(3)));
    }
}
