//! Persistent (immutable) stack.
//!
//! This module provides [`PersistentStack`], an immutable singly-linked stack
//! whose versions share structure.
//!
//! # Overview
//!
//! - O(1) `push`, `pop`, `peek`, `len` and `is_empty`
//! - Order-preserving bulk construction with [`PersistentStack::of_sequence`]
//! - Lazy, restartable iteration from the top of the stack down
//!
//! Every operation returns a new stack and leaves the receiver untouched.
//!
//! # Examples
//!
//! ```rust
//! use microfp::persistent::PersistentStack;
//!
//! let stack = PersistentStack::new().push(3).push(2).push(1);
//! assert_eq!(stack.peek(), Some(&1));
//!
//! let (top, rest) = stack.pop().unwrap();
//! assert_eq!(*top, 1);
//! assert_eq!(rest.len(), 2);
//! assert_eq!(stack.len(), 3); // unchanged
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! stack:              1 -> 2 -> 3 -> (empty)
//! stack.push(0):  0 -> [1 -> 2 -> 3 -> (empty)]   // shares every node of `stack`
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;
use crate::error::EmptyStackPop;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// Elements buffered on the call stack by [`PersistentStack::of_sequence`]
/// before it spills to the heap.
const INLINE_BUFFER: usize = 16;

/// Internal node. Nodes are never mutated once shared.
struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) stack.
///
/// The empty stack is the absence of a top node, so
/// [`is_empty`](Self::is_empty) never inspects elements.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `new`         | O(1)       |
/// | `push`        | O(1)       |
/// | `pop`         | O(1)       |
/// | `peek`        | O(1)       |
/// | `len`         | O(1)       |
/// | `of_sequence` | O(n)       |
/// | `==`          | O(n)       |
///
/// # Examples
///
/// ```rust
/// use microfp::persistent::PersistentStack;
///
/// let stack = PersistentStack::of_sequence(["a", "b", "c"]);
/// let collected: Vec<_> = stack.iter().copied().collect();
/// assert_eq!(collected, vec!["a", "b", "c"]);
/// ```
pub struct PersistentStack<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    length: usize,
}

impl<T> PersistentStack<T> {
    /// Creates the empty stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::persistent::PersistentStack;
    ///
    /// let stack: PersistentStack<i32> = PersistentStack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a stack holding one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push(element)
    }

    /// Builds a stack from `source`, consuming all of it immediately.
    ///
    /// Iterating the result yields the elements in the order `source`
    /// produced them: the first element consumed ends up on top.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::of_sequence(1..=3);
    /// assert_eq!(stack.peek(), Some(&1));
    /// assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn of_sequence<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut buffered: SmallVec<[T; INLINE_BUFFER]> = source.into_iter().collect();
        let length = buffered.len();

        // Prepend from the back so the first consumed element lands on top.
        let mut head = None;
        while let Some(element) = buffered.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Returns a new stack with `element` on top.
    ///
    /// The receiver is unchanged and becomes the tail of the new stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::persistent::PersistentStack;
    ///
    /// let base = PersistentStack::singleton(1);
    /// let pushed = base.push(2);
    /// assert_eq!(pushed.peek(), Some(&2));
    /// assert_eq!(base.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn push(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Splits the stack into its top element and the rest.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStackPop`] when the stack is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::error::EmptyStackPop;
    /// use microfp::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push("bottom").push("top");
    /// let (top, rest) = stack.pop()?;
    /// assert_eq!(*top, "top");
    /// assert_eq!(rest.peek(), Some(&"bottom"));
    ///
    /// let empty: PersistentStack<&str> = PersistentStack::new();
    /// assert_eq!(empty.pop().err(), Some(EmptyStackPop));
    /// # Ok::<(), EmptyStackPop>(())
    /// ```
    #[inline]
    pub fn pop(&self) -> Result<(&T, Self), EmptyStackPop> {
        self.uncons().ok_or(EmptyStackPop)
    }

    /// Like [`pop`](Self::pop), but returns `None` for the empty stack.
    #[inline]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns the top element.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the stack below the top element; the empty stack for the
    /// empty stack.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.uncons().map_or_else(Self::new, |(_, tail)| tail)
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` for the empty stack.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if both stacks are the very same version, sharing the
    /// top node (or both empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use microfp::persistent::PersistentStack;
    ///
    /// let base = PersistentStack::of_sequence([1, 2]);
    /// let (_, tail) = base.push(0).pop().unwrap();
    /// assert!(tail.ptr_eq(&base));
    /// assert!(!PersistentStack::of_sequence([1, 2]).ptr_eq(&base));
    /// ```
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    /// Iterates from the top of the stack to the bottom.
    ///
    /// Each call walks the structure afresh; iterators over the same stack
    /// are independent.
    #[inline]
    pub fn iter(&self) -> PersistentStackIterator<'_, T> {
        PersistentStackIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`PersistentStack`].
pub struct PersistentStackIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentStackIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentStackIterator<'_, T> {}

impl<T> FusedIterator for PersistentStackIterator<'_, T> {}

impl<T> Clone for PersistentStackIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the elements of a [`PersistentStack`].
///
/// Nodes may be shared with other stacks, so elements are cloned out.
pub struct PersistentStackIntoIterator<T> {
    stack: PersistentStack<T>,
}

impl<T: Clone> Iterator for PersistentStackIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, tail) = self
            .stack
            .uncons()
            .map(|(head, tail)| (head.clone(), tail))?;
        self.stack = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.length, Some(self.stack.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentStackIntoIterator<T> {}

impl<T: Clone> FusedIterator for PersistentStackIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentStack<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Drop for PersistentStack<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one at a time; the default drop would
        // recurse once per node. `into_inner` hands each node to exactly one
        // of several concurrent droppers.
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::into_inner(node) {
                Some(mut node) => current = node.next.take(),
                None => break,
            }
        }
    }
}

impl<T> Default for PersistentStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of_sequence(iter)
    }
}

impl<T: Clone> IntoIterator for PersistentStack<T> {
    type Item = T;
    type IntoIter = PersistentStackIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentStackIntoIterator { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentStack<T> {
    type Item = &'a T;
    type IntoIter = PersistentStackIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentStack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.ptr_eq(other) || self.iter().zip(other.iter()).all(|(left, right)| left == right)
    }
}

impl<T: Eq> Eq for PersistentStack<T> {}

impl<T: Hash> Hash for PersistentStack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentStack<T> {
    type Inner = T;
    type WithType<B> = PersistentStack<B>;
}

impl<T: Clone> Functor for PersistentStack<T> {
    fn fmap<B, F>(self, function: F) -> PersistentStack<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> PersistentStack<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<T: Clone> Applicative for PersistentStack<T> {
    fn pure<B>(value: B) -> PersistentStack<B> {
        PersistentStack::singleton(value)
    }

    fn map2<B, C, F>(self, other: PersistentStack<B>, mut function: F) -> PersistentStack<C>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        let mut combined = Vec::with_capacity(self.length * other.length);
        for left in &self {
            for right in &other {
                combined.push(function(left.clone(), right.clone()));
            }
        }
        PersistentStack::of_sequence(combined)
    }

    fn apply<B, Output>(self, other: PersistentStack<B>) -> PersistentStack<Output>
    where
        B: Clone,
        T: FnMut(B) -> Output,
    {
        let mut applied = Vec::with_capacity(self.length * other.length);
        for mut function in self {
            applied.extend(other.iter().cloned().map(&mut function));
        }
        PersistentStack::of_sequence(applied)
    }
}

impl<T: Clone> Monad for PersistentStack<T> {
    fn flat_map<B: Clone, F>(self, mut function: F) -> PersistentStack<B>
    where
        F: FnMut(T) -> PersistentStack<B>,
    {
        let mut flattened = Vec::new();
        for element in self {
            flattened.extend(function(element).iter().cloned());
        }
        PersistentStack::of_sequence(flattened)
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentStack<i32>: Send, Sync, Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentStack<i32>: Send, Sync);
