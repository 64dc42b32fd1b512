//! Persistent (immutable) data structures.
//!
//! - [`PersistentStack`]: Persistent singly-linked stack
//!
//! # Structural Sharing
//!
//! Pushing onto a stack allocates a single node that points at the existing
//! stack, so every older version stays valid and nothing is copied.
//!
//! # Examples
//!
//! ```rust
//! use microfp::persistent::PersistentStack;
//!
//! let stack = PersistentStack::new().push(3).push(2).push(1);
//! assert_eq!(stack.peek(), Some(&1));
//!
//! // Structural sharing: the original stack is preserved
//! let extended = stack.push(0);
//! assert_eq!(stack.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4);  // New stack
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer shared between stack versions.
///
/// With the `arc` feature (on by default) this is `std::sync::Arc`, so
/// stacks are `Send + Sync` whenever their elements are.
///
/// Without it, this is `std::rc::Rc`: cheaper, but confined to one thread.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod stack;

pub use stack::PersistentStack;
pub use stack::PersistentStackIntoIterator;
pub use stack::PersistentStackIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::{PersistentStack, ReferenceCounter};
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_into_inner_unique() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::into_inner(reference_counter), Some(42));
    }

    #[rstest]
    fn test_reference_counter_into_inner_only_last_owner_receives_value() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::into_inner(reference_counter), None);
        assert_eq!(ReferenceCounter::into_inner(reference_counter_clone), Some(42));
    }

    #[rstest]
    fn test_stack_versions_share_nodes() {
        let base = PersistentStack::of_sequence([1, 2, 3]);
        let first = base.push(10);
        let second = base.push(20);
        assert!(first.tail().ptr_eq(&base));
        assert!(second.tail().ptr_eq(&base));
        assert!(first.tail().ptr_eq(&second.tail()));
    }
}
