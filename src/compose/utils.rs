//! Helper combinators with no behavior of their own.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`ignore`]: drops its argument, adapting a value-producing call to a
//!   unit slot
//! - [`boxed`]: erases a value's type behind `Box<dyn Any>`
//! - [`upcast`]: widens a value through its `Into` conversion

use std::any::Any;

/// Returns the value unchanged.
///
/// `identity` is the unit of composition, and mapping it over a
/// [`Maybe`](crate::control::Maybe) leaves the `Maybe` unchanged.
///
/// # Examples
///
/// ```
/// use microfp::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Discards its argument.
///
/// # Examples
///
/// ```
/// use microfp::compose::ignore;
///
/// let mut log = Vec::new();
/// let mut record = |line: &str| {
///     log.push(line.to_string());
///     log.len()
/// };
///
/// // `for_each` wants a unit-returning callback.
/// ["a", "b"].into_iter().for_each(|line| ignore(record(line)));
/// assert_eq!(log, vec!["a", "b"]);
/// ```
#[inline]
pub fn ignore<T>(value: T) {
    drop(value);
}

/// Erases the static type of `value`.
///
/// The boxed value can be recovered with `downcast`.
///
/// # Examples
///
/// ```
/// use microfp::compose::boxed;
///
/// let erased = boxed(7_u8);
/// assert_eq!(erased.downcast_ref::<u8>(), Some(&7));
/// assert!(erased.downcast_ref::<i32>().is_none());
/// ```
#[inline]
pub fn boxed<T: Any>(value: T) -> Box<dyn Any> {
    Box::new(value)
}

/// Widens `value` into `U` through its `Into` conversion.
///
/// # Examples
///
/// ```
/// use microfp::compose::upcast;
///
/// let wide: i64 = upcast(7_i32);
/// assert_eq!(wide, 7);
///
/// let owned: String = upcast("text");
/// assert_eq!(owned, "text");
/// ```
#[inline]
pub fn upcast<T, U>(value: T) -> U
where
    T: Into<U>,
{
    value.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    #[case(i32::MAX)]
    fn test_identity_returns_argument(#[case] value: i32) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn test_ignore_consumes_value() {
        let shared = std::rc::Rc::new(1);
        let clone = std::rc::Rc::clone(&shared);
        ignore(clone);
        assert_eq!(std::rc::Rc::strong_count(&shared), 1);
    }

    #[rstest]
    fn test_boxed_keeps_concrete_type() {
        let erased = boxed(String::from("payload"));
        assert!(erased.is::<String>());
        assert_eq!(
            erased.downcast::<String>().ok().map(|value| *value),
            Some(String::from("payload"))
        );
    }

    #[rstest]
    fn test_upcast_widens() {
        let widened: f64 = upcast(1.5_f32);
        assert!((widened - 1.5).abs() < f64::EPSILON);
    }
}
