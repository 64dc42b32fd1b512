//! Error types for precondition violations.
//!
//! Every operation in this crate is total except two: reading the value of
//! an empty [`Maybe`](crate::control::Maybe) and popping an empty
//! [`PersistentStack`](crate::persistent::PersistentStack). Both report a
//! caller that skipped the `is_some` / `is_empty` check, and both come back
//! as `Err` values at the call site.

/// Returned when the value of an empty `Maybe` is requested.
///
/// # Examples
///
/// ```rust
/// use microfp::error::EmptyValueAccess;
///
/// assert_eq!(
///     format!("{}", EmptyValueAccess),
///     "cannot access the value of an empty Maybe"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyValueAccess;

impl std::fmt::Display for EmptyValueAccess {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot access the value of an empty Maybe")
    }
}

impl std::error::Error for EmptyValueAccess {}

/// Returned when popping the empty stack.
///
/// # Examples
///
/// ```rust
/// use microfp::error::EmptyStackPop;
///
/// assert_eq!(format!("{}", EmptyStackPop), "cannot pop from an empty stack");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyStackPop;

impl std::fmt::Display for EmptyStackPop {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot pop from an empty stack")
    }
}

impl std::error::Error for EmptyStackPop {}

/// Either of the crate's errors, so mixed call sites can use `?` once.
///
/// # Examples
///
/// ```rust
/// use microfp::error::{EmptyStackPop, Error};
///
/// fn top() -> Result<i32, Error> {
///     Err(EmptyStackPop)?
/// }
///
/// assert_eq!(top(), Err(Error::EmptyStackPop(EmptyStackPop)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The value of an empty `Maybe` was requested.
    EmptyValueAccess(EmptyValueAccess),
    /// The empty stack was popped.
    EmptyStackPop(EmptyStackPop),
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValueAccess(error) => write!(formatter, "{error}"),
            Self::EmptyStackPop(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyValueAccess(error) => Some(error),
            Self::EmptyStackPop(error) => Some(error),
        }
    }
}

impl From<EmptyValueAccess> for Error {
    fn from(error: EmptyValueAccess) -> Self {
        Self::EmptyValueAccess(error)
    }
}

impl From<EmptyStackPop> for Error {
    fn from(error: EmptyStackPop) -> Self {
        Self::EmptyStackPop(error)
    }
}
