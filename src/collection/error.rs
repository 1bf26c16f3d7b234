//! Error type for [`ArraySet`](super::ArraySet) and its [`Cursor`](super::Cursor).

use thiserror::Error;

/// Failures reported at the point of misuse.
///
/// None of these are retried or recovered internally. Inserting a duplicate is
/// not an error: it is a no-op reported through the `bool` result of
/// [`ArraySet::add`](super::ArraySet::add).
///
/// # Examples
///
/// ```rust
/// use appliance_set::collection::{ArraySet, SetError};
///
/// let mut set: ArraySet<i32> = ArraySet::new();
/// assert_eq!(set.try_add(None), Err(SetError::InvalidArgument("element must not be missing")));
///
/// let mut cursor = set.cursor();
/// assert_eq!(cursor.next(), Err(SetError::NoSuchElement));
/// assert_eq!(cursor.remove_current(), Err(SetError::IllegalState));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    /// A missing element or a missing source collection was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// `remove_current` was called with no yielded element pending removal.
    #[error("illegal iteration state: no element pending removal")]
    IllegalState,
    /// `next` was called past the end of the live prefix.
    #[error("no such element: iteration is exhausted")]
    NoSuchElement,
}
