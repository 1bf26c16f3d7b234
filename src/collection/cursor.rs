//! Removal-capable forward cursor over an [`ArraySet`].
//!
//! # State
//!
//! ```text
//!   position:      index of the next element to yield, 0 <= position <= len
//!   last_yielded:  index of the element returned by the last `next`, if any
//!
//!   next            yields slots[position], last_yielded = position, position += 1
//!   remove_current  removes the pending element, position = last_yielded,
//!                   last_yielded = None
//! ```
//!
//! The cursor is single-pass: once `has_next` returns `false` a new cursor
//! must be obtained for another traversal.

use super::array_set::ArraySet;
use super::error::SetError;

/// A forward cursor that can remove the element it last yielded.
///
/// Obtained through [`ArraySet::cursor`]. `next` returns a [`Result`] instead of
/// an [`Option`] so that running past the end is reported as
/// [`SetError::NoSuchElement`].
///
/// # Examples
///
/// ```rust
/// use appliance_set::collection::{ArraySet, SetError};
///
/// let mut set = ArraySet::from_source(['a', 'b', 'c']);
/// let mut cursor = set.cursor();
///
/// assert_eq!(cursor.next(), Ok(&'a'));
/// assert_eq!(cursor.next(), Ok(&'b'));
/// cursor.remove_current()?;
/// assert_eq!(cursor.remove_current(), Err(SetError::IllegalState));
/// assert_eq!(cursor.next(), Ok(&'c'));
/// assert!(!cursor.has_next());
///
/// assert_eq!(set.len(), 2);
/// # Ok::<(), SetError>(())
/// ```
pub struct Cursor<'a, T> {
    set: &'a mut ArraySet<T>,
    position: usize,
    last_yielded: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) const fn new(set: &'a mut ArraySet<T>) -> Self {
        Self {
            set,
            position: 0,
            last_yielded: None,
        }
    }

    /// Returns `true` if another element can be yielded.
    #[inline]
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.position < self.set.len()
    }

    /// Returns the number of elements not yet yielded.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.set.len().saturating_sub(self.position)
    }

    /// Yields the next element.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NoSuchElement`] if the cursor is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T, SetError> {
        let element = self.set.get(self.position).ok_or(SetError::NoSuchElement)?;
        self.last_yielded = Some(self.position);
        self.position += 1;
        Ok(element)
    }
}

impl<T: PartialEq> Cursor<'_, T> {
    /// Removes the element returned by the last call to [`next`](Self::next).
    ///
    /// The pending element is looked up again by value before removal, since
    /// removal compacts the buffer. An element that is not equal to itself
    /// (such as a NaN float) is removed at the index it was yielded from. The
    /// cursor then steps back so that the element shifted into the freed slot
    /// is yielded next.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::IllegalState`] if `next` has not been called yet, or
    /// if the pending element was already removed.
    pub fn remove_current(&mut self) -> Result<(), SetError> {
        let last_yielded = self.last_yielded.take().ok_or(SetError::IllegalState)?;
        let current = self.set.get(last_yielded).ok_or(SetError::IllegalState)?;
        let index = self.set.position(current).unwrap_or(last_yielded);

        self.set.remove_at(index);
        self.position = last_yielded;
        Ok(())
    }
}
