//! Membership queries against filter sources used by
//! [`ArraySet::retain_all`](super::ArraySet::retain_all).

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::ArraySet;

/// A collection that can answer "is this element in you?".
///
/// The answer uses the collection's own notion of membership: linear equality
/// for sequences, hashing for [`HashSet`], ordering for [`BTreeSet`].
///
/// # Examples
///
/// ```rust
/// use appliance_set::collection::Membership;
///
/// let source = vec![1, 2, 3];
/// assert!(source.is_member(&2));
/// assert!(!source[..1].is_member(&2));
/// ```
pub trait Membership<T> {
    /// Returns `true` if `element` is contained in `self`.
    fn is_member(&self, element: &T) -> bool;
}

impl<T: PartialEq> Membership<T> for [T] {
    #[inline]
    fn is_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq, const N: usize> Membership<T> for [T; N] {
    #[inline]
    fn is_member(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    #[inline]
    fn is_member(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: PartialEq> Membership<T> for VecDeque<T> {
    #[inline]
    fn is_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> Membership<T> for ArraySet<T> {
    #[inline]
    fn is_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    #[inline]
    fn is_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    #[inline]
    fn is_member(&self, element: &T) -> bool {
        self.contains(element)
    }
}
