//! Array-backed unique-element set.
//!
//! This module provides [`ArraySet`], a mutable set stored in a single growable
//! buffer of slots. Live elements always occupy the contiguous prefix
//! `[0, len)` of the buffer; trailing slots hold `None`.
//!
//! # Overview
//!
//! - Lookup is a linear scan using `PartialEq`, so elements need no `Hash`
//!   or `Ord` implementation.
//! - Insertion appends after a duplicate check and keeps insertion order.
//! - Removal closes the gap by shifting the tail left by one slot.
//! - The buffer grows by the configured [`GrowthPolicy`] (30% by default)
//!   and every growth event is logged through `tracing`.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity        |
//! |----------------|-------------------|
//! | `contains`     | O(n)              |
//! | `add`          | O(n)              |
//! | `remove`       | O(n)              |
//! | `clear`        | O(n)              |
//! | `add_all`      | O(n * m)          |
//! | `remove_all`   | O(n * m)          |
//! | `contains_all` | O(n * m)          |
//! | `retain_all`   | O(n * cost(m))    |
//! | `len`          | O(1)              |
//!
//! # Examples
//!
//! ```rust
//! use appliance_set::collection::ArraySet;
//!
//! let mut set = ArraySet::from_source(["fridge", "laptop", "dryer", "fridge"]);
//! assert_eq!(set.len(), 3);
//!
//! assert!(!set.add("laptop"));
//! assert!(set.remove("laptop"));
//!
//! let remaining: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(remaining, vec!["fridge", "dryer"]);
//! ```

use std::borrow::Borrow;
use std::iter::FusedIterator;

use super::cursor::Cursor;
use super::error::SetError;
use super::growth::GrowthPolicy;
use super::membership::Membership;
use crate::config::SetConfig;

const MISSING_ELEMENT: &str = "element must not be missing";
const MISSING_SOURCE: &str = "source must not be missing";

/// A unique-element set stored in a contiguous, growable buffer.
///
/// # Type Parameters
///
/// * `T` - The element type. Membership is decided by `PartialEq`, which is
///   expected to be a total equality.
///
/// # Examples
///
/// ```rust
/// use appliance_set::collection::ArraySet;
///
/// let mut set = ArraySet::new();
/// assert!(set.add(1));
/// assert!(set.add(2));
/// assert!(!set.add(1));
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.capacity(), 15);
/// ```
#[derive(Clone)]
pub struct ArraySet<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    policy: GrowthPolicy,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArraySet<T> {
    /// Creates an empty set with the default capacity of 15 slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SetConfig::default())
    }

    /// Creates an empty set using the capacity and growth factor of `config`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    /// use appliance_set::config::SetConfig;
    ///
    /// let config = SetConfig::default().with_initial_capacity(2);
    /// let set: ArraySet<i32> = ArraySet::with_config(&config);
    /// assert_eq!(set.capacity(), 2);
    /// ```
    #[must_use]
    pub fn with_config(config: &SetConfig) -> Self {
        Self::with_capacity_and_policy(config.initial_capacity, config.growth_policy())
    }

    fn with_capacity_and_policy(capacity: usize, policy: GrowthPolicy) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            policy,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the growth policy used when the buffer is full.
    #[inline]
    #[must_use]
    pub const fn growth_policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Removes every element. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    ///
    /// let mut set = ArraySet::from_source(0..20);
    /// let capacity = set.capacity();
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the live elements in buffer order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Returns a cursor that can remove the element it last yielded.
    ///
    /// The cursor holds the set's unique borrow, so the set cannot be mutated
    /// through any other path while the cursor is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    ///
    /// let mut set = ArraySet::from_source(1..=5);
    /// let mut cursor = set.cursor();
    /// while cursor.has_next() {
    ///     if cursor.next()? % 2 == 0 {
    ///         cursor.remove_current()?;
    ///     }
    /// }
    /// assert_eq!(set.to_array().as_ref(), &[1, 3, 5]);
    /// # Ok::<(), appliance_set::collection::SetError>(())
    /// ```
    #[inline]
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns the live element at `index`, if any.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots[..self.len].get(index).and_then(Option::as_ref)
    }

    /// Removes the element at `index`, shifting the tail left by one slot.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len].take()
    }

    fn ensure_capacity(&mut self) {
        if self.len < self.slots.len() {
            return;
        }

        let old_capacity = self.slots.len();
        let new_capacity = self.policy.next_capacity(old_capacity);
        let mut grown = empty_slots(new_capacity);
        for (target, source) in grown.iter_mut().zip(&mut self.slots[..self.len]) {
            *target = source.take();
        }
        self.slots = grown;

        tracing::info!(old_capacity, new_capacity, "array capacity increased");
    }

    fn push_unchecked(&mut self, element: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(element);
        self.len += 1;
    }
}

impl<T: PartialEq> ArraySet<T> {
    /// Creates a set holding a single element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::new();
        set.push_unchecked(element);
        set
    }

    /// Creates a set from a possibly missing element.
    ///
    /// A missing element yields an empty set rather than an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    ///
    /// assert_eq!(ArraySet::from_optional(Some(3)).len(), 1);
    /// assert!(ArraySet::<i32>::from_optional(None).is_empty());
    /// ```
    #[must_use]
    pub fn from_optional(element: Option<T>) -> Self {
        element.map_or_else(Self::new, Self::singleton)
    }

    /// Creates a set from `source`, dropping duplicates.
    ///
    /// The buffer is sized once up front to `max(15, floor(n * 1.3))` where `n`
    /// is the lower size bound reported by the source iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    ///
    /// let set = ArraySet::from_source(vec![1, 2, 1, 3, 2]);
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.capacity(), 15);
    ///
    /// let large = ArraySet::from_source(0..100);
    /// assert_eq!(large.capacity(), 130);
    /// ```
    #[must_use]
    pub fn from_source<I: IntoIterator<Item = T>>(source: I) -> Self {
        Self::from_source_with_config(source, &SetConfig::default())
    }

    /// Creates a set from `source` using the settings of `config`.
    #[must_use]
    pub fn from_source_with_config<I: IntoIterator<Item = T>>(source: I, config: &SetConfig) -> Self {
        let source = source.into_iter();
        let (source_length, _) = source.size_hint();
        let policy = config.growth_policy();
        let capacity = policy.source_capacity(config.initial_capacity, source_length);

        let mut set = Self::with_capacity_and_policy(capacity, policy);
        set.add_all(source);
        set
    }

    /// Creates a set from a possibly missing source.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `source` is `None`.
    pub fn try_from_source<I: IntoIterator<Item = T>>(source: Option<I>) -> Result<Self, SetError> {
        source
            .map(Self::from_source)
            .ok_or(SetError::InvalidArgument(MISSING_SOURCE))
    }

    /// Returns the index of `element` within the live prefix.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait, so `ArraySet<String>` can be searched with `&str`.
    #[must_use]
    pub fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|item| item.borrow() == element))
    }

    /// Returns `true` if an element equal to `element` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    ///
    /// let set = ArraySet::from_source(["apple".to_string(), "banana".to_string()]);
    /// assert!(set.contains("apple"));
    /// assert!(!set.contains("cherry"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(element).is_some()
    }

    /// Like [`contains`](Self::contains), for a possibly missing query.
    ///
    /// A missing query is never found, since missing elements are never stored.
    #[inline]
    #[must_use]
    pub fn contains_option<Q>(&self, element: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        element.is_some_and(|element| self.contains(element))
    }

    /// Adds `element` unless an equal element is already present.
    ///
    /// Returns `true` if the element was added. Grows the buffer when it is
    /// full.
    pub fn add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.push_unchecked(element);
        true
    }

    /// Adds a possibly missing element.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `element` is `None`; the set is
    /// left unchanged.
    pub fn try_add(&mut self, element: Option<T>) -> Result<bool, SetError> {
        match element {
            Some(element) => Ok(self.add(element)),
            None => Err(SetError::InvalidArgument(MISSING_ELEMENT)),
        }
    }

    /// Removes the element equal to `element`.
    ///
    /// Returns `true` if an element was removed. The relative order of the
    /// remaining elements is preserved.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.take(element).is_some()
    }

    /// Removes the element equal to `element` and returns it.
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(element)?;
        self.remove_at(index)
    }

    /// Adds every element of `source` in its iteration order.
    ///
    /// Returns `true` if at least one element was added.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, source: I) -> bool {
        let mut modified = false;
        for element in source {
            modified |= self.add(element);
        }
        modified
    }

    /// Adds every element of a source that may contain missing elements.
    ///
    /// Stops at the first missing element. Elements added before it stay in
    /// the set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] on the first `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::{ArraySet, SetError};
    ///
    /// let mut set = ArraySet::new();
    /// let result = set.try_add_all([Some(1), Some(2), None, Some(3)]);
    ///
    /// assert!(matches!(result, Err(SetError::InvalidArgument(_))));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn try_add_all<I: IntoIterator<Item = Option<T>>>(
        &mut self,
        source: I,
    ) -> Result<bool, SetError> {
        let mut modified = false;
        for element in source {
            modified |= self.try_add(element)?;
        }
        Ok(modified)
    }

    /// Returns `true` if every element of `source` is present.
    ///
    /// Stops at the first element that is missing.
    pub fn contains_all<'a, I>(&self, source: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        source.into_iter().all(|element| self.contains(element))
    }

    /// Removes every element of `source`.
    ///
    /// Returns `true` if at least one element was removed.
    pub fn remove_all<'a, I>(&mut self, source: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut modified = false;
        for element in source {
            modified |= self.remove(element);
        }
        modified
    }

    /// Keeps only the elements that `source` reports as members.
    ///
    /// Survivors keep their relative order. Returns `true` if any element was
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    ///
    /// let mut set = ArraySet::from_source(1..=6);
    /// assert!(set.retain_all(&[2, 4, 6, 8]));
    /// assert_eq!(set.to_array().as_ref(), &[2, 4, 6]);
    ///
    /// assert!(!set.retain_all(&vec![2, 4, 6]));
    /// ```
    pub fn retain_all<S: Membership<T> + ?Sized>(&mut self, source: &S) -> bool {
        let mut write_index = 0;
        let mut modified = false;

        for read_index in 0..self.len {
            let retained = self.slots[read_index]
                .as_ref()
                .is_some_and(|element| source.is_member(element));

            if retained {
                if write_index != read_index {
                    self.slots.swap(write_index, read_index);
                }
                write_index += 1;
            } else {
                self.slots[read_index] = None;
                modified = true;
            }
        }

        if write_index < self.len {
            modified = true;
            for slot in &mut self.slots[write_index..self.len] {
                *slot = None;
            }
            self.len = write_index;
        }

        modified
    }

    /// Like [`retain_all`](Self::retain_all), for a possibly missing source.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `source` is `None`; the set is
    /// left unchanged.
    pub fn try_retain_all<S: Membership<T> + ?Sized>(
        &mut self,
        source: Option<&S>,
    ) -> Result<bool, SetError> {
        source
            .map(|source| self.retain_all(source))
            .ok_or(SetError::InvalidArgument(MISSING_SOURCE))
    }
}

impl<T: Clone> ArraySet<T> {
    /// Returns a snapshot of the live elements in buffer order.
    #[must_use]
    pub fn to_array(&self) -> Box<[T]> {
        self.iter().cloned().collect()
    }

    /// Copies the live elements into `target` when it is large enough.
    ///
    /// - If `target` has fewer than `len` slots, a new buffer of exactly `len`
    ///   slots is returned and `target` is dropped.
    /// - Otherwise the elements are written to the front of `target` and the
    ///   same buffer is returned. When `target` is strictly larger, the slot
    ///   right after the last element is set to `None` as an end marker and
    ///   later slots are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::collection::ArraySet;
    ///
    /// let set = ArraySet::from_source([1, 2]);
    /// let target = vec![Some(9); 4].into_boxed_slice();
    ///
    /// let filled = set.to_array_in(target);
    /// assert_eq!(filled.as_ref(), &[Some(1), Some(2), None, Some(9)]);
    ///
    /// let grown = set.to_array_in(Box::new([]));
    /// assert_eq!(grown.as_ref(), &[Some(1), Some(2)]);
    /// ```
    #[must_use]
    pub fn to_array_in(&self, mut target: Box<[Option<T>]>) -> Box<[Option<T>]> {
        let live = &self.slots[..self.len];
        if target.len() < live.len() {
            return live.to_vec().into_boxed_slice();
        }

        target[..live.len()].clone_from_slice(live);
        if target.len() > live.len() {
            target[live.len()] = None;
        }
        target
    }
}

impl<T> Default for ArraySet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArraySet<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_source(iter)
    }
}

impl<T: PartialEq> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for ArraySet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_source(elements)
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArraySet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}

/// Iterator over references to the elements of an [`ArraySet`].
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of an [`ArraySet`].
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ArraySet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ArraySetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ArraySetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = ArraySet<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let config = SetConfig::default();
        let policy = config.growth_policy();
        let capacity =
            policy.source_capacity(config.initial_capacity, seq.size_hint().unwrap_or(0));
        let mut set = ArraySet::with_capacity_and_policy(capacity, policy);
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ArraySet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArraySetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    static_assertions::assert_impl_all!(ArraySet<i32>: Send, Sync, Clone, Default);
    static_assertions::assert_impl_all!(Iter<'static, String>: ExactSizeIterator, FusedIterator);

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buffer);
            Ok(buffer.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn trailing_slots_are_empty<T>(set: &ArraySet<T>) -> bool {
        set.slots[set.len..].iter().all(Option::is_none)
    }

    #[rstest]
    fn new_set_has_default_capacity() {
        let set: ArraySet<i32> = ArraySet::new();
        assert_eq!(set.capacity(), 15);
        assert!(set.is_empty());
        assert!(trailing_slots_are_empty(&set));
    }

    #[rstest]
    fn fifteen_adds_do_not_grow() {
        let mut set = ArraySet::new();
        for element in 0..15 {
            assert!(set.add(element));
        }
        assert_eq!(set.capacity(), 15);
        assert_eq!(set.len(), 15);
    }

    #[rstest]
    fn sixteenth_add_grows_to_nineteen() {
        let mut set = ArraySet::new();
        for element in 0..16 {
            set.add(element);
        }
        assert_eq!(set.capacity(), 19);

        for element in 16..20 {
            set.add(element);
        }
        assert_eq!(set.capacity(), 24);
        assert_eq!(set.len(), 20);
    }

    #[rstest]
    fn growth_keeps_order_and_content() {
        let set = (0..40).fold(ArraySet::new(), |mut set, element| {
            set.add(element);
            set
        });
        let elements: Vec<i32> = set.iter().copied().collect();
        assert_eq!(elements, (0..40).collect::<Vec<_>>());
        assert!(trailing_slots_are_empty(&set));
    }

    #[rstest]
    fn tiny_capacity_grows_by_one() {
        let config = SetConfig::default().with_initial_capacity(1);
        let mut set = ArraySet::with_config(&config);
        set.add('a');
        assert_eq!(set.capacity(), 1);
        set.add('b');
        assert_eq!(set.capacity(), 2);
        set.add('c');
        assert_eq!(set.capacity(), 3);
    }

    #[rstest]
    fn zero_capacity_still_accepts_elements() {
        let config = SetConfig::default().with_initial_capacity(0);
        let mut set = ArraySet::with_config(&config);
        assert!(set.add(1));
        assert_eq!(set.capacity(), 1);
    }

    #[rstest]
    fn huge_growth_factor_grows_by_clamped_factor() {
        let config = SetConfig::default().with_growth_factor(1e18);
        let mut set = ArraySet::with_config(&config);
        for element in 0..16 {
            set.add(element);
        }
        assert_eq!(set.len(), 16);
        assert_eq!(set.capacity(), 120);
    }

    #[rstest]
    fn growth_event_is_logged_with_both_capacities() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut set = ArraySet::new();
            for element in 0..15 {
                set.add(element);
            }
            assert_eq!(logs.contents().matches("array capacity increased").count(), 0);

            set.add(15);
        });

        let output = logs.contents();
        assert_eq!(output.matches("array capacity increased").count(), 1);
        assert!(output.contains("old_capacity=15"));
        assert!(output.contains("new_capacity=19"));
    }

    #[rstest]
    fn duplicate_add_does_not_grow() {
        let mut set = ArraySet::new();
        for element in 0..15 {
            set.add(element);
        }
        assert!(!set.add(3));
        assert_eq!(set.capacity(), 15);
    }

    #[rstest]
    fn remove_shifts_tail_and_clears_last_slot() {
        let mut set = ArraySet::from_source(['a', 'b', 'c', 'd']);
        assert!(set.remove(&'b'));

        assert_eq!(set.len(), 3);
        assert_eq!(set.to_array().as_ref(), &['a', 'c', 'd']);
        assert!(trailing_slots_are_empty(&set));
    }

    #[rstest]
    #[case::first('a', &['b', 'c'])]
    #[case::middle('b', &['a', 'c'])]
    #[case::last('c', &['a', 'b'])]
    fn remove_preserves_relative_order(#[case] removed: char, #[case] expected: &[char]) {
        let mut set = ArraySet::from_source(['a', 'b', 'c']);
        assert!(set.remove(&removed));
        assert_eq!(set.to_array().as_ref(), expected);
    }

    #[rstest]
    fn take_returns_the_stored_element() {
        let mut set = ArraySet::from_source(["left".to_string(), "right".to_string()]);
        assert_eq!(set.take("right"), Some("right".to_string()));
        assert_eq!(set.take("right"), None);
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn remove_at_out_of_range_is_none() {
        let mut set = ArraySet::from_source([1]);
        assert_eq!(set.remove_at(1), None);
        assert_eq!(set.remove_at(0), Some(1));
        assert!(set.is_empty());
    }

    #[rstest]
    fn clear_empties_slots_and_keeps_capacity() {
        let mut set = ArraySet::from_source(0..30);
        let capacity = set.capacity();
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);
        assert!(trailing_slots_are_empty(&set));
        assert!(!set.contains(&0));
    }

    #[rstest]
    fn from_source_sizes_buffer_once() {
        let set = ArraySet::from_source(0..40);
        assert_eq!(set.capacity(), 52);
        assert_eq!(set.len(), 40);
    }

    #[rstest]
    fn from_source_with_config_uses_config_capacity() {
        let config = SetConfig::default()
            .with_initial_capacity(4)
            .with_growth_factor(2.0);
        let set = ArraySet::from_source_with_config([1, 2], &config);
        assert_eq!(set.capacity(), 4);
        assert!((set.growth_policy().factor() - 2.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn retain_all_compacts_in_place() {
        let mut set = ArraySet::from_source(1..=8);
        assert!(set.retain_all(&[1, 4, 5, 8]));

        assert_eq!(set.to_array().as_ref(), &[1, 4, 5, 8]);
        assert!(trailing_slots_are_empty(&set));
        assert_eq!(set.capacity(), 15);
    }

    #[rstest]
    fn retain_all_with_full_overlap_is_unmodified() {
        let mut set = ArraySet::from_source([1, 2, 3]);
        assert!(!set.retain_all(&[3, 2, 1, 0]));
        assert_eq!(set.to_array().as_ref(), &[1, 2, 3]);
    }

    #[rstest]
    fn retain_all_with_empty_source_clears() {
        let mut set = ArraySet::from_source([1, 2, 3]);
        assert!(set.retain_all(&Vec::<i32>::new()));
        assert!(set.is_empty());
        assert!(trailing_slots_are_empty(&set));
    }

    #[rstest]
    fn retain_all_on_empty_set_is_unmodified() {
        let mut set: ArraySet<i32> = ArraySet::new();
        assert!(!set.retain_all(&[1]));
    }

    #[rstest]
    fn to_array_in_reuses_exact_buffer() {
        let set = ArraySet::from_source([1, 2]);
        let target: Box<[Option<i32>]> = vec![None; 2].into_boxed_slice();
        let address = target.as_ptr();

        let filled = set.to_array_in(target);
        assert_eq!(filled.as_ptr(), address);
        assert_eq!(filled.as_ref(), &[Some(1), Some(2)]);
    }

    #[rstest]
    fn to_array_in_marks_end_and_leaves_rest() {
        let set = ArraySet::from_source([1]);
        let target = vec![Some(7), Some(8), Some(9)].into_boxed_slice();
        let address = target.as_ptr();

        let filled = set.to_array_in(target);
        assert_eq!(filled.as_ptr(), address);
        assert_eq!(filled.as_ref(), &[Some(1), None, Some(9)]);
    }

    #[rstest]
    fn to_array_in_allocates_when_too_small() {
        let set = ArraySet::from_source([1, 2, 3]);
        let filled = set.to_array_in(vec![Some(0)].into_boxed_slice());
        assert_eq!(filled.as_ref(), &[Some(1), Some(2), Some(3)]);
    }

    #[rstest]
    fn into_iter_yields_live_prefix_only() {
        let mut set = ArraySet::from_source(0..5);
        set.remove(&2);
        let iter = set.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![0, 1, 3, 4]);
    }

    #[rstest]
    fn iter_is_double_ended() {
        let set = ArraySet::from_source([1, 2, 3]);
        let reversed: Vec<i32> = set.iter().rev().copied().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[rstest]
    fn equality_ignores_order() {
        let left = ArraySet::from_source([1, 2, 3]);
        let right = ArraySet::from_source([3, 1, 2]);
        assert_eq!(left, right);
        assert_ne!(left, ArraySet::from_source([1, 2]));
        assert_ne!(left, ArraySet::from_source([1, 2, 4]));
    }

    #[rstest]
    fn debug_prints_as_set() {
        let set = ArraySet::from_source([1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    #[rstest]
    fn extend_skips_duplicates() {
        let mut set = ArraySet::from([1, 2]);
        set.extend([2, 3, 3]);
        assert_eq!(set.to_array().as_ref(), &[1, 2, 3]);
    }
}
