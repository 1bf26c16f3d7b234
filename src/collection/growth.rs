//! Capacity growth arithmetic for [`ArraySet`](super::ArraySet).
//!
//! The buffer grows by a fixed factor (30% by default) whenever a new element
//! has to be written into a full buffer. Truncating the scaled capacity can
//! fail to make progress for tiny buffers (`floor(1 * 1.3) == 1`), so the
//! policy always falls back to `capacity + 1` in that case.
//!
//! ```text
//!  capacity:  1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 9 -> 11 -> 14 -> 18 -> 23
//!  default:  15 -> 19 -> 24 -> 31 -> 40 -> 52
//! ```

/// The number of slots a default-constructed set starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 15;

/// The factor applied to the capacity on every growth event.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.3;

/// The largest factor applied in a single growth event.
///
/// Larger factors are rejected by [`SetConfig::validate`](crate::config::SetConfig::validate)
/// and clamped to this value by [`GrowthPolicy`].
pub const MAX_GROWTH_FACTOR: f64 = 8.0;

static_assertions::const_assert!(DEFAULT_INITIAL_CAPACITY > 0);

/// Pure mapping from the current buffer capacity to the next one.
///
/// # Examples
///
/// ```rust
/// use appliance_set::collection::GrowthPolicy;
///
/// let policy = GrowthPolicy::default();
/// assert_eq!(policy.next_capacity(15), 19);
/// assert_eq!(policy.next_capacity(1), 2);
/// assert_eq!(policy.source_capacity(15, 100), 130);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthPolicy {
    factor: f64,
}

impl GrowthPolicy {
    /// Creates a policy that scales the capacity by `factor`.
    ///
    /// The factor is not validated here; [`SetConfig::validate`](crate::config::SetConfig::validate)
    /// rejects factors outside `1.0..=8.0`. Factors above [`MAX_GROWTH_FACTOR`]
    /// (and NaN) are clamped when scaling, and any factor still makes progress because of
    /// the `capacity + 1` fallback.
    #[inline]
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// The scaling factor of this policy.
    #[inline]
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns the capacity to grow to from `capacity`.
    ///
    /// The result is strictly greater than `capacity` unless `capacity` is
    /// already `usize::MAX`.
    #[must_use]
    pub fn next_capacity(&self, capacity: usize) -> usize {
        let scaled = self.scale(capacity);
        if scaled <= capacity {
            capacity.saturating_add(1)
        } else {
            scaled
        }
    }

    /// Returns the capacity to allocate up front for a bulk load of
    /// `source_length` elements, never less than `initial_capacity`.
    #[must_use]
    pub fn source_capacity(&self, initial_capacity: usize, source_length: usize) -> usize {
        initial_capacity.max(self.scale(source_length))
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn scale(&self, capacity: usize) -> usize {
        let factor = self.factor.min(MAX_GROWTH_FACTOR);
        // `as` saturates at `usize::MAX`.
        (capacity as f64 * factor) as usize
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_GROWTH_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_capacity(15, 19)]
    #[case::second_step(19, 24)]
    #[case::one_truncates(1, 2)]
    #[case::two_truncates(2, 3)]
    #[case::three_truncates(3, 4)]
    #[case::four(4, 5)]
    #[case::ten(10, 13)]
    #[case::zero(0, 1)]
    fn next_capacity_matches_floor_with_fallback(#[case] capacity: usize, #[case] expected: usize) {
        assert_eq!(GrowthPolicy::default().next_capacity(capacity), expected);
    }

    #[rstest]
    fn next_capacity_always_grows_with_unit_factor() {
        let policy = GrowthPolicy::new(1.0);
        for capacity in 0..50 {
            assert_eq!(policy.next_capacity(capacity), capacity + 1);
        }
    }

    #[rstest]
    #[case::empty_source(0, 15)]
    #[case::small_source(5, 15)]
    #[case::at_threshold(11, 15)]
    #[case::just_above(12, 15)]
    #[case::large_source(20, 26)]
    #[case::hundred(100, 130)]
    fn source_capacity_never_below_initial(#[case] source_length: usize, #[case] expected: usize) {
        let policy = GrowthPolicy::default();
        assert_eq!(
            policy.source_capacity(DEFAULT_INITIAL_CAPACITY, source_length),
            expected
        );
    }

    #[rstest]
    #[case::huge(1e18)]
    #[case::infinite(f64::INFINITY)]
    #[case::not_a_number(f64::NAN)]
    fn oversized_factor_is_clamped(#[case] factor: f64) {
        let policy = GrowthPolicy::new(factor);
        assert_eq!(policy.next_capacity(15), 120);
        assert_eq!(policy.source_capacity(15, 100), 800);
    }

    #[rstest]
    fn next_capacity_saturates_at_usize_max() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(usize::MAX), usize::MAX);
        assert!(policy.next_capacity(usize::MAX - 1) > usize::MAX - 1);
    }

    #[rstest]
    fn default_policy_uses_default_factor() {
        assert!((GrowthPolicy::default().factor() - DEFAULT_GROWTH_FACTOR).abs() < f64::EPSILON);
    }
}
