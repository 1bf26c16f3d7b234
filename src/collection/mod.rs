//! Array-backed set collection.
//!
//! This module provides a mutable unique-element container built directly on
//! a growable array:
//!
//! - [`ArraySet`]: the set itself, with linear-scan membership, in-place
//!   compaction on removal and bulk set algebra
//! - [`Cursor`]: a forward cursor that can remove the element it last yielded
//! - [`GrowthPolicy`]: the pure capacity growth function (30% per step)
//! - [`Membership`]: the membership query used by [`ArraySet::retain_all`]
//! - [`SetError`]: the misuse failures reported by the operations above
//!
//! # Examples
//!
//! ```rust
//! use appliance_set::collection::ArraySet;
//!
//! let mut set = ArraySet::from_source(["kettle", "toaster", "mixer", "kettle"]);
//! assert_eq!(set.len(), 3);
//!
//! // Bulk set algebra
//! assert!(set.contains_all(&["kettle", "mixer"]));
//! assert!(set.retain_all(&["kettle", "mixer", "blender"]));
//! assert_eq!(set.to_array().as_ref(), &["kettle", "mixer"]);
//!
//! // Removal during traversal
//! let mut cursor = set.cursor();
//! cursor.next()?;
//! cursor.remove_current()?;
//! assert_eq!(cursor.next()?, &"mixer");
//! # Ok::<(), appliance_set::collection::SetError>(())
//! ```

mod array_set;
mod cursor;
mod error;
mod growth;
mod membership;

pub use array_set::{ArraySet, IntoIter, Iter};
pub use cursor::Cursor;
pub use error::SetError;
pub use growth::{DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY, GrowthPolicy, MAX_GROWTH_FACTOR};
pub use membership::Membership;
