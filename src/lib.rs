//! # appliance-set
//!
//! A mutable, array-backed set with a predictable growth policy, and an
//! electric appliance domain model to populate it with.
//!
//! ## Overview
//!
//! - **Collection**: [`ArraySet`](collection::ArraySet), a unique-element
//!   container with linear-scan membership, order-preserving compaction and
//!   a cursor that can remove elements while traversing
//! - **Configuration**: [`SetConfig`](config::SetConfig), initial capacity and
//!   growth factor from defaults, builders or environment variables
//! - **Appliances**: [`ElectricAppliance`](appliance::ElectricAppliance) and
//!   its kinds
//!
//! ## Feature Flags
//!
//! - `appliance`: Electric appliance domain model (default)
//! - `serde`: Serialization support for sets and appliances
//! - `demo`: The `appliance-demo` binary and its command-line dependencies
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use appliance_set::prelude::*;
//!
//! let mut set: ArraySet<u32> = ArraySet::new();
//! assert!(set.add(7));
//! assert!(!set.add(7));
//! assert_eq!(set.capacity(), DEFAULT_INITIAL_CAPACITY);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use appliance_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;

    pub use crate::config::{ConfigError, SetConfig};

    #[cfg(feature = "appliance")]
    pub use crate::appliance::*;
}

pub mod collection;

pub mod config;

#[cfg(feature = "appliance")]
pub mod appliance;
