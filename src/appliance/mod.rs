//! Electric appliance domain model.
//!
//! Provides [`ElectricAppliance`], a validated value type used as the
//! reference element of [`ArraySet`](crate::collection::ArraySet):
//!
//! - [`ElectricAppliance`]: name, power draw, radiation level and plug state
//! - [`ApplianceKind`]: laptop, hair dryer, refrigerator or generic, with the
//!   kind-specific attributes
//! - [`ValidationError`]: raised for out-of-range attributes
//!
//! # Examples
//!
//! ```rust
//! use appliance_set::appliance::ElectricAppliance;
//! use appliance_set::collection::ArraySet;
//!
//! let fridge = ElectricAppliance::refrigerator("Samsung Fridge", 150, 0.8, true)?;
//! let laptop = ElectricAppliance::laptop("MacBook Pro", 60, 0.2, 16)?;
//! let duplicate = laptop.clone();
//!
//! let set = ArraySet::from_source([fridge, laptop, duplicate]);
//! assert_eq!(set.len(), 2);
//! # Ok::<(), appliance_set::appliance::ValidationError>(())
//! ```

mod electric;
mod error;
mod kind;

pub use electric::ElectricAppliance;
pub use error::ValidationError;
pub use kind::{ApplianceKind, MIN_LAPTOP_SCREEN_INCHES};
