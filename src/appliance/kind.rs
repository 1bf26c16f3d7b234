//! Appliance kinds and their kind-specific attributes.

use std::fmt;

use super::error::ValidationError;

/// The smallest laptop screen accepted, in inches.
pub const MIN_LAPTOP_SCREEN_INCHES: u32 = 5;

/// The kind of an [`ElectricAppliance`](super::ElectricAppliance).
///
/// Two appliances of different kinds are never equal, even when their shared
/// attributes match. Kind-specific attributes do not take part in equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplianceKind {
    /// An appliance with no kind-specific attributes.
    Generic,
    /// A portable computer.
    Laptop {
        /// Screen diagonal in inches, at least 5.
        screen_size_inches: u32,
    },
    /// A high-power appliance used intermittently.
    HairDryer {
        /// Number of speed settings, at least 1.
        speed_settings: u32,
    },
    /// A refrigerator, optionally with a freezer compartment.
    Refrigerator {
        /// Whether the refrigerator has a freezer.
        has_freezer: bool,
    },
}

impl ApplianceKind {
    /// Checks the kind-specific attributes.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a laptop screen below 5 inches or a
    /// hair dryer without speed settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Self::Laptop { screen_size_inches } if screen_size_inches < MIN_LAPTOP_SCREEN_INCHES => {
                Err(ValidationError::new(
                    "screen_size_inches",
                    "must be at least 5 inches",
                ))
            }
            Self::HairDryer { speed_settings: 0 } => Err(ValidationError::new(
                "speed_settings",
                "must be at least 1",
            )),
            _ => Ok(()),
        }
    }
}

/// Writes the kind suffix appended to an appliance's description.
impl fmt::Display for ApplianceKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => Ok(()),
            Self::Laptop { screen_size_inches } => {
                write!(formatter, " | Type: Laptop (Screen: {screen_size_inches}\")")
            }
            Self::HairDryer { speed_settings } => {
                write!(formatter, " | Type: Hair Dryer (Speeds: {speed_settings})")
            }
            Self::Refrigerator { has_freezer } => write!(
                formatter,
                " | Type: Refrigerator (Freezer: {})",
                if *has_freezer { "Yes" } else { "No" }
            ),
        }
    }
}
