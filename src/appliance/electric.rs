//! The electric appliance value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::ValidationError;
use super::kind::ApplianceKind;

/// An electric appliance with a name, power draw, radiation level and plug
/// state.
///
/// Appliances are equal when they have the same kind, name, power consumption
/// and radiation level. The plug state and kind-specific attributes are
/// ignored, so an appliance can be found in a set whatever its plug state.
///
/// # Examples
///
/// ```
/// use appliance_set::appliance::ElectricAppliance;
///
/// let mut laptop = ElectricAppliance::laptop("MacBook Pro", 60, 0.2, 16).unwrap();
/// assert!(!laptop.is_plugged_in());
///
/// assert!(laptop.plug_in());
/// assert!(!laptop.plug_in());
///
/// let twin = ElectricAppliance::laptop("MacBook Pro", 60, 0.2, 14).unwrap();
/// assert_eq!(laptop, twin);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ApplianceRecord"))]
pub struct ElectricAppliance {
    name: String,
    power_consumption_w: u32,
    plugged_in: bool,
    electromagnetic_radiation_level: f64,
    kind: ApplianceKind,
}

impl ElectricAppliance {
    /// Creates an unplugged appliance after validating every attribute.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when:
    /// - `name` is empty or only whitespace
    /// - `power_consumption_w` is zero
    /// - `electromagnetic_radiation_level` is negative or not finite
    /// - the kind-specific attributes are out of range (see [`ApplianceKind::validate`])
    pub fn new(
        name: impl Into<String>,
        power_consumption_w: u32,
        electromagnetic_radiation_level: f64,
        kind: ApplianceKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        if power_consumption_w == 0 {
            return Err(ValidationError::new(
                "power_consumption_w",
                "must be a positive number of watts",
            ));
        }
        if !electromagnetic_radiation_level.is_finite() {
            return Err(ValidationError::new(
                "electromagnetic_radiation_level",
                "must be a finite number",
            ));
        }
        if electromagnetic_radiation_level < 0.0 {
            return Err(ValidationError::new(
                "electromagnetic_radiation_level",
                "must not be negative",
            ));
        }
        kind.validate()?;

        Ok(Self {
            name,
            power_consumption_w,
            plugged_in: false,
            electromagnetic_radiation_level,
            kind,
        })
    }

    /// Creates an appliance without kind-specific attributes.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn generic(
        name: impl Into<String>,
        power_consumption_w: u32,
        electromagnetic_radiation_level: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            power_consumption_w,
            electromagnetic_radiation_level,
            ApplianceKind::Generic,
        )
    }

    /// Creates a laptop.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new); additionally the screen must be at least 5 inches.
    pub fn laptop(
        name: impl Into<String>,
        power_consumption_w: u32,
        electromagnetic_radiation_level: f64,
        screen_size_inches: u32,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            power_consumption_w,
            electromagnetic_radiation_level,
            ApplianceKind::Laptop { screen_size_inches },
        )
    }

    /// Creates a hair dryer.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new); additionally at least one speed setting is required.
    pub fn hair_dryer(
        name: impl Into<String>,
        power_consumption_w: u32,
        electromagnetic_radiation_level: f64,
        speed_settings: u32,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            power_consumption_w,
            electromagnetic_radiation_level,
            ApplianceKind::HairDryer { speed_settings },
        )
    }

    /// Creates a refrigerator.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn refrigerator(
        name: impl Into<String>,
        power_consumption_w: u32,
        electromagnetic_radiation_level: f64,
        has_freezer: bool,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            power_consumption_w,
            electromagnetic_radiation_level,
            ApplianceKind::Refrigerator { has_freezer },
        )
    }

    /// The appliance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Power consumption in watts.
    #[must_use]
    pub const fn power_consumption_w(&self) -> u32 {
        self.power_consumption_w
    }

    /// Whether the appliance is plugged into a socket.
    #[must_use]
    pub const fn is_plugged_in(&self) -> bool {
        self.plugged_in
    }

    /// Electromagnetic radiation level on a unitless scale.
    #[must_use]
    pub const fn electromagnetic_radiation_level(&self) -> f64 {
        self.electromagnetic_radiation_level
    }

    /// The kind and its kind-specific attributes.
    #[must_use]
    pub const fn kind(&self) -> ApplianceKind {
        self.kind
    }

    /// Plugs the appliance in.
    ///
    /// Returns `false` if it was already plugged in.
    pub fn plug_in(&mut self) -> bool {
        if self.plugged_in {
            tracing::info!(appliance = %self.name, "appliance is already plugged in");
            return false;
        }
        self.plugged_in = true;
        tracing::info!(appliance = %self.name, "appliance is now plugged in");
        true
    }

    /// Unplugs the appliance.
    ///
    /// Returns `false` if it was already unplugged.
    pub fn unplug(&mut self) -> bool {
        if !self.plugged_in {
            tracing::info!(appliance = %self.name, "appliance is already unplugged");
            return false;
        }
        self.plugged_in = false;
        tracing::info!(appliance = %self.name, "appliance is now unplugged");
        true
    }
}

impl PartialEq for ElectricAppliance {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(&self.kind) == std::mem::discriminant(&other.kind)
            && self.power_consumption_w == other.power_consumption_w
            && self
                .electromagnetic_radiation_level
                .total_cmp(&other.electromagnetic_radiation_level)
                .is_eq()
            && self.name == other.name
    }
}

impl Eq for ElectricAppliance {}

impl Hash for ElectricAppliance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.power_consumption_w.hash(state);
    }
}

impl fmt::Display for ElectricAppliance {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{:<18} | Power: {:>4}W | Plugged: {:<5} | EMR Level: {:.2}{}",
            self.name,
            self.power_consumption_w,
            if self.plugged_in { "Yes" } else { "No" },
            self.electromagnetic_radiation_level,
            self.kind
        )
    }
}

/// Unvalidated wire form, checked through [`ElectricAppliance::new`] on
/// deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ApplianceRecord {
    name: String,
    power_consumption_w: u32,
    #[serde(default)]
    plugged_in: bool,
    electromagnetic_radiation_level: f64,
    kind: ApplianceKind,
}

#[cfg(feature = "serde")]
impl TryFrom<ApplianceRecord> for ElectricAppliance {
    type Error = ValidationError;

    fn try_from(record: ApplianceRecord) -> Result<Self, Self::Error> {
        let mut appliance = Self::new(
            record.name,
            record.power_consumption_w,
            record.electromagnetic_radiation_level,
            record.kind,
        )?;
        appliance.plugged_in = record.plugged_in;
        Ok(appliance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(appliance: &ElectricAppliance) -> u64 {
        let mut hasher = DefaultHasher::new();
        appliance.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn new_appliance_is_unplugged() {
        let kettle = ElectricAppliance::generic("Kettle", 2000, 1.2).unwrap();
        assert_eq!(kettle.name(), "Kettle");
        assert_eq!(kettle.power_consumption_w(), 2000);
        assert!((kettle.electromagnetic_radiation_level() - 1.2).abs() < 0.001);
        assert_eq!(kettle.kind(), ApplianceKind::Generic);
        assert!(!kettle.is_plugged_in());
    }

    #[rstest]
    fn plug_in_is_idempotent() {
        let mut toaster = ElectricAppliance::generic("Toaster", 1000, 0.5).unwrap();
        assert!(toaster.plug_in());
        assert!(toaster.is_plugged_in());
        assert!(!toaster.plug_in());
        assert!(toaster.is_plugged_in());
    }

    #[rstest]
    fn unplug_is_idempotent() {
        let mut vacuum = ElectricAppliance::generic("Vacuum", 1400, 3.1).unwrap();
        assert!(!vacuum.unplug());
        vacuum.plug_in();
        assert!(vacuum.unplug());
        assert!(!vacuum.is_plugged_in());
        assert!(!vacuum.unplug());
    }

    #[rstest]
    fn display_pads_columns() {
        let mut mixer = ElectricAppliance::generic("Mixer", 300, 0.9).unwrap();
        assert_eq!(
            mixer.to_string(),
            "Mixer              | Power:  300W | Plugged: No    | EMR Level: 0.90"
        );

        mixer.plug_in();
        assert_eq!(
            mixer.to_string(),
            "Mixer              | Power:  300W | Plugged: Yes   | EMR Level: 0.90"
        );
    }

    #[rstest]
    fn display_appends_kind_suffix() {
        let dryer = ElectricAppliance::hair_dryer("Philips Dryer", 1800, 5.5, 3).unwrap();
        assert_eq!(
            dryer.to_string(),
            "Philips Dryer      | Power: 1800W | Plugged: No    | EMR Level: 5.50 | Type: Hair Dryer (Speeds: 3)"
        );
    }

    #[rstest]
    #[case::blank_name("   ", 100, 1.0, "name")]
    #[case::empty_name("", 100, 1.0, "name")]
    #[case::zero_power("Heater", 0, 1.0, "power_consumption_w")]
    #[case::negative_level("Heater", 100, -0.1, "electromagnetic_radiation_level")]
    #[case::nan_level("Heater", 100, f64::NAN, "electromagnetic_radiation_level")]
    #[case::infinite_level("Heater", 100, f64::INFINITY, "electromagnetic_radiation_level")]
    fn new_rejects_invalid_attributes(
        #[case] name: &str,
        #[case] power: u32,
        #[case] level: f64,
        #[case] field: &str,
    ) {
        let error = ElectricAppliance::generic(name, power, level).unwrap_err();
        assert_eq!(error.field, field);
    }

    #[rstest]
    fn kind_validation_is_applied() {
        let error = ElectricAppliance::laptop("Netbook", 30, 0.1, 4).unwrap_err();
        assert_eq!(error.field, "screen_size_inches");

        let error = ElectricAppliance::hair_dryer("Dryer", 900, 2.0, 0).unwrap_err();
        assert_eq!(error.field, "speed_settings");
    }

    #[rstest]
    fn zero_radiation_is_accepted() {
        assert!(ElectricAppliance::generic("Lamp", 40, 0.0).is_ok());
    }

    #[rstest]
    fn equality_ignores_plug_state_and_kind_attributes() {
        let mut first = ElectricAppliance::laptop("MacBook Pro", 60, 0.2, 16).unwrap();
        let second = ElectricAppliance::laptop("MacBook Pro", 60, 0.2, 13).unwrap();
        first.plug_in();

        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[rstest]
    fn different_kinds_are_never_equal() {
        let fridge = ElectricAppliance::refrigerator("Unit", 10, 0.1, false).unwrap();
        let laptop = ElectricAppliance::laptop("Unit", 10, 0.1, 13).unwrap();
        assert_ne!(fridge, laptop);
    }

    #[rstest]
    #[case::name(ElectricAppliance::generic("Fan B", 50, 0.3).unwrap())]
    #[case::power(ElectricAppliance::generic("Fan A", 51, 0.3).unwrap())]
    #[case::level(ElectricAppliance::generic("Fan A", 50, 0.31).unwrap())]
    fn any_shared_attribute_difference_breaks_equality(#[case] other: ElectricAppliance) {
        let fan = ElectricAppliance::generic("Fan A", 50, 0.3).unwrap();
        assert_ne!(fan, other);
    }
}
