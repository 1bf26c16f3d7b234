//! Rejection of out-of-range appliance attributes.

use thiserror::Error;

/// An appliance attribute that broke a construction rule.
///
/// `field` is spelled as the attribute is named on
/// [`ElectricAppliance`](super::ElectricAppliance) or in
/// [`ApplianceKind`](super::ApplianceKind), so callers can map the error back
/// to an input field.
///
/// # Examples
///
/// ```
/// use appliance_set::appliance::ElectricAppliance;
///
/// let error = ElectricAppliance::generic("Heater", 0, 1.0).unwrap_err();
/// assert_eq!(error.field, "power_consumption_w");
/// assert_eq!(
///     error.to_string(),
///     "invalid appliance attribute `power_consumption_w`: must be a positive number of watts"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid appliance attribute `{field}`: {rule}")]
pub struct ValidationError {
    /// The rejected attribute.
    pub field: &'static str,
    /// The rule its value broke.
    pub rule: &'static str,
}

impl ValidationError {
    pub(crate) const fn new(field: &'static str, rule: &'static str) -> Self {
        Self { field, rule }
    }
}
