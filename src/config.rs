//! Construction settings for [`ArraySet`](crate::collection::ArraySet).
//!
//! [`SetConfig`] carries the initial buffer capacity and the growth factor.
//! Values come from defaults, builder methods, or environment variables.
//!
//! # Environment Variables
//!
//! - `ARRAY_SET_INITIAL_CAPACITY`: initial number of slots (optional, default: 15)
//! - `ARRAY_SET_GROWTH_FACTOR`: capacity multiplier per growth event (optional, default: 1.3, range: 1.0 to 8.0)

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::collection::{
    DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY, GrowthPolicy, MAX_GROWTH_FACTOR,
};

/// Environment variable holding the initial capacity.
pub const INITIAL_CAPACITY_ENV: &str = "ARRAY_SET_INITIAL_CAPACITY";

/// Environment variable holding the growth factor.
pub const GROWTH_FACTOR_ENV: &str = "ARRAY_SET_GROWTH_FACTOR";

/// Configuration error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the setting or environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Settings used when an [`ArraySet`](crate::collection::ArraySet) is created.
///
/// # Examples
///
/// ```rust
/// use appliance_set::config::SetConfig;
///
/// let config = SetConfig::default();
/// assert_eq!(config.initial_capacity, 15);
/// assert!((config.growth_factor - 1.3).abs() < f64::EPSILON);
///
/// let config = SetConfig::default()
///     .with_initial_capacity(4)
///     .with_growth_factor(2.0);
/// assert_eq!(config.growth_policy().next_capacity(4), 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SetConfig {
    /// Number of slots allocated by an empty set.
    ///
    /// Defaults to 15.
    pub initial_capacity: usize,

    /// Factor applied to the capacity on every growth event.
    ///
    /// Defaults to 1.3.
    pub growth_factor: f64,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl SetConfig {
    /// Sets the initial capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the growth factor.
    #[must_use]
    pub const fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Returns the growth policy described by this configuration.
    #[must_use]
    pub const fn growth_policy(&self) -> GrowthPolicy {
        GrowthPolicy::new(self.growth_factor)
    }

    /// Checks that the settings describe a usable set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the growth factor is not a
    /// number within `1.0..=MAX_GROWTH_FACTOR`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1.0..=MAX_GROWTH_FACTOR).contains(&self.growth_factor) {
            return Err(ConfigError::invalid(
                "growth_factor",
                format!(
                    "must be between 1.0 and {MAX_GROWTH_FACTOR}, got {}",
                    self.growth_factor
                ),
            ));
        }
        Ok(())
    }

    /// Loads the configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable cannot be parsed or
    /// the resulting configuration fails [`validate`](Self::validate).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use appliance_set::config::SetConfig;
    ///
    /// let config = SetConfig::from_lookup(|key| match key {
    ///     "ARRAY_SET_INITIAL_CAPACITY" => Some("8".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.initial_capacity, 8);
    /// assert!((config.growth_factor - 1.3).abs() < f64::EPSILON);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            initial_capacity: parse_optional(&lookup, INITIAL_CAPACITY_ENV, defaults.initial_capacity)?,
            growth_factor: parse_optional(&lookup, GROWTH_FACTOR_ENV, defaults.growth_factor)?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_optional<F, V>(lookup: &F, key: &str, default: V) -> Result<V, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
    V::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|error: V::Err| ConfigError::invalid(key, error.to_string()))
    })
}
