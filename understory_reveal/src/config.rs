// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a [`TransitionCoordinator`](crate::TransitionCoordinator).

use core::fmt;

use crate::spring::SpringSpec;

/// Default jelly factor.
pub const DEFAULT_JELLY_FACTOR: f64 = 1.0;

/// Default seed for the random automated curve.
pub const DEFAULT_CURVE_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Error returned when a [`Configuration`] would be invalid.
#[derive(Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The jelly factor was negative, infinite or NaN.
    InvalidJellyFactor(f64),
    /// A spring parameter was not finite and strictly positive.
    InvalidSpring(SpringSpec),
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJellyFactor(value) => write!(f, "InvalidJellyFactor({value})"),
            Self::InvalidSpring(spec) => write!(f, "InvalidSpring({spec:?})"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJellyFactor(value) => {
                write!(f, "jelly factor must be finite and >= 0, got {value}")
            }
            Self::InvalidSpring(spec) => write!(
                f,
                "spring parameters must be finite and > 0, got damping ratio {} and stiffness {}",
                spec.damping_ratio, spec.stiffness
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Transition configuration. Immutable once a coordinator has been built with it.
///
/// ```
/// use understory_reveal::Configuration;
///
/// let config = Configuration::new(2.0)?.with_curve_seed(7);
/// assert_eq!(config.jelly_factor(), 2.0);
/// assert!(Configuration::new(-1.0).is_err());
/// # Ok::<(), understory_reveal::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    jelly_factor: f64,
    spring: SpringSpec,
    curve_seed: u64,
}

impl Configuration {
    /// Creates a configuration with the given jelly factor and default everything else.
    ///
    /// Larger factors flatten the leading edge for the same drag velocity. `0` disables
    /// the deformation entirely.
    pub fn new(jelly_factor: f64) -> Result<Self, ConfigError> {
        if !jelly_factor.is_finite() || jelly_factor < 0.0 {
            return Err(ConfigError::InvalidJellyFactor(jelly_factor));
        }
        Ok(Self {
            jelly_factor,
            ..Self::default()
        })
    }

    /// Replaces the spring that drives completion animations.
    pub fn with_spring(mut self, spring: SpringSpec) -> Result<Self, ConfigError> {
        if !spring.is_valid() {
            return Err(ConfigError::InvalidSpring(spring));
        }
        self.spring = spring;
        Ok(self)
    }

    /// Replaces the seed of the random automated curve.
    #[must_use]
    pub fn with_curve_seed(mut self, seed: u64) -> Self {
        self.curve_seed = seed;
        self
    }

    /// Leading-edge deformation factor.
    #[must_use]
    pub fn jelly_factor(&self) -> f64 {
        self.jelly_factor
    }

    /// Spring driving completion animations.
    #[must_use]
    pub fn spring(&self) -> SpringSpec {
        self.spring
    }

    /// Seed of the random automated curve.
    #[must_use]
    pub fn curve_seed(&self) -> u64 {
        self.curve_seed
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            jelly_factor: DEFAULT_JELLY_FACTOR,
            spring: SpringSpec::default(),
            curve_seed: DEFAULT_CURVE_SEED,
        }
    }
}
