// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring used to settle the mask anchor after a drag is released.
//!
//! The spring is a damped harmonic oscillator integrated with semi-implicit Euler
//! steps of at most [`MAX_STEP`]. It is seeded with the release velocity, so a fast
//! flick carries its momentum into the animation. The animated value is confined to a
//! range; hitting either end stops the motion towards that end.
//!
//! ```
//! use core::time::Duration;
//! use understory_reveal::spring::{SpringAnimation, SpringSpec};
//!
//! let mut spring = SpringAnimation::new(SpringSpec::default(), 0.0, 300.0, 0.0, (0.0, 300.0));
//! let mut frames = 0;
//! while !spring.advance(Duration::from_millis(16)) {
//!     frames += 1;
//!     assert!(spring.position() <= 300.0);
//! }
//! assert!(frames > 1);
//! assert_eq!(spring.position(), 300.0);
//! ```

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Longest integration step, in seconds.
pub const MAX_STEP: f64 = 1.0 / 120.0;

/// Spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. `1.0` is critically damped, below bounces, above creeps.
    pub damping_ratio: f64,
    /// Stiffness. Higher values settle faster.
    pub stiffness: f64,
    /// Speed below which the spring may come to rest, in units per second.
    pub velocity_threshold: f64,
    /// Distance from the target within which the spring may come to rest.
    pub position_threshold: f64,
}

impl SpringSpec {
    /// Critically damped spring with the given stiffness.
    #[must_use]
    pub const fn critically_damped(stiffness: f64) -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness,
            velocity_threshold: 1.0,
            position_threshold: 0.5,
        }
    }

    /// Returns `true` if every parameter is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [
            self.damping_ratio,
            self.stiffness,
            self.velocity_threshold,
            self.position_threshold,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::critically_damped(300.0)
    }
}

/// A running one-dimensional spring animation.
#[derive(Clone, Debug)]
pub struct SpringAnimation {
    spec: SpringSpec,
    position: f64,
    velocity: f64,
    target: f64,
    bounds: (f64, f64),
    finished: bool,
}

impl SpringAnimation {
    /// Starts a spring at `from` moving with `velocity` towards `target`.
    ///
    /// The position is confined to `bounds` (normalized so that `min <= max`), which must
    /// contain `target`.
    #[must_use]
    pub fn new(spec: SpringSpec, from: f64, target: f64, velocity: f64, bounds: (f64, f64)) -> Self {
        let bounds = if bounds.0 <= bounds.1 {
            bounds
        } else {
            (bounds.1, bounds.0)
        };
        debug_assert!(
            (bounds.0..=bounds.1).contains(&target),
            "spring target must lie within its bounds"
        );
        let mut spring = Self {
            spec,
            position: from.clamp(bounds.0, bounds.1),
            velocity,
            target,
            bounds,
            finished: false,
        };
        spring.finished = spring.is_settled();
        if spring.finished {
            spring.snap_to_target();
        }
        spring
    }

    /// Current value.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Value the spring settles at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` once the spring has come to rest at its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the simulation by `dt` and returns whether the spring has come to rest.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.finished {
            return true;
        }
        let damping = 2.0 * self.spec.damping_ratio * self.spec.stiffness.sqrt();
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            let displacement = self.position - self.target;
            let force = -self.spec.stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.position += self.velocity * step;

            let (min, max) = self.bounds;
            if self.position < min {
                self.position = min;
                self.velocity = self.velocity.max(0.0);
            } else if self.position > max {
                self.position = max;
                self.velocity = self.velocity.min(0.0);
            }

            remaining -= step;
            if self.is_settled() {
                self.snap_to_target();
                self.finished = true;
                break;
            }
        }
        self.finished
    }

    fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < self.spec.position_threshold
            && self.velocity.abs() < self.spec.velocity_threshold
    }

    fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }
}
