// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sampler: cumulative translation and release velocity from timestamped positions.
//!
//! ## Usage
//!
//! 1) Start sampling with [`DragSampler::start`] at the touch-down position.
//! 2) Feed each move with [`DragSampler::update`]; it returns the delta since the last sample.
//! 3) Read [`DragSampler::translation`] and [`DragSampler::velocity`] at any point.
//! 4) Call [`DragSampler::set_translation`] to rebase the translation accumulator without
//!    touching the pointer position.
//! 5) End with [`DragSampler::end`].
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use understory_pan::drag::DragSampler;
//!
//! let mut drag = DragSampler::default();
//! drag.start(Point::new(10.0, 20.0), Duration::ZERO);
//!
//! let delta = drag.update(Point::new(10.0, 60.0), Duration::from_micros(62_500)).unwrap();
//! assert_eq!(delta, Vec2::new(0.0, 40.0));
//! assert_eq!(drag.translation(), Vec2::new(0.0, 40.0));
//! // 40 units in a sixteenth of a second.
//! assert_eq!(drag.velocity(), Vec2::new(0.0, 640.0));
//!
//! // Rebase: the finger stays put but the translation restarts from zero.
//! drag.set_translation(Vec2::ZERO);
//! assert_eq!(drag.translation(), Vec2::ZERO);
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};

/// Gap between samples after which the pointer counts as having rested.
///
/// A sample arriving after a longer gap resets the velocity to zero instead of averaging the
/// movement over the pause.
pub const VELOCITY_IDLE_TIMEOUT: Duration = Duration::from_millis(100);

/// Tracks translation and velocity for a single drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragSampler {
    /// Origin of the translation accumulator.
    ///
    /// This starts at the touch-down position and moves when the translation is rebased.
    origin: Option<Point>,
    /// Last recorded pointer position.
    last_pos: Option<Point>,
    /// Timestamp of the last recorded position.
    last_time: Option<Duration>,
    /// Velocity between the last two samples with distinct timestamps, in units per second.
    velocity: Vec2,
}

impl DragSampler {
    /// Start sampling a new drag from the given position.
    pub fn start(&mut self, pos: Point, time: Duration) {
        self.origin = Some(pos);
        self.last_pos = Some(pos);
        self.last_time = Some(time);
        self.velocity = Vec2::ZERO;
    }

    /// Record a new position, returning the movement delta since the last sample.
    ///
    /// Velocity is only refreshed when time has advanced; samples sharing a timestamp keep the
    /// previous velocity. A sample more than [`VELOCITY_IDLE_TIMEOUT`] after the previous one
    /// zeroes it.
    pub fn update(&mut self, pos: Point, time: Duration) -> Option<Vec2> {
        self.origin?;
        let last_pos = self.last_pos.replace(pos)?;
        let delta = pos - last_pos;
        if let Some(last_time) = self.last_time {
            let elapsed = time.saturating_sub(last_time);
            if elapsed > VELOCITY_IDLE_TIMEOUT {
                self.velocity = Vec2::ZERO;
            } else if !elapsed.is_zero() {
                self.velocity = delta / elapsed.as_secs_f64();
            }
        }
        self.last_time = Some(time);
        Some(delta)
    }

    /// Offset of the last position from the translation origin.
    ///
    /// Returns [`Vec2::ZERO`] when no drag is being sampled.
    pub fn translation(&self) -> Vec2 {
        match (self.origin, self.last_pos) {
            (Some(origin), Some(last)) => last - origin,
            _ => Vec2::ZERO,
        }
    }

    /// Rebase the translation accumulator so that [`DragSampler::translation`] reads `translation`.
    ///
    /// Does nothing when no drag is being sampled.
    pub fn set_translation(&mut self, translation: Vec2) {
        if let (Some(_), Some(last)) = (self.origin, self.last_pos) {
            self.origin = Some(last - translation);
        }
    }

    /// Most recent velocity in units per second.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Last recorded pointer position.
    pub fn location(&self) -> Option<Point> {
        self.last_pos
    }

    /// End the current drag and reset all state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is being sampled.
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Multiples of 1/16 s, exact in `f64`.
    fn ticks(n: u64) -> Duration {
        Duration::from_micros(62_500 * n)
    }

    #[test]
    fn new_sampler_is_idle() {
        let drag = DragSampler::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.translation(), Vec2::ZERO);
        assert_eq!(drag.velocity(), Vec2::ZERO);
        assert!(drag.location().is_none());
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = DragSampler::default();
        assert_eq!(drag.update(Point::new(5.0, 5.0), ms(10)), None);
        assert!(drag.location().is_none());
    }

    #[test]
    fn translation_accumulates_across_updates() {
        let mut drag = DragSampler::default();
        drag.start(Point::new(100.0, 100.0), ms(0));

        assert_eq!(
            drag.update(Point::new(103.0, 104.0), ms(250)),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(
            drag.update(Point::new(90.0, 80.0), ms(500)),
            Some(Vec2::new(-13.0, -24.0))
        );
        assert_eq!(drag.translation(), Vec2::new(-10.0, -20.0));
        assert_eq!(drag.location(), Some(Point::new(90.0, 80.0)));
    }

    #[test]
    fn velocity_uses_elapsed_time() {
        let mut drag = DragSampler::default();
        drag.start(Point::ZERO, ms(0));
        drag.update(Point::new(20.0, 0.0), ticks(1));
        assert_eq!(drag.velocity(), Vec2::new(320.0, 0.0));

        drag.update(Point::new(20.0, -50.0), ticks(2));
        assert_eq!(drag.velocity(), Vec2::new(0.0, -800.0));
    }

    #[test]
    fn sample_after_a_rest_zeroes_velocity() {
        let mut drag = DragSampler::default();
        drag.start(Point::ZERO, ms(0));
        drag.update(Point::new(0.0, 150.0), ms(16));
        drag.update(Point::new(0.0, 300.0), ms(32));
        assert_eq!(drag.velocity(), Vec2::new(0.0, 9375.0));

        // Even a small nudge after a long pause is not a flick.
        drag.update(Point::new(0.0, 304.0), ms(2032));
        assert_eq!(drag.velocity(), Vec2::ZERO);
        assert_eq!(drag.translation(), Vec2::new(0.0, 304.0));
    }

    #[test]
    fn same_timestamp_keeps_previous_velocity() {
        let mut drag = DragSampler::default();
        drag.start(Point::ZERO, ms(0));
        drag.update(Point::new(0.0, 25.0), ticks(1));
        drag.update(Point::new(0.0, 90.0), ticks(1));
        assert_eq!(drag.velocity(), Vec2::new(0.0, 400.0));
        assert_eq!(drag.translation(), Vec2::new(0.0, 90.0));
    }

    #[test]
    fn set_translation_rebases_without_moving_pointer() {
        let mut drag = DragSampler::default();
        drag.start(Point::new(10.0, 10.0), ms(0));
        drag.update(Point::new(10.0, 70.0), ms(250));

        drag.set_translation(Vec2::ZERO);
        assert_eq!(drag.translation(), Vec2::ZERO);
        assert_eq!(drag.location(), Some(Point::new(10.0, 70.0)));

        drag.update(Point::new(10.0, 75.0), ms(500));
        assert_eq!(drag.translation(), Vec2::new(0.0, 5.0));
    }

    #[test]
    fn set_translation_when_idle_is_safe() {
        let mut drag = DragSampler::default();
        drag.set_translation(Vec2::new(4.0, 4.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.translation(), Vec2::ZERO);
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragSampler::default();
        drag.start(Point::new(1.0, 2.0), ms(0));
        drag.update(Point::new(5.0, 2.0), ms(250));

        drag.end();

        assert!(!drag.is_dragging());
        assert_eq!(drag.velocity(), Vec2::ZERO);
        assert_eq!(drag.translation(), Vec2::ZERO);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragSampler::default();
        drag.start(Point::ZERO, ms(0));
        drag.update(Point::new(10.0, 10.0), ms(250));

        drag.start(Point::new(50.0, 60.0), ms(1000));
        assert_eq!(drag.translation(), Vec2::ZERO);
        assert_eq!(drag.velocity(), Vec2::ZERO);

        drag.update(Point::new(55.0, 65.0), ms(1250));
        assert_eq!(drag.translation(), Vec2::new(5.0, 5.0));
    }
}
