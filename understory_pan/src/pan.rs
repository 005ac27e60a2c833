// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan recognizer: a drag sampler plus the standard pan lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! Possible ──► Began ──► Changed* ──► Ended
//!    │           │           │    ├──► Failed      (pessimistic early failure)
//!    │           │           │    └──► Cancelled   (system interruption)
//!    └──► Failed (begin rejected, or pessimistic early failure)
//! ```
//!
//! Every move sample first goes through [`pessimistic_failure`]. Only if the pan
//! survives it do the normal rules apply: the pan begins once it has travelled
//! [`PanConfig::begin_distance`] with an acceptable touch count and the caller's
//! `should_begin` predicate accepts it.
//!
//! The recognizer reports a [`PanSample`] for every phase change that a handler
//! should act on: `Began`, `Changed`, `Ended`, `Cancelled`, and `Failed` when
//! the failure interrupts a pan that had already begun.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_pan::pan::{PanPhase, PanRecognizer, PointerUpdate};
//!
//! let mut pan = PanRecognizer::default();
//! pan.pointer_down(PointerUpdate::new(Point::new(50.0, 50.0), 1, Duration::ZERO));
//!
//! // Too short to begin yet.
//! let sample = pan.pointer_move(
//!     PointerUpdate::new(Point::new(50.0, 54.0), 1, Duration::from_millis(16)),
//!     |_| true,
//! );
//! assert!(sample.is_none());
//!
//! let sample = pan
//!     .pointer_move(
//!         PointerUpdate::new(Point::new(50.0, 80.0), 1, Duration::from_millis(32)),
//!         |_| true,
//!     )
//!     .unwrap();
//! assert_eq!(sample.phase, PanPhase::Began);
//! assert_eq!(sample.translation.y, 30.0);
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::drag::DragSampler;
use crate::policy::pessimistic_failure;

/// Default travel distance before a pan may begin.
pub const DEFAULT_BEGIN_DISTANCE: f64 = 10.0;

/// Lifecycle phase of a [`PanRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PanPhase {
    /// Touches are down but the pan has not been recognized yet.
    #[default]
    Possible,
    /// The pan was just recognized.
    Began,
    /// The pan moved.
    Changed,
    /// All touches lifted after the pan began.
    Ended,
    /// The pan will not be recognized, or stopped being recognized.
    Failed,
    /// The pan was interrupted by the system.
    Cancelled,
}

impl PanPhase {
    /// Returns `true` for `Began` and `Changed`.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }

    /// Returns `true` for `Ended`, `Failed` and `Cancelled`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Failed | Self::Cancelled)
    }
}

/// Recognition parameters for a [`PanRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanConfig {
    /// Minimum number of touches for the pan to begin.
    pub min_touches: usize,
    /// Maximum number of touches for the pan to begin.
    pub max_touches: usize,
    /// Travel distance from the touch-down point before the pan may begin.
    pub begin_distance: f64,
}

impl PanConfig {
    /// Returns `true` if `touch_count` lies within the configured touch range.
    #[must_use]
    pub fn accepts_touch_count(&self, touch_count: usize) -> bool {
        (self.min_touches..=self.max_touches).contains(&touch_count)
    }
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            min_touches: 1,
            max_touches: 1,
            begin_distance: DEFAULT_BEGIN_DISTANCE,
        }
    }
}

/// One raw pointer event as seen by the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerUpdate {
    /// Position of the primary touch in surface coordinates.
    pub position: Point,
    /// Number of touches down after this event.
    pub touch_count: usize,
    /// Event timestamp.
    pub time: Duration,
}

impl PointerUpdate {
    /// Creates a pointer update.
    #[must_use]
    pub fn new(position: impl Into<Point>, touch_count: usize, time: Duration) -> Self {
        Self {
            position: position.into(),
            touch_count,
            time,
        }
    }
}

/// Snapshot of a pan at one point in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSample {
    /// Phase this sample reports.
    pub phase: PanPhase,
    /// Number of touches down.
    pub active_touch_count: usize,
    /// Offset from the drag's (possibly rebased) starting point.
    pub translation: Vec2,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Position of the primary touch.
    pub location: Point,
}

/// Pan recognizer with pessimistic early failure.
#[derive(Clone, Debug, Default)]
pub struct PanRecognizer {
    config: PanConfig,
    phase: PanPhase,
    drag: DragSampler,
    touch_count: usize,
}

impl PanRecognizer {
    /// Creates a recognizer with the given parameters.
    #[must_use]
    pub fn new(config: PanConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Recognition parameters.
    #[must_use]
    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    /// Current translation from the drag's starting point.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.drag.translation()
    }

    /// Rebase the translation accumulator; subsequent samples are measured from here.
    pub fn set_translation(&mut self, translation: Vec2) {
        self.drag.set_translation(translation);
    }

    /// Most recent velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.drag.velocity()
    }

    /// Touch down.
    ///
    /// Starts a new gesture unless a pan is already active, in which case only the touch count
    /// is updated. Never produces a sample.
    pub fn pointer_down(&mut self, update: PointerUpdate) -> Option<PanSample> {
        self.touch_count = update.touch_count;
        if self.phase.is_active() {
            return None;
        }
        self.phase = PanPhase::Possible;
        self.drag.start(update.position, update.time);
        None
    }

    /// Touch move.
    ///
    /// `should_begin` is consulted once, with a `Began` candidate sample, when the pan is about
    /// to be recognized. Returning `false` fails the pan.
    pub fn pointer_move(
        &mut self,
        update: PointerUpdate,
        should_begin: impl FnOnce(&PanSample) -> bool,
    ) -> Option<PanSample> {
        if self.phase.is_terminal() || !self.drag.is_dragging() {
            return None;
        }
        self.touch_count = update.touch_count;
        self.drag.update(update.position, update.time);

        let translation = self.drag.translation();
        if pessimistic_failure(self.touch_count, self.config.min_touches, translation) {
            let interrupted = self.phase.is_active();
            self.phase = PanPhase::Failed;
            log::trace!(
                "pan failed early: {} touches, {:.1} travelled",
                self.touch_count,
                translation.hypot()
            );
            return interrupted.then(|| self.sample());
        }

        match self.phase {
            PanPhase::Possible => {
                if !self.config.accepts_touch_count(self.touch_count)
                    || translation.hypot() < self.config.begin_distance
                {
                    return None;
                }
                let candidate = self.sample_with(PanPhase::Began);
                if should_begin(&candidate) {
                    self.phase = PanPhase::Began;
                    Some(candidate)
                } else {
                    log::trace!("pan rejected at begin");
                    self.phase = PanPhase::Failed;
                    None
                }
            }
            PanPhase::Began | PanPhase::Changed => {
                self.phase = PanPhase::Changed;
                Some(self.sample())
            }
            PanPhase::Ended | PanPhase::Failed | PanPhase::Cancelled => None,
        }
    }

    /// Touch lift.
    ///
    /// Ends an active pan once the last touch lifts. The lift itself is the final sample, so a
    /// finger that rested before lifting releases with no velocity. A pan that never began
    /// fails without reporting a sample.
    pub fn pointer_up(&mut self, update: PointerUpdate) -> Option<PanSample> {
        self.touch_count = update.touch_count;
        if update.touch_count > 0 {
            return None;
        }
        let sample = match self.phase {
            PanPhase::Began | PanPhase::Changed => {
                self.drag.update(update.position, update.time);
                self.phase = PanPhase::Ended;
                Some(self.sample())
            }
            PanPhase::Possible => {
                self.phase = PanPhase::Failed;
                None
            }
            PanPhase::Ended | PanPhase::Failed | PanPhase::Cancelled => None,
        };
        self.drag.end();
        sample
    }

    /// System interruption.
    pub fn pointer_cancel(&mut self) -> Option<PanSample> {
        let sample = match self.phase {
            PanPhase::Began | PanPhase::Changed => {
                self.phase = PanPhase::Cancelled;
                Some(self.sample())
            }
            PanPhase::Possible => {
                self.phase = PanPhase::Failed;
                None
            }
            PanPhase::Ended | PanPhase::Failed | PanPhase::Cancelled => None,
        };
        self.drag.end();
        self.touch_count = 0;
        sample
    }

    /// Forget any gesture in progress and return to `Possible`.
    pub fn reset(&mut self) {
        self.phase = PanPhase::Possible;
        self.drag.end();
        self.touch_count = 0;
    }

    fn sample(&self) -> PanSample {
        self.sample_with(self.phase)
    }

    fn sample_with(&self, phase: PanPhase) -> PanSample {
        PanSample {
            phase,
            active_touch_count: self.touch_count,
            translation: self.drag.translation(),
            velocity: self.drag.velocity(),
            location: self.drag.location().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, touches: usize, millis: u64) -> PointerUpdate {
        PointerUpdate::new((x, y), touches, Duration::from_millis(millis))
    }

    #[test]
    fn short_moves_stay_possible() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        assert!(pan.pointer_move(at(3.0, 4.0, 1, 10), |_| true).is_none());
        assert_eq!(pan.phase(), PanPhase::Possible);
    }

    #[test]
    fn begins_then_changes_then_ends() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));

        let began = pan.pointer_move(at(0.0, 20.0, 1, 16), |_| true).unwrap();
        assert_eq!(began.phase, PanPhase::Began);
        assert_eq!(began.velocity, Vec2::new(0.0, 1250.0));

        let changed = pan.pointer_move(at(0.0, 40.0, 1, 32), |_| true).unwrap();
        assert_eq!(changed.phase, PanPhase::Changed);
        assert_eq!(changed.translation, Vec2::new(0.0, 40.0));
        assert_eq!(changed.location, Point::new(0.0, 40.0));

        let ended = pan.pointer_up(at(0.0, 40.0, 0, 40)).unwrap();
        assert_eq!(ended.phase, PanPhase::Ended);
        assert_eq!(ended.translation, Vec2::new(0.0, 40.0));
        assert_eq!(pan.phase(), PanPhase::Ended);
    }

    #[test]
    fn resting_before_lift_releases_without_velocity() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        pan.pointer_move(at(0.0, 150.0, 1, 16), |_| true).unwrap();
        let flick = pan.pointer_move(at(0.0, 300.0, 1, 32), |_| true).unwrap();
        assert_eq!(flick.velocity, Vec2::new(0.0, 9375.0));

        let ended = pan.pointer_up(at(0.0, 300.0, 0, 2032)).unwrap();
        assert_eq!(ended.phase, PanPhase::Ended);
        assert_eq!(ended.velocity, Vec2::ZERO);
        assert_eq!(ended.translation, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn lift_position_is_the_final_sample() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        pan.pointer_move(at(0.0, 40.0, 1, 16), |_| true).unwrap();

        let ended = pan.pointer_up(at(0.0, 60.0, 0, 32)).unwrap();
        assert_eq!(ended.translation, Vec2::new(0.0, 60.0));
        assert_eq!(ended.location, Point::new(0.0, 60.0));
        assert_eq!(ended.velocity, Vec2::new(0.0, 1250.0));
    }

    #[test]
    fn rejected_begin_fails() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        let mut asked = 0;
        let sample = pan.pointer_move(at(30.0, 0.0, 1, 16), |s| {
            asked += 1;
            assert_eq!(s.phase, PanPhase::Began);
            false
        });
        assert!(sample.is_none());
        assert_eq!(asked, 1);
        assert_eq!(pan.phase(), PanPhase::Failed);

        // Later moves are ignored until a fresh touch-down.
        assert!(pan.pointer_move(at(60.0, 0.0, 1, 32), |_| true).is_none());
        pan.pointer_down(at(0.0, 0.0, 1, 100));
        assert_eq!(pan.phase(), PanPhase::Possible);
    }

    #[test]
    fn too_few_touches_fail_early() {
        let mut pan = PanRecognizer::new(PanConfig {
            min_touches: 2,
            max_touches: 2,
            ..PanConfig::default()
        });
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        assert!(pan.pointer_move(at(0.0, 5.0, 1, 16), |_| true).is_none());
        assert_eq!(pan.phase(), PanPhase::Failed);
    }

    #[test]
    fn too_few_touches_past_threshold_fall_through() {
        let mut pan = PanRecognizer::new(PanConfig {
            min_touches: 2,
            max_touches: 2,
            ..PanConfig::default()
        });
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        // The first sample jumps straight past the threshold.
        assert!(pan.pointer_move(at(0.0, 15.0, 1, 16), |_| true).is_none());
        assert_eq!(pan.phase(), PanPhase::Possible);
    }

    #[test]
    fn early_failure_after_begin_reports_failed_sample() {
        let mut pan = PanRecognizer::new(PanConfig {
            min_touches: 2,
            max_touches: 2,
            ..PanConfig::default()
        });
        pan.pointer_down(at(0.0, 0.0, 2, 0));
        let began = pan.pointer_move(at(0.0, 12.0, 2, 16), |_| true).unwrap();
        assert_eq!(began.phase, PanPhase::Began);

        // The drag is rebased, then a finger lifts while still close to the new origin.
        pan.set_translation(Vec2::ZERO);
        let failed = pan.pointer_move(at(0.0, 14.0, 1, 32), |_| true).unwrap();
        assert_eq!(failed.phase, PanPhase::Failed);
        assert_eq!(failed.active_touch_count, 1);
        assert_eq!(pan.phase(), PanPhase::Failed);
    }

    #[test]
    fn touch_count_outside_range_does_not_begin() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 2, 0));
        assert!(pan.pointer_move(at(0.0, 40.0, 2, 16), |_| true).is_none());
        assert_eq!(pan.phase(), PanPhase::Possible);
    }

    #[test]
    fn lift_before_begin_fails_quietly() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        pan.pointer_move(at(2.0, 0.0, 1, 16), |_| true);
        assert!(pan.pointer_up(at(2.0, 0.0, 0, 32)).is_none());
        assert_eq!(pan.phase(), PanPhase::Failed);
    }

    #[test]
    fn partial_lift_keeps_tracking() {
        let mut pan = PanRecognizer::new(PanConfig {
            max_touches: 2,
            ..PanConfig::default()
        });
        pan.pointer_down(at(0.0, 0.0, 2, 0));
        pan.pointer_move(at(0.0, 20.0, 2, 16), |_| true).unwrap();
        assert!(pan.pointer_up(at(0.0, 20.0, 1, 20)).is_none());
        assert!(pan.phase().is_active());
    }

    #[test]
    fn cancel_reports_cancelled_when_active() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        pan.pointer_move(at(20.0, 0.0, 1, 16), |_| true).unwrap();

        let cancelled = pan.pointer_cancel().unwrap();
        assert_eq!(cancelled.phase, PanPhase::Cancelled);
        assert_eq!(pan.phase(), PanPhase::Cancelled);
        assert!(pan.pointer_cancel().is_none());
    }

    #[test]
    fn set_translation_rebases_samples() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        pan.pointer_move(at(0.0, -30.0, 1, 16), |_| true).unwrap();
        pan.set_translation(Vec2::ZERO);
        let sample = pan.pointer_move(at(0.0, -10.0, 1, 32), |_| true).unwrap();
        assert_eq!(sample.translation, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn reset_returns_to_possible() {
        let mut pan = PanRecognizer::default();
        pan.pointer_down(at(0.0, 0.0, 1, 0));
        pan.pointer_move(at(20.0, 0.0, 1, 16), |_| true).unwrap();
        pan.reset();
        assert_eq!(pan.phase(), PanPhase::Possible);
        assert_eq!(pan.translation(), Vec2::ZERO);
    }
}
