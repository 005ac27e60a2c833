// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition coordinator: gesture in, masked snapshot out.
//!
//! ## Lifecycle
//!
//! ```text
//!            begin accepted          end / failed
//!   Idle ────────────────▶ Tracking ─────────────▶ Transitioning
//!     ▲                      │  ▲ move                  │
//!     │      cancelled       │  └──┘                    │ tick finishes
//!     ├──────────────────────┘                          │
//!     └─────────────────────────────────────────────────┘
//! ```
//!
//! Beginning captures a snapshot of the surface in its current appearance, lays it over
//! the surface under a full-surface mask and immediately toggles the real appearance
//! underneath. From then on, only the mask moves: it follows the drag while tracking and
//! is sprung to the far edge (commit) or back to the origin (cancel) afterwards. A cancel
//! toggles the appearance back once the snapshot covers the surface again.

use core::fmt;
use core::time::Duration;

use kurbo::{Point, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use understory_pan::pan::{PanConfig, PanPhase, PanRecognizer, PanSample, PointerUpdate};
use understory_pan::policy::{self, GestureKind};

use crate::appearance::{Appearance, AppearanceState, Styleable};
use crate::boundary::BoundaryPathBuilder;
use crate::config::Configuration;
use crate::direction::Direction;
use crate::mask::SnapshotMask;
use crate::surface::RevealSurface;

/// Where a coordinator is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TransitionState {
    /// No transition; the next accepted begin starts one.
    #[default]
    Idle,
    /// Following a drag.
    Tracking,
    /// Animating towards commit or cancel.
    Transitioning,
}

/// How a finished transition ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionOutcome {
    /// The new appearance was fully revealed.
    Committed,
    /// The old appearance was restored.
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
struct Completion {
    outcome: TransitionOutcome,
    /// Touch location to keep the relaxing curve under; `None` keeps the path fixed.
    relax_at: Option<Point>,
}

/// Drives reveal transitions on one surface.
///
/// The coordinator owns the surface handle, the participant being restyled, the current
/// appearance and a single-touch [`PanRecognizer`]. Hosts feed it pointer events (or
/// [`PanSample`]s from their own recognizer) and call [`tick`](Self::tick) once per frame
/// while a completion animation runs.
pub struct TransitionCoordinator<S: RevealSurface, T: Styleable> {
    surface: S,
    styleable: T,
    configuration: Configuration,
    appearance: AppearanceState,
    direction: Direction,
    /// Direction of the transition in flight, fixed at begin.
    active_direction: Direction,
    recognizer: PanRecognizer,
    state: TransitionState,
    mask: Option<SnapshotMask<S::Snapshot>>,
    completion: Option<Completion>,
    rng: SmallRng,
}

impl<S: RevealSurface, T: Styleable> fmt::Debug for TransitionCoordinator<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionCoordinator")
            .field("configuration", &self.configuration)
            .field("appearance", &self.appearance)
            .field("direction", &self.direction)
            .field("state", &self.state)
            .field("recognizer", &self.recognizer)
            .field("has_snapshot", &self.mask.is_some())
            .field("completion", &self.completion)
            .finish_non_exhaustive()
    }
}

impl<S: RevealSurface, T: Styleable> TransitionCoordinator<S, T> {
    /// Creates an idle coordinator and installs its pan target on `surface`.
    pub fn new(
        mut surface: S,
        styleable: T,
        appearance: AppearanceState,
        configuration: Configuration,
    ) -> Self {
        surface.install_pan_target();
        Self {
            surface,
            styleable,
            configuration,
            appearance,
            direction: Direction::default(),
            active_direction: Direction::default(),
            recognizer: PanRecognizer::new(PanConfig {
                min_touches: 1,
                max_touches: 1,
                ..PanConfig::default()
            }),
            state: TransitionState::Idle,
            mask: None,
            completion: None,
            rng: SmallRng::seed_from_u64(configuration.curve_seed()),
        }
    }

    /// The host surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The participant being restyled.
    #[must_use]
    pub fn styleable(&self) -> &T {
        &self.styleable
    }

    /// Configuration this coordinator was built with.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Appearance currently applied to the participant.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance.current()
    }

    /// Direction new transitions sweep in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Changes the direction. A transition in flight keeps its own direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// The snapshot mask of the transition in flight.
    #[must_use]
    pub fn mask(&self) -> Option<&SnapshotMask<S::Snapshot>> {
        self.mask.as_ref()
    }

    /// The built-in pan recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &PanRecognizer {
        &self.recognizer
    }

    /// Whether a recognizer of kind `other` has to wait for this coordinator's pan to fail.
    ///
    /// Competing pans (scroll views and the like) must not steal the drag.
    #[must_use]
    pub fn requires_failure_of(&self, other: GestureKind) -> bool {
        policy::requires_failure_of(other)
    }

    /// Whether a pan producing `sample` may begin a transition right now.
    #[must_use]
    pub fn should_begin(&self, sample: &PanSample) -> bool {
        accepts_begin(self.state, self.direction, sample)
    }

    /// Touch down on the surface.
    pub fn pointer_down(&mut self, update: PointerUpdate) {
        if let Some(sample) = self.recognizer.pointer_down(update) {
            self.handle_pan(sample);
        }
    }

    /// Touch moved.
    pub fn pointer_move(&mut self, update: PointerUpdate) {
        let (state, direction) = (self.state, self.direction);
        let sample = self
            .recognizer
            .pointer_move(update, |sample| accepts_begin(state, direction, sample));
        if let Some(sample) = sample {
            self.handle_pan(sample);
        }
    }

    /// Touch lifted.
    pub fn pointer_up(&mut self, update: PointerUpdate) {
        if let Some(sample) = self.recognizer.pointer_up(update) {
            self.handle_pan(sample);
        }
    }

    /// The system took the touch away.
    pub fn pointer_cancel(&mut self) {
        if let Some(sample) = self.recognizer.pointer_cancel() {
            self.handle_pan(sample);
        }
    }

    /// Routes a pan sample to the matching transition step.
    ///
    /// A failed pan is treated like an ended one so that a half-done reveal always settles.
    pub fn handle_pan(&mut self, sample: PanSample) {
        match sample.phase {
            PanPhase::Began => {
                self.begin_transition(sample);
            }
            PanPhase::Changed => self.update_transition(sample),
            PanPhase::Ended | PanPhase::Failed => self.end_transition(sample),
            PanPhase::Cancelled => self.cancel_transition_immediate(),
            PanPhase::Possible => {}
        }
    }

    /// Starts an interactive transition. Returns `false` (and does nothing) unless idle.
    pub fn begin_transition(&mut self, sample: PanSample) -> bool {
        if self.state != TransitionState::Idle {
            log::debug!("begin ignored while {:?}", self.state);
            return false;
        }
        self.present_snapshot();
        self.adjust_mask(&sample);
        self.state = TransitionState::Tracking;
        true
    }

    /// Follows the drag: moves the mask and reshapes its leading edge.
    pub fn update_transition(&mut self, sample: PanSample) {
        if self.state == TransitionState::Tracking {
            self.adjust_mask(&sample);
        }
    }

    /// Releases the drag, committing if it went past the middle of the surface.
    pub fn end_transition(&mut self, sample: PanSample) {
        if self.state != TransitionState::Tracking {
            return;
        }
        let direction = self.active_direction;
        let Some(size) = self.mask.as_ref().map(SnapshotMask::size) else {
            self.restore_idle();
            return;
        };
        let (outcome, target) = if direction.has_passed_midpoint(sample.translation, size) {
            (
                TransitionOutcome::Committed,
                direction.commit_anchor(size),
            )
        } else {
            (TransitionOutcome::Cancelled, Point::ZERO)
        };
        log::debug!(
            "released at {:?}, {:?} with velocity {:.1}",
            sample.translation,
            outcome,
            direction.along(sample.velocity)
        );
        self.start_completion(
            outcome,
            target,
            direction.along(sample.velocity),
            Some(sample.location),
        );
    }

    /// Abandons a tracked transition without animating.
    ///
    /// Reverts the appearance, dismisses the snapshot and reports the end right away. Running
    /// completion animations are not affected.
    pub fn cancel_transition_immediate(&mut self) {
        if self.state != TransitionState::Tracking {
            return;
        }
        log::debug!("transition cancelled without animation");
        self.toggle_appearance();
        self.cleanup_after_transition();
        self.state = TransitionState::Idle;
        self.styleable.transition_did_end();
    }

    /// Runs a complete transition without user input, always committing.
    ///
    /// The leading edge is a fixed hill, or a random curve when `random_curve` is set.
    /// Returns `false` (and does nothing) unless idle.
    pub fn perform_automated_transition(&mut self, random_curve: bool) -> bool {
        if self.state != TransitionState::Idle {
            log::debug!("automated transition ignored while {:?}", self.state);
            return false;
        }
        self.present_snapshot();
        let direction = self.active_direction;
        let jelly_factor = self.configuration.jelly_factor();
        let Some(mask) = self.mask.as_mut() else {
            self.restore_idle();
            return false;
        };
        let builder = BoundaryPathBuilder::new(mask.size(), jelly_factor);
        let path = if random_curve {
            builder.random(direction, &mut self.rng)
        } else {
            builder.hill(direction)
        };
        mask.set_path(path);
        let target = direction.commit_anchor(mask.size());
        self.surface.apply_mask(mask);
        self.start_completion(TransitionOutcome::Committed, target, 0.0, None);
        true
    }

    /// Advances a running completion animation by `dt`.
    ///
    /// Returns the outcome on the tick that finishes the transition, `None` otherwise.
    pub fn tick(&mut self, dt: Duration) -> Option<TransitionOutcome> {
        if self.state != TransitionState::Transitioning {
            return None;
        }
        let Some(completion) = self.completion else {
            self.restore_idle();
            return None;
        };
        let direction = self.active_direction;
        let jelly_factor = self.configuration.jelly_factor();
        let Some(mask) = self.mask.as_mut() else {
            self.restore_idle();
            return None;
        };

        let finished = mask.advance(dt);
        if let Some(location) = completion.relax_at {
            let velocity = direction.vec_on_axis(mask.animation_velocity());
            let path = BoundaryPathBuilder::new(mask.size(), jelly_factor).interactive(
                direction,
                velocity,
                location,
            );
            mask.set_path(path);
        }
        self.surface.apply_mask(mask);

        if !finished {
            return None;
        }
        if completion.outcome == TransitionOutcome::Cancelled {
            self.toggle_appearance();
        }
        self.cleanup_after_transition();
        self.state = TransitionState::Idle;
        log::debug!("transition finished: {:?}", completion.outcome);
        self.styleable.transition_did_end();
        Some(completion.outcome)
    }

    fn present_snapshot(&mut self) {
        self.active_direction = self.direction;
        self.styleable.transition_will_begin();
        let size = self.surface.bounds().size();
        let mask = SnapshotMask::new(self.surface.capture_snapshot(), size);
        self.surface.present_snapshot(&mask);
        self.mask = Some(mask);
        let appearance = self.toggle_appearance();
        log::debug!(
            "transition {:?} began over {:?}, revealing {}",
            self.active_direction,
            size,
            appearance
        );
    }

    fn adjust_mask(&mut self, sample: &PanSample) {
        let direction = self.active_direction;
        let jelly_factor = self.configuration.jelly_factor();
        let Some(mask) = self.mask.as_mut() else {
            return;
        };
        let size = mask.size();
        let along = direction.along(sample.translation);
        let anchor = if direction.sign() * along < 0.0 {
            // Dragged back over the starting edge; restart the drag from there.
            self.recognizer.set_translation(Vec2::ZERO);
            0.0
        } else {
            let (min, max) = direction.anchor_range(size);
            along.clamp(min, max)
        };
        mask.set_anchor(direction.point_on_axis(anchor));
        mask.set_path(BoundaryPathBuilder::new(size, jelly_factor).interactive(
            direction,
            sample.velocity,
            sample.location,
        ));
        log::trace!("mask anchor {:?}", mask.anchor());
        self.surface.apply_mask(mask);
    }

    fn start_completion(
        &mut self,
        outcome: TransitionOutcome,
        target: Point,
        velocity: f64,
        relax_at: Option<Point>,
    ) {
        debug_assert!(
            self.mask.is_some(),
            "completion started without a snapshot mask"
        );
        let Some(mask) = self.mask.as_mut() else {
            self.restore_idle();
            return;
        };
        mask.animate_anchor_to(
            self.active_direction,
            target,
            velocity,
            self.configuration.spring(),
        );
        self.surface.apply_mask(mask);
        self.completion = Some(Completion { outcome, relax_at });
        self.state = TransitionState::Transitioning;
    }

    fn toggle_appearance(&mut self) -> Appearance {
        let appearance = self.appearance.toggle();
        self.styleable.toggle_active_appearance(appearance);
        appearance
    }

    /// Releases the snapshot and mask. Safe to call any number of times.
    fn cleanup_after_transition(&mut self) {
        self.completion = None;
        if let Some(mask) = self.mask.take() {
            self.surface.dismiss_snapshot(mask.into_snapshot());
        }
    }

    fn restore_idle(&mut self) {
        log::debug!("no snapshot mask while {:?}, returning to idle", self.state);
        self.cleanup_after_transition();
        self.state = TransitionState::Idle;
    }
}

impl<S: RevealSurface, T: Styleable> Drop for TransitionCoordinator<S, T> {
    fn drop(&mut self) {
        let interrupted = self.state != TransitionState::Idle;
        self.cleanup_after_transition();
        self.surface.remove_pan_target();
        if interrupted {
            log::debug!("dropped while {:?}", self.state);
            self.state = TransitionState::Idle;
            self.styleable.transition_did_end();
        }
    }
}

fn accepts_begin(state: TransitionState, direction: Direction, sample: &PanSample) -> bool {
    state == TransitionState::Idle && Direction::from_translation(sample.translation) == direction
}
