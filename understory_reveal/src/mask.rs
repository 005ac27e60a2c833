// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snapshot of the old appearance and the mask clipping it.

use core::time::Duration;

use kurbo::{Affine, BezPath, Point, Size};

use crate::boundary::BoundaryPathBuilder;
use crate::direction::Direction;
use crate::spring::{SpringAnimation, SpringSpec};

/// A captured snapshot together with the boundary that decides which part stays visible.
///
/// The boundary path lives in mask-local coordinates over the surface size. The anchor
/// translates the mask relative to the surface: at the origin the snapshot covers the
/// surface wherever the path allows, and at the direction's commit anchor the mask has
/// moved entirely off the surface.
///
/// Anchors move in two ways. [`set_anchor`](Self::set_anchor) jumps immediately and is used
/// while tracking a drag. [`animate_anchor_to`](Self::animate_anchor_to) starts a spring
/// that the coordinator advances every tick.
#[derive(Debug)]
pub struct SnapshotMask<S> {
    snapshot: S,
    size: Size,
    anchor: Point,
    path: BezPath,
    animation: Option<AnchorAnimation>,
}

#[derive(Clone, Debug)]
struct AnchorAnimation {
    direction: Direction,
    spring: SpringAnimation,
}

impl<S> SnapshotMask<S> {
    /// Wraps `snapshot` with a mask covering the whole surface.
    pub fn new(snapshot: S, size: Size) -> Self {
        Self {
            snapshot,
            size,
            anchor: Point::ZERO,
            path: BoundaryPathBuilder::new(size, 0.0).full_cover(),
            animation: None,
        }
    }

    /// The captured snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    /// Size the mask was built for.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Offset of the mask relative to the surface.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Boundary in mask-local coordinates.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Boundary in surface coordinates, i.e. [`path`](Self::path) moved by the anchor.
    #[must_use]
    pub fn clip_path(&self) -> BezPath {
        Affine::translate(self.anchor.to_vec2()) * &self.path
    }

    /// Moves the mask immediately.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Replaces the boundary.
    pub fn set_path(&mut self, path: BezPath) {
        self.path = path;
    }

    /// Starts a spring moving the anchor along `direction`'s axis to `target`.
    ///
    /// `velocity` is along the axis, in units per second. The anchor is kept inside the
    /// direction's anchor range for the whole animation. Any previous animation is replaced.
    pub fn animate_anchor_to(
        &mut self,
        direction: Direction,
        target: Point,
        velocity: f64,
        spec: SpringSpec,
    ) {
        let from = direction.along(self.anchor.to_vec2());
        let target = direction.along(target.to_vec2());
        let spring = SpringAnimation::new(
            spec,
            from,
            target,
            velocity,
            direction.anchor_range(self.size),
        );
        self.anchor = direction.point_on_axis(spring.position());
        self.animation = Some(AnchorAnimation { direction, spring });
    }

    /// Returns `true` while an anchor animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Velocity of the running anchor animation along its axis, or zero when idle.
    #[must_use]
    pub fn animation_velocity(&self) -> f64 {
        self.animation
            .as_ref()
            .map_or(0.0, |animation| animation.spring.velocity())
    }

    /// Advances the running animation and returns `true` once it has finished.
    ///
    /// Returns `true` immediately when nothing is animating.
    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return true;
        };
        let finished = animation.spring.advance(dt);
        self.anchor = animation
            .direction
            .point_on_axis(animation.spring.position());
        if finished {
            self.animation = None;
        }
        finished
    }

    /// Gives the snapshot back, dropping the mask.
    pub fn into_snapshot(self) -> S {
        self.snapshot
    }
}
