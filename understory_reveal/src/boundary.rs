// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary geometry: the closed region of the old-appearance snapshot that stays visible.
//!
//! Every boundary is built in mask-local coordinates over the surface size. The
//! trailing edge (the one the reveal moves away from) and the two sides are
//! straight; the leading edge, perpendicular to the drag axis, is a single
//! quadratic curve. Its control point sits at
//! `(position across the axis, leading edge + offset along the axis)`:
//!
//! - While tracking a drag, the position across the axis is the touch location and the
//!   offset is [`curve_offset`] of the velocity along the axis, so the edge bulges in the
//!   direction of motion, harder for faster drags.
//! - For automated transitions, either a symmetric [`HILL_DEPTH`] hill centered on the
//!   surface, or a random control point within bounds.
//!
//! ```
//! use kurbo::{PathEl, Point, Size, Vec2};
//! use understory_reveal::boundary::BoundaryPathBuilder;
//! use understory_reveal::Direction;
//!
//! let builder = BoundaryPathBuilder::new(Size::new(400.0, 800.0), 1.0);
//! let path = builder.interactive(Direction::Down, Vec2::new(0.0, 900.0), Point::new(120.0, 300.0));
//! assert_eq!(
//!     path.elements()[1],
//!     PathEl::QuadTo(Point::new(120.0, 20.0), Point::new(400.0, 0.0))
//! );
//! ```

use kurbo::{BezPath, Point, Size, Vec2};
use rand::Rng;

use crate::direction::Direction;

/// Damping per unit of jelly factor: `damping = JELLY_DAMPING_SCALE * jelly_factor`.
///
/// Damping grows with the factor. Formulations that divide the scale by the factor instead
/// (`45 / jelly_factor`) deform more as the factor grows; both agree at a factor of `1`.
pub const JELLY_DAMPING_SCALE: f64 = 45.0;

/// Depth of the automated "hill" curve, measured from the leading edge.
pub const HILL_DEPTH: f64 = 100.0;

/// Velocity divisor for a jelly factor. Zero when the factor disables deformation.
///
/// Larger factors damp harder, so the same velocity bends the leading edge less.
#[must_use]
pub fn damping(jelly_factor: f64) -> f64 {
    if jelly_factor > 0.0 {
        JELLY_DAMPING_SCALE * jelly_factor
    } else {
        0.0
    }
}

/// Offset of the leading-edge control point for a velocity along the drag axis.
///
/// Zero whenever [`damping`] is zero.
#[must_use]
pub fn curve_offset(jelly_factor: f64, velocity_along_axis: f64) -> f64 {
    let damping = damping(jelly_factor);
    if damping > 0.0 {
        velocity_along_axis / damping
    } else {
        0.0
    }
}

/// Builds boundary paths for one surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryPathBuilder {
    size: Size,
    jelly_factor: f64,
}

impl BoundaryPathBuilder {
    /// Builder for a surface of `size` with the given jelly factor.
    #[must_use]
    pub fn new(size: Size, jelly_factor: f64) -> Self {
        Self { size, jelly_factor }
    }

    /// Surface size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole surface: the snapshot covers everything.
    #[must_use]
    pub fn full_cover(&self) -> BezPath {
        let Size { width, height } = self.size;
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((width, 0.0));
        path.line_to((width, height));
        path.line_to((0.0, height));
        path.close_path();
        path
    }

    /// Boundary following a drag: the curve peaks under the touch and bulges with velocity.
    #[must_use]
    pub fn interactive(&self, direction: Direction, velocity: Vec2, location: Point) -> BezPath {
        let offset = curve_offset(self.jelly_factor, direction.along(velocity));
        self.with_control(direction, direction.across(location), offset)
    }

    /// Symmetric hill centered on the surface, [`HILL_DEPTH`] deep in the reveal direction.
    #[must_use]
    pub fn hill(&self, direction: Direction) -> BezPath {
        let center = direction.cross_extent(self.size) / 2.0;
        self.with_control(direction, center, direction.sign() * HILL_DEPTH)
    }

    /// Curve with a random control point.
    ///
    /// The control point lies somewhere across the whole leading edge, at most [`HILL_DEPTH`]
    /// away from it on either side.
    pub fn random<R: Rng>(&self, direction: Direction, rng: &mut R) -> BezPath {
        let cross = direction.cross_extent(self.size);
        let across = if cross > 0.0 {
            rng.random_range(0.0..cross)
        } else {
            0.0
        };
        let offset = rng.random_range(-HILL_DEPTH..=HILL_DEPTH);
        self.with_control(direction, across, offset)
    }

    /// Boundary whose leading-edge control point is at `across` on the perpendicular axis and
    /// `offset` away from the leading edge along the drag axis.
    #[must_use]
    pub fn with_control(&self, direction: Direction, across: f64, offset: f64) -> BezPath {
        let Size { width, height } = self.size;
        let mut path = BezPath::new();
        match direction {
            Direction::Down => {
                path.move_to((0.0, 0.0));
                path.quad_to((across, offset), (width, 0.0));
                path.line_to((width, height));
                path.line_to((0.0, height));
            }
            Direction::Up => {
                path.move_to((0.0, height));
                path.quad_to((across, height + offset), (width, height));
                path.line_to((width, 0.0));
                path.line_to((0.0, 0.0));
            }
            Direction::Right => {
                path.move_to((0.0, height));
                path.quad_to((offset, across), (0.0, 0.0));
                path.line_to((width, 0.0));
                path.line_to((width, height));
            }
            Direction::Left => {
                path.move_to((width, height));
                path.quad_to((width + offset, across), (width, 0.0));
                path.line_to((0.0, 0.0));
                path.line_to((0.0, height));
            }
        }
        path.close_path();
        path
    }
}
