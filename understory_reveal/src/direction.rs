// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal direction and the compass bucketing used to gate drags.

use kurbo::{Point, Size, Vec2};

/// Axis a [`Direction`] moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// Direction a reveal sweeps in.
///
/// Coordinates follow screen conventions: x grows to the right, y grows downwards.
/// `Down` therefore sweeps from the top edge towards the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Sweep from the bottom edge upwards.
    Up,
    /// Sweep from the top edge downwards.
    #[default]
    Down,
    /// Sweep from the right edge to the left.
    Left,
    /// Sweep from the left edge to the right.
    Right,
}

impl Direction {
    /// Buckets an angle in degrees into a compass quadrant.
    ///
    /// The angle is normalized into `[0, 360)` and split at 45, 135, 225 and 315 degrees, each
    /// boundary belonging to the bucket that starts there:
    ///
    /// | Angle | Direction |
    /// |---|---|
    /// | `[45, 135)` | `Down` |
    /// | `[135, 225)` | `Left` |
    /// | `[225, 315)` | `Up` |
    /// | otherwise | `Right` |
    ///
    /// ```
    /// use understory_reveal::Direction;
    ///
    /// assert_eq!(Direction::from_angle(90.0), Direction::Down);
    /// assert_eq!(Direction::from_angle(135.0), Direction::Left);
    /// assert_eq!(Direction::from_angle(-90.0), Direction::Up);
    /// assert_eq!(Direction::from_angle(314.9), Direction::Up);
    /// assert_eq!(Direction::from_angle(315.0), Direction::Right);
    /// ```
    #[must_use]
    pub fn from_angle(degrees: f64) -> Self {
        let wrapped = degrees % 360.0;
        let angle = if wrapped < 0.0 {
            wrapped + 360.0
        } else {
            wrapped
        };
        if (45.0..135.0).contains(&angle) {
            Self::Down
        } else if (135.0..225.0).contains(&angle) {
            Self::Left
        } else if (225.0..315.0).contains(&angle) {
            Self::Up
        } else {
            Self::Right
        }
    }

    /// Compass quadrant of a drag translation, using `atan2(dy, dx)`.
    #[must_use]
    pub fn from_translation(translation: Vec2) -> Self {
        Self::from_angle(translation.atan2().to_degrees())
    }

    /// Axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// `1.0` if the direction moves towards increasing coordinates, `-1.0` otherwise.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Down | Self::Right => 1.0,
            Self::Up | Self::Left => -1.0,
        }
    }

    /// Component of `v` along the drag axis.
    #[must_use]
    pub fn along(self, v: Vec2) -> f64 {
        match self.axis() {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Coordinate of `p` on the axis perpendicular to the drag.
    #[must_use]
    pub fn across(self, p: Point) -> f64 {
        match self.axis() {
            Axis::Horizontal => p.y,
            Axis::Vertical => p.x,
        }
    }

    /// Length of `size` along the drag axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self.axis() {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Length of `size` across the drag axis.
    #[must_use]
    pub fn cross_extent(self, size: Size) -> f64 {
        match self.axis() {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Point at `value` along the drag axis and zero on the other axis.
    #[must_use]
    pub fn point_on_axis(self, value: f64) -> Point {
        match self.axis() {
            Axis::Horizontal => Point::new(value, 0.0),
            Axis::Vertical => Point::new(0.0, value),
        }
    }

    /// Vector of length `value` along the drag axis.
    #[must_use]
    pub fn vec_on_axis(self, value: f64) -> Vec2 {
        self.point_on_axis(value).to_vec2()
    }

    /// Range of mask anchor values along the axis, as `(min, max)`.
    ///
    /// The anchor starts at zero and can travel at most one surface extent in the reveal
    /// direction; it never crosses the starting edge.
    #[must_use]
    pub fn anchor_range(self, size: Size) -> (f64, f64) {
        let extent = self.extent(size);
        if self.sign() > 0.0 {
            (0.0, extent)
        } else {
            (-extent, 0.0)
        }
    }

    /// Mask anchor at which the surface is fully revealed.
    #[must_use]
    pub fn commit_anchor(self, size: Size) -> Point {
        self.point_on_axis(self.sign() * self.extent(size))
    }

    /// Whether `translation` is strictly past the midpoint of the surface in this direction.
    ///
    /// A translation exactly at the midpoint has not passed it.
    #[must_use]
    pub fn has_passed_midpoint(self, translation: Vec2, size: Size) -> bool {
        self.sign() * self.along(translation) > self.extent(size) / 2.0
    }
}
