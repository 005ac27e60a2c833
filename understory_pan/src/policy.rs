// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Failure and arbitration policy for pan recognition.
//!
//! [`pessimistic_failure`] is a pure filter over a single move sample. A pan that is being
//! dragged with fewer than the required number of touches fails as soon as possible, instead
//! of waiting for lift-off, as long as it has not yet travelled
//! [`PESSIMISTIC_FAILURE_DISTANCE`] from its starting point. This keeps an incidental,
//! barely-moved touch from starting an expensive full-surface interaction.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_pan::policy::pessimistic_failure;
//!
//! // One finger where two are required, only 5 units travelled: fail now.
//! assert!(pessimistic_failure(1, 2, Vec2::new(3.0, 4.0)));
//! // Same finger count, but the drag is already 15 units long: leave it to the normal rules.
//! assert!(!pessimistic_failure(1, 2, Vec2::new(9.0, 12.0)));
//! ```

use kurbo::Vec2;

/// Distance from the starting point below which an under-touched drag fails immediately.
pub const PESSIMISTIC_FAILURE_DISTANCE: f64 = 10.0;

/// Returns `true` when a move sample should fail the pan right away.
///
/// That is the case when there are fewer active touches than `min_touches` and the straight-line
/// length of `translation` is still below [`PESSIMISTIC_FAILURE_DISTANCE`].
#[must_use]
pub fn pessimistic_failure(active_touches: usize, min_touches: usize, translation: Vec2) -> bool {
    active_touches < min_touches && translation.hypot() < PESSIMISTIC_FAILURE_DISTANCE
}

/// Broad category of a competing gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Single or multi tap.
    Tap,
    /// Any drag or pan, including the one driving a scroll view.
    Pan,
    /// Two-finger pinch.
    Pinch,
    /// Two-finger rotation.
    Rotation,
    /// Press and hold.
    LongPress,
    /// Anything else.
    Other,
}

/// Whether a competing recognizer of kind `other` must wait for a pan to fail before it may begin.
///
/// Other pans (for example, a scroll view's) are held back so they cannot steal a drag that the
/// pan would accept. Everything else recognizes independently.
#[must_use]
pub fn requires_failure_of(other: GestureKind) -> bool {
    matches!(other, GestureKind::Pan)
}
