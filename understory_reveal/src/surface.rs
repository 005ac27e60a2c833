// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host side of a reveal transition.

use kurbo::Rect;

use crate::mask::SnapshotMask;

/// A surface that can be snapshotted and overlaid with a masked snapshot.
///
/// The coordinator never renders anything itself. It asks the host for a snapshot when a
/// transition begins, hands the [`SnapshotMask`] back whenever the boundary or anchor
/// changes, and returns the snapshot once the transition is over. Hosts typically keep a
/// layer over the surface, showing the snapshot clipped by [`SnapshotMask::clip_path`].
pub trait RevealSurface {
    /// Host representation of a captured snapshot.
    type Snapshot;

    /// Current bounds of the surface in its own coordinate space.
    ///
    /// Only the size matters; masks are always built from the local origin.
    fn bounds(&self) -> Rect;

    /// Captures the surface as it looks right now.
    fn capture_snapshot(&mut self) -> Self::Snapshot;

    /// Puts a freshly captured snapshot on top of the surface.
    fn present_snapshot(&mut self, mask: &SnapshotMask<Self::Snapshot>);

    /// The mask's anchor or boundary changed.
    fn apply_mask(&mut self, mask: &SnapshotMask<Self::Snapshot>);

    /// Removes the snapshot from the surface for good.
    fn dismiss_snapshot(&mut self, snapshot: Self::Snapshot);

    /// Start routing pointer input on this surface to the coordinator.
    fn install_pan_target(&mut self) {}

    /// Stop routing pointer input to the coordinator.
    fn remove_pan_target(&mut self) {}
}
