// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reveal --heading-base-level=0

//! Understory Reveal: gesture-driven transitions between two appearances of a surface.
//!
//! A user drags across a surface in a chosen [`Direction`]. As soon as the drag is
//! recognized, the surface switches to its other [`Appearance`] underneath a snapshot of
//! the old one. The snapshot is clipped by a mask whose leading edge follows the finger as
//! a "jelly" curve that bulges with the drag velocity. Releasing past the middle of the
//! surface springs the mask off the far edge; releasing earlier springs it back and
//! restores the old appearance.
//!
//! The crate is headless. It is built from:
//!
//! - [`TransitionCoordinator`]: the state machine tying everything together.
//! - [`RevealSurface`]: implemented by the host to capture, present and clip snapshots.
//! - [`Styleable`]: implemented by whatever switches appearance.
//! - [`boundary`]: the geometry of the mask's edge.
//! - [`spring`]: the damped spring used for completion animations.
//! - [`understory_pan`]: pan recognition with pessimistic early failure.
//!
//! ## Driving a transition
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_reveal::{
//!     Appearance, AppearanceState, Configuration, Direction, PointerUpdate, RevealSurface,
//!     SnapshotMask, Styleable, TransitionCoordinator, TransitionOutcome, TransitionState,
//! };
//!
//! struct Window;
//!
//! impl RevealSurface for Window {
//!     type Snapshot = ();
//!     fn bounds(&self) -> Rect {
//!         Size::new(400.0, 800.0).to_rect()
//!     }
//!     fn capture_snapshot(&mut self) -> Self::Snapshot {}
//!     fn present_snapshot(&mut self, _: &SnapshotMask<()>) {}
//!     fn apply_mask(&mut self, _: &SnapshotMask<()>) {}
//!     fn dismiss_snapshot(&mut self, _: ()) {}
//! }
//!
//! struct Theme(Appearance);
//!
//! impl Styleable for Theme {
//!     fn toggle_active_appearance(&mut self, appearance: Appearance) {
//!         self.0 = appearance;
//!     }
//! }
//!
//! let mut reveal = TransitionCoordinator::new(
//!     Window,
//!     Theme(Appearance::Light),
//!     AppearanceState::new(Appearance::Light),
//!     Configuration::default(),
//! );
//! reveal.set_direction(Direction::Down);
//!
//! let frame = Duration::from_millis(16);
//! reveal.pointer_down(PointerUpdate::new((200.0, 0.0), 1, Duration::ZERO));
//! reveal.pointer_move(PointerUpdate::new((200.0, 600.0), 1, frame));
//! assert_eq!(reveal.state(), TransitionState::Tracking);
//! reveal.pointer_up(PointerUpdate::new((200.0, 600.0), 0, frame * 2));
//!
//! let mut outcome = None;
//! while outcome.is_none() {
//!     outcome = reveal.tick(frame);
//! }
//! assert_eq!(outcome, Some(TransitionOutcome::Committed));
//! assert_eq!(reveal.styleable().0, Appearance::Dark);
//! assert_eq!(reveal.state(), TransitionState::Idle);
//! ```
//!
//! ## Automated transitions
//!
//! [`TransitionCoordinator::perform_automated_transition`] runs the same reveal without
//! input, along a fixed hill-shaped edge or a seeded random curve (see
//! [`Configuration::with_curve_seed`]). It always commits.
//!
//! ## Logging
//!
//! Lifecycle changes are reported through the [`log`] facade at `debug` level and mask
//! updates at `trace` level. The crate never installs a logger.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod appearance;
pub mod boundary;
pub mod config;
pub mod coordinator;
pub mod direction;
pub mod mask;
pub mod spring;
pub mod surface;

pub use appearance::{Appearance, AppearanceState, Styleable};
pub use boundary::BoundaryPathBuilder;
pub use config::{ConfigError, Configuration};
pub use coordinator::{TransitionCoordinator, TransitionOutcome, TransitionState};
pub use direction::{Axis, Direction};
pub use mask::SnapshotMask;
pub use spring::SpringSpec;
pub use surface::RevealSurface;
pub use understory_pan;
pub use understory_pan::pan::{PanPhase, PanSample, PointerUpdate};
