// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan --heading-base-level=0

//! Understory Pan: pan gesture recognition for UI.
//!
//! This crate provides a small, headless pan recognizer built by composition
//! rather than by subclassing a platform recognizer:
//!
//! - [`drag`]: a drag sampler that turns timestamped positions into a translation
//!   (with a resettable accumulator) and a velocity.
//! - [`policy`]: pure policy functions, most notably the pessimistic early-failure
//!   filter and the arbitration rule against competing pans.
//! - [`pan`]: the pan lifecycle (`Possible → Began → Changed* → Ended/Failed/Cancelled`)
//!   driven by raw pointer updates.
//!
//! ## Pessimistic early failure
//!
//! A pan configured with `min_touches = 2` that sees a single finger fails as
//! soon as possible, as long as the finger has moved less than
//! [`policy::PESSIMISTIC_FAILURE_DISTANCE`]. Once the drag is longer than that it
//! is considered deliberate and falls through to the normal recognition rules.
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_pan::pan::{PanConfig, PanPhase, PanRecognizer, PointerUpdate};
//!
//! let mut pan = PanRecognizer::new(PanConfig {
//!     min_touches: 2,
//!     max_touches: 2,
//!     ..PanConfig::default()
//! });
//!
//! pan.pointer_down(PointerUpdate::new(Point::new(0.0, 0.0), 1, Duration::ZERO));
//! pan.pointer_move(
//!     PointerUpdate::new(Point::new(0.0, 5.0), 1, Duration::from_millis(16)),
//!     |_| true,
//! );
//! assert_eq!(pan.phase(), PanPhase::Failed);
//! ```
//!
//! ## Gating the beginning of a pan
//!
//! [`pan::PanRecognizer::pointer_move`] takes a `should_begin` predicate that sees
//! the candidate `Began` sample. Higher layers use it to accept only drags in a
//! given direction, or only while they are idle. A rejected pan fails, which lets
//! competing recognizers (see [`policy::requires_failure_of`]) take the touch.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
pub mod pan;
pub mod policy;
