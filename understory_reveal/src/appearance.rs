// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearances and the capability a host implements to switch between them.

use core::fmt;

/// One of the two visual configurations a surface alternates between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Appearance {
    /// The other appearance.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light style",
            Self::Dark => "dark style",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The host's current appearance.
///
/// Owned by whoever drives the transition and only changed through a toggle, which always
/// goes hand in hand with a [`Styleable::toggle_active_appearance`] notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AppearanceState {
    current: Appearance,
}

impl AppearanceState {
    /// Starts out in `initial`.
    #[must_use]
    pub const fn new(initial: Appearance) -> Self {
        Self { current: initial }
    }

    /// Appearance currently applied.
    #[must_use]
    pub const fn current(&self) -> Appearance {
        self.current
    }

    pub(crate) fn toggle(&mut self) -> Appearance {
        self.current = self.current.toggled();
        self.current
    }
}

/// Anything that renders differently per [`Appearance`] and takes part in reveal transitions.
///
/// The coordinator only ever talks to participants through this trait.
pub trait Styleable {
    /// Switch everything this participant owns over to `appearance`.
    fn toggle_active_appearance(&mut self, appearance: Appearance);

    /// A transition is about to capture the surface.
    fn transition_will_begin(&mut self) {}

    /// A transition finished, either way. The surface shows a single appearance again.
    fn transition_did_end(&mut self) {}
}

impl<T: Styleable + ?Sized> Styleable for &mut T {
    fn toggle_active_appearance(&mut self, appearance: Appearance) {
        (**self).toggle_active_appearance(appearance);
    }

    fn transition_will_begin(&mut self) {
        (**self).transition_will_begin();
    }

    fn transition_did_end(&mut self) {
        (**self).transition_did_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        let mut state = AppearanceState::new(Appearance::Dark);
        assert_eq!(state.toggle(), Appearance::Light);
        assert_eq!(state.toggle(), Appearance::Dark);
        assert_eq!(state.current(), Appearance::Dark);
    }

    #[test]
    fn names() {
        assert_eq!(Appearance::Light.name(), "light style");
        assert_eq!(Appearance::Dark.name(), "dark style");
        assert_eq!(Appearance::default(), Appearance::Light);
    }
}
