//! Manage button's state.

use crate::trigger::{MomentaryTrigger, TriggerName};

// Number of consecutive agreeing samples needed to flip the state.
const SETTLE_SAMPLES: u8 = 3;

/// A debounced button usable as a momentary trigger source.
///
/// Feed it raw samples through `update`. Contact bounce is integrated away:
/// the button is pressed only after the integrator fills up and released
/// only after it drains completely. Every press is latched as a pending
/// click until it is taken through [`MomentaryTrigger::take_trigger`].
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    name: TriggerName,
    integrator: u8,
    pub pressed: bool,
    pub clicked: bool,
    pending: bool,
}

impl Button {
    #[must_use]
    pub fn new(name: TriggerName) -> Self {
        Self {
            name,
            integrator: 0,
            pressed: false,
            clicked: false,
            pending: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &TriggerName {
        &self.name
    }

    pub fn update(&mut self, down: bool) {
        let was_pressed = self.pressed;

        self.integrator = if down {
            (self.integrator + 1).min(SETTLE_SAMPLES)
        } else {
            self.integrator.saturating_sub(1)
        };
        if self.integrator == SETTLE_SAMPLES {
            self.pressed = true;
        } else if self.integrator == 0 {
            self.pressed = false;
        }

        self.clicked = !was_pressed && self.pressed;
        if self.clicked {
            self.pending = true;
        }
    }
}

impl MomentaryTrigger for Button {
    fn take_trigger(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }
}
