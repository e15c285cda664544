//! Raw motion detection, without any memory of past triggers.

use crate::button::Button;
use crate::line::InputLine;
use crate::trigger::{MomentaryTrigger, TriggerName};

/// Sensor line combined with a manual trigger.
///
/// Reports motion while the sensor holds its line high, or once for every
/// manual trigger.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawDetector<L, T = Button> {
    line: L,
    trigger: T,
}

impl<L: InputLine> RawDetector<L> {
    /// Build a detector with a button named after the next free trigger name.
    pub fn with_button(line: L) -> Self {
        Self::new(line, Button::new(TriggerName::next()))
    }
}

impl<L: InputLine, T: MomentaryTrigger> RawDetector<L, T> {
    pub fn new(mut line: L, trigger: T) -> Self {
        line.configure_input();
        Self { line, trigger }
    }

    pub fn detect(&mut self) -> bool {
        // Take the trigger even when the line is high so it does not linger.
        let triggered = self.trigger.take_trigger();
        self.line.is_high() || triggered
    }

    pub fn line(&self) -> &L {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn trigger_mut(&mut self) -> &mut T {
        &mut self.trigger
    }
}
