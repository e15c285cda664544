//! Hold detected motion for a while and fade in and out of it.
//!
//! Every rising edge of the raw detector opens a latch window. While the
//! window is open the detector reports motion, regardless of what the sensor
//! does in the meantime. On top of that, the window is split into phases
//! driving an 8-bit fade level:
//!
//! ```text
//!   255 |      ____________
//!       |     /            \
//!       |    /              \
//!     0 |___/                \___
//!           ^   ^          ^  ^
//!     trigger   rising     |  latch
//!               end        falling start
//! ```
//!
//! The phase is never stored. It is derived on every call from the time
//! elapsed since the last trigger.

use crate::button::Button;
use crate::config::{Config, Timing};
use crate::line::InputLine;
use crate::log;
use crate::raw::RawDetector;
use crate::time::{self, Millis};
use crate::trigger::MomentaryTrigger;

const FULL: u8 = u8::MAX;

/// Position within the latch window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Rising,
    Plateau,
    Falling,
    Idle,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatchingDetector<L, T = Button> {
    raw: RawDetector<L, T>,
    timing: Timing,
    last_trigger: Millis,
    last_state: bool,
}

impl<L: InputLine, T: MomentaryTrigger> LatchingDetector<L, T> {
    pub fn new(raw: RawDetector<L, T>, config: Config) -> Self {
        Self {
            raw,
            timing: Timing::new(config),
            last_trigger: 0,
            last_state: false,
        }
    }

    /// Poll the raw detector and report whether the latch is open.
    pub fn detect(&mut self, now: Millis) -> bool {
        let state = self.raw.detect();
        if state && !self.last_state {
            log::info!("Motion detected at={=u32}", now);
            self.last_trigger = now;
        }
        self.last_state = state;
        self.is_active(now)
    }

    /// Poll the raw detector and return the current fade level.
    pub fn transition(&mut self, now: Millis) -> u8 {
        self.detect(now);
        self.fade_level(now)
    }

    /// Whether the latch is open at `now`, without polling the sensor.
    #[must_use]
    pub fn is_active(&self, now: Millis) -> bool {
        self.elapsed(now) < self.timing.latch_ms()
    }

    /// Phase of the latch window at `now`, without polling the sensor.
    ///
    /// A ramp of zero length is never reported, the window skips straight
    /// to the following phase.
    #[must_use]
    pub fn phase(&self, now: Millis) -> Phase {
        let elapsed = self.elapsed(now);
        if elapsed < self.timing.rising_ms() {
            Phase::Rising
        } else if elapsed < self.timing.falling_start() {
            Phase::Plateau
        } else if elapsed < self.timing.latch_ms() {
            Phase::Falling
        } else {
            Phase::Idle
        }
    }

    /// Fade level at `now`, without polling the sensor.
    #[must_use]
    pub fn fade_level(&self, now: Millis) -> u8 {
        let elapsed = self.elapsed(now);
        match self.phase(now) {
            Phase::Rising => ramp(elapsed, self.timing.rising_ms()),
            Phase::Plateau => FULL,
            Phase::Falling => {
                let falling_elapsed = elapsed - self.timing.falling_start();
                FULL - ramp(falling_elapsed, self.timing.falling_ms())
            }
            Phase::Idle => 0,
        }
    }

    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Time of the most recent rising edge.
    #[must_use]
    pub fn last_trigger(&self) -> Millis {
        self.last_trigger
    }

    pub fn raw(&self) -> &RawDetector<L, T> {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut RawDetector<L, T> {
        &mut self.raw
    }

    fn elapsed(&self, now: Millis) -> Millis {
        time::elapsed(now, self.last_trigger)
    }
}

// Only called with `position < length`, so `length` is never zero and the
// result stays below `FULL`.
fn ramp(position: Millis, length: Millis) -> u8 {
    (u64::from(position) * u64::from(FULL) / u64::from(length)) as u8
}
