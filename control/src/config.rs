//! Timing of the latch window.

use crate::log;
use crate::time::Millis;

/// Requested timing of the latch, as supplied by the caller.
///
/// The window starts with every new trigger and lasts `latch_ms`. Within it,
/// the fade level rises for `rising_ms`, holds at full, and falls during the
/// final `falling_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub latch_ms: Millis,
    pub rising_ms: Millis,
    pub falling_ms: Millis,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latch_ms: 5000,
            rising_ms: 1000,
            falling_ms: 1000,
        }
    }
}

/// Validated timing. Immutable once constructed.
///
/// Both ramps must fit into the window. If they do not, each of them is
/// shortened to half of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    latch_ms: Millis,
    rising_ms: Millis,
    falling_ms: Millis,
    clamped: bool,
}

impl Timing {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let Config {
            latch_ms,
            rising_ms,
            falling_ms,
        } = config;

        if u64::from(rising_ms) + u64::from(falling_ms) > u64::from(latch_ms) {
            log::warning!(
                "Rising ({=u32}) and falling ({=u32}) time must fit into latch ({=u32}), using half of latch for both",
                rising_ms,
                falling_ms,
                latch_ms
            );
            let half = latch_ms / 2;
            return Self {
                latch_ms,
                rising_ms: half,
                falling_ms: half,
                clamped: true,
            };
        }

        Self {
            latch_ms,
            rising_ms,
            falling_ms,
            clamped: false,
        }
    }

    #[must_use]
    pub fn latch_ms(&self) -> Millis {
        self.latch_ms
    }

    #[must_use]
    pub fn rising_ms(&self) -> Millis {
        self.rising_ms
    }

    #[must_use]
    pub fn falling_ms(&self) -> Millis {
        self.falling_ms
    }

    /// Offset within the window where the falling ramp begins.
    #[must_use]
    pub fn falling_start(&self) -> Millis {
        self.latch_ms - self.falling_ms
    }

    /// Whether the requested ramps had to be shortened.
    #[must_use]
    pub fn clamped(&self) -> bool {
        self.clamped
    }
}

impl From<Config> for Timing {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}
