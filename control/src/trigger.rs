//! Secondary, momentary source of triggers.

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU32, Ordering};

use heapless::String;

/// Source of one-shot trigger events, such as a clicked button.
pub trait MomentaryTrigger {
    /// Return whether a trigger arrived since the last call, clearing it.
    ///
    /// Each physical event must be reported at most once.
    fn take_trigger(&mut self) -> bool;
}

const BASE_NAME: &str = "PIR";
const NUMBERED_PREFIX: &str = "Pir";

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Diagnostic name of a trigger source.
///
/// The first instance is called plainly, every following one carries its
/// sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerName(String<16>);

impl TriggerName {
    #[must_use]
    pub fn from_id(id: u32) -> Self {
        let mut name = String::new();
        // "Pir 4294967295" is the longest possible name and fits.
        if id == 0 {
            let _ = name.push_str(BASE_NAME);
        } else {
            let _ = write!(name, "{NUMBERED_PREFIX} {id}");
        }
        Self(name)
    }

    /// Allocate the name of the next instance from a process-wide counter.
    #[must_use]
    pub fn next() -> Self {
        Self::from_id(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TriggerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
