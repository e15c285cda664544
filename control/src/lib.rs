//! Latching motion detection for PIR sensors.
//!
//! A PIR sensor raises its line while it sees movement. This crate turns that
//! raw signal into something a lighting effect can use directly:
//!
//! ```text
//!   [ InputLine ] --+
//!                   +--> [ RawDetector ] --> [ LatchingDetector ] --> active, fade level
//!   [ Button ] -----+
//! ```
//!
//! A [`RawDetector`] reports motion while the line is high, or once per click
//! of a button serving as a manual trigger. A [`LatchingDetector`] keeps the
//! motion latched for a configured window after every new trigger and derives
//! an 8-bit fade level rising into the window and falling out of it.
//!
//! Nothing here reads a clock. The control loop passes the current time in
//! milliseconds to every call, see [`time`].
//!
//! Enable the `defmt` feature to get diagnostics and `defmt::Format` on all
//! public types.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

mod log;

pub mod button;
pub mod config;
pub mod latching;
pub mod line;
pub mod raw;
pub mod time;
pub mod trigger;

pub use button::Button;
pub use config::{Config, Timing};
pub use latching::{LatchingDetector, Phase};
pub use line::InputLine;
pub use raw::RawDetector;
pub use time::Millis;
pub use trigger::{MomentaryTrigger, TriggerName};
