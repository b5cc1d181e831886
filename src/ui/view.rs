//! What the screen shows, independent of how it is drawn.

use core::fmt::Write;

use heapless::String;

use crate::config::{STATUS_LINE_CAPACITY, TITLE};
use crate::state::DeviceState;

/// One screenful of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub title: &'static str,
    /// Left button hint (decrease).
    pub left: &'static str,
    /// Right button hint (increase).
    pub right: &'static str,
    /// Center button hint, "Enable" or "Disable".
    pub center: &'static str,
    /// "<N> LEDs on" / "<N> LEDs off".
    pub status: String<STATUS_LINE_CAPACITY>,
}

impl Frame {
    pub fn from_state(state: &DeviceState) -> Self {
        let (center, suffix) = if state.is_on {
            ("Disable", "on")
        } else {
            ("Enable", "off")
        };

        let mut status = String::new();
        // "6 LEDs off" is 10 bytes; the buffer cannot overflow.
        let _ = write!(status, "{} LEDs {}", state.power_level.get(), suffix);

        Self {
            title: TITLE,
            left: "-",
            right: "+",
            center,
            status,
        }
    }
}
