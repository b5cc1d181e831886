//! Device state shared between the controller and the renderer.

use crate::config::{DEFAULT_POWER_LEVEL, MAX_POWER_LEVEL, MIN_POWER_LEVEL};

/// Brightness level, always within `MIN_POWER_LEVEL..=MAX_POWER_LEVEL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerLevel(u8);

impl PowerLevel {
    pub const MIN: PowerLevel = PowerLevel(MIN_POWER_LEVEL);
    pub const MAX: PowerLevel = PowerLevel(MAX_POWER_LEVEL);

    /// Clamp any integer into the valid range.
    pub const fn new(level: u8) -> Self {
        if level < MIN_POWER_LEVEL {
            PowerLevel(MIN_POWER_LEVEL)
        } else if level > MAX_POWER_LEVEL {
            PowerLevel(MAX_POWER_LEVEL)
        } else {
            PowerLevel(level)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// One level brighter, saturating at the top.
    pub const fn increased(self) -> Self {
        PowerLevel::new(self.0.saturating_add(1))
    }

    /// One level dimmer, saturating at the bottom.
    pub const fn decreased(self) -> Self {
        PowerLevel::new(self.0.saturating_sub(1))
    }
}

impl Default for PowerLevel {
    fn default() -> Self {
        PowerLevel::new(DEFAULT_POWER_LEVEL)
    }
}

/// Everything the UI shows and the controller mutates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    pub power_level: PowerLevel,
    pub is_on: bool,
}

impl DeviceState {
    /// Startup state: default level, on/off taken from the pin probe.
    pub fn probed(is_on: bool) -> Self {
        Self {
            power_level: PowerLevel::default(),
            is_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_brightest_and_off() {
        let state = DeviceState::default();
        assert_eq!(state.power_level.get(), 6);
        assert!(!state.is_on);
        assert!(DeviceState::probed(true).is_on);
    }

    #[test]
    fn new_clamps() {
        assert_eq!(PowerLevel::new(0), PowerLevel::MIN);
        assert_eq!(PowerLevel::new(3).get(), 3);
        assert_eq!(PowerLevel::new(9), PowerLevel::MAX);
    }

    #[test]
    fn stepping_saturates() {
        assert_eq!(PowerLevel::MAX.increased(), PowerLevel::MAX);
        assert_eq!(PowerLevel::MIN.decreased(), PowerLevel::MIN);
        assert_eq!(PowerLevel::new(3).increased().get(), 4);
        assert_eq!(PowerLevel::new(3).decreased().get(), 2);
    }
}
