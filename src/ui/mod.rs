//! User interface subsystem - OLED display + physical buttons.
//!
//! The controller reacts to key presses and the renderer draws the
//! current state on the SSD1306 OLED.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 6 tactile switches with debouncing (UP, DOWN, LEFT, RIGHT, OK, BACK)

#[cfg(feature = "embedded")]
pub mod buttons;
pub mod display;
pub mod input_logic;
pub mod view;

/// Physical keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// Phase of a key event.
///
/// The button driver emits `Press` on the debounced falling edge, `Long`
/// once the key has been held past the long-press threshold, `Repeat`
/// periodically after that, then `Short` (if released before `Long`) and
/// `Release`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKind {
    Press,
    Release,
    Short,
    Long,
    Repeat,
}

/// A key event as produced by the button driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub key: InputKey,
    pub kind: InputKind,
}

impl InputEvent {
    pub const fn new(key: InputKey, kind: InputKind) -> Self {
        Self { key, kind }
    }

    pub const fn press(key: InputKey) -> Self {
        Self::new(key, InputKind::Press)
    }
}

/// Events carried by the controller's queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppEvent {
    Key(InputEvent),
}

impl From<InputEvent> for AppEvent {
    fn from(e: InputEvent) -> Self {
        AppEvent::Key(e)
    }
}

/// Whether the controller loop keeps running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flow {
    Continue,
    Exit,
}
