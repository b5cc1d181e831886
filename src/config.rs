//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and UI constants
//! live here so they can be tuned in one place.

// Event loop

/// Capacity of the input event queue. Producers wait when it is full.
pub const EVENT_QUEUE_DEPTH: usize = 8;

/// How long the controller blocks on the event queue before a tick (ms).
pub const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// How long the renderer waits for the state lock before skipping a frame (ms).
pub const RENDER_LOCK_TIMEOUT_MS: u64 = 25;

// Power levels

/// Lowest selectable power level.
pub const MIN_POWER_LEVEL: u8 = 1;

/// Highest selectable power level.
pub const MAX_POWER_LEVEL: u8 = 6;

/// Power level selected at startup.
pub const DEFAULT_POWER_LEVEL: u8 = MAX_POWER_LEVEL;

// Buttons

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press is reported as long (ms).
pub const BUTTON_LONG_PRESS_MS: u64 = 500;

/// Interval between repeat events while a key stays held past a long press (ms).
pub const BUTTON_REPEAT_MS: u64 = 150;

// Display

/// Width of the SSD1306 panel in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Height of the SSD1306 panel in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Title drawn at the top of the screen.
pub const TITLE: &str = "Flashlight";

/// Capacity of the status line buffer ("6 LEDs off" plus headroom).
pub const STATUS_LINE_CAPACITY: usize = 14;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*` pins
// are bound in `main.rs`.  Adjust for your custom PCB.
//
//   LED line A     → P0.03
//   LED line B     → P0.04
//   LED line C     → P0.28
//   LED line D     → P0.29
//   LED line E     → P0.30
//   LED line F     → P0.31
//   LED line G     → P1.01
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button LEFT    → P0.24
//   Button RIGHT   → P0.25
//   Button OK      → P1.08
//   Button BACK    → P1.07
//
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
