//! GPIO LED flashlight applet.
//!
//! Seven GPIO lines drive the flashlight LEDs; brightness is emulated by
//! asserting more or fewer of them. A six-button pad and an SSD1306 OLED
//! form the menu: LEFT/RIGHT step the level, OK switches the light, BACK
//! leaves the applet.
//!
//! Everything except the nRF52840 bindings (`board`, `ui::buttons`) is
//! hardware-independent and tested on the host.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary (`src/main.rs`, feature `embedded`) is
//! `#![no_std]` / `#![no_main]` and links against this library.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
#[cfg(feature = "embedded")]
pub mod board;
pub mod config;
pub mod error;
pub mod led;
pub mod state;
pub mod ui;

pub use app::{Controller, Redraw};
pub use error::Error;
pub use led::{LedLine, Line, LineSet, PinDriver};
pub use state::{DeviceState, PowerLevel};
