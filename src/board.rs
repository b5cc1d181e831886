//! nRF52840 bindings for the hardware-independent pieces.
//!
//! - GPIO `Flex` pins act as the flashlight's LED lines.
//! - The buffered SSD1306 driver acts as the render `Screen`.

use embassy_nrf::gpio::{Flex, OutputDrive, Pull};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::led::LedLine;
use crate::ui::display::Screen;

impl LedLine for Flex<'static> {
    fn configure_push_pull(&mut self) {
        self.set_low();
        self.set_as_output(OutputDrive::Standard);
    }

    /// Connects the input buffer and samples the pad. An undriven line
    /// reads low through the pull-down. The line stays an input until the
    /// next `configure_push_pull`.
    fn sense_high(&mut self) -> bool {
        self.set_as_input(Pull::Down);
        self.is_high()
    }
}

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init_display<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

impl<I2C> Screen for Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn flush(&mut self) {
        let _ = Ssd1306::flush(self);
    }

    fn set_enabled(&mut self, on: bool) {
        let _ = self.set_display_on(on);
    }
}
