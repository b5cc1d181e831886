//! Screen drawing.
//!
//! Draws a [`Frame`] onto any monochrome `embedded-graphics` target; on the
//! device that is the buffered SSD1306 driver, which the caller flushes.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::view::Frame;
use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A monochrome panel the renderer can draw on.
///
/// Drawing goes to a frame buffer; `flush` pushes it to the glass.
pub trait Screen: DrawTarget<Color = BinaryColor> {
    /// Push the frame buffer to the panel.
    fn flush(&mut self);

    /// Turn the panel on or off.
    fn set_enabled(&mut self, on: bool);
}

const BUTTON_HEIGHT: u32 = 12;
const BUTTON_PAD: u32 = 3;

#[derive(Clone, Copy)]
enum Anchor {
    Left,
    Center,
    Right,
}

fn text_style(
    font: &'static MonoFont<'static>,
    color: BinaryColor,
) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(font, color)
}

fn centered(baseline: Baseline) -> embedded_graphics::text::TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(baseline)
        .build()
}

/// Inverted button hint sitting on the bottom edge.
fn draw_button<D>(target: &mut D, label: &str, anchor: Anchor)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let width = label.len() as u32 * FONT_6X10.character_size.width + 2 * BUTTON_PAD;
    let x = match anchor {
        Anchor::Left => 0,
        Anchor::Center => (DISPLAY_WIDTH.saturating_sub(width) / 2) as i32,
        Anchor::Right => DISPLAY_WIDTH.saturating_sub(width) as i32,
    };
    let y = (DISPLAY_HEIGHT - BUTTON_HEIGHT) as i32;

    let frame = Rectangle::new(Point::new(x, y), Size::new(width, BUTTON_HEIGHT));
    let _ = RoundedRectangle::with_equal_corners(frame, Size::new(3, 3))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target);

    let _ = Text::with_text_style(
        label,
        frame.center(),
        text_style(&FONT_6X10, BinaryColor::Off),
        centered(Baseline::Middle),
    )
    .draw(target);
}

/// Render a full frame. Clears the target first.
pub fn draw_frame<D>(target: &mut D, frame: &Frame)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let _ = target.clear(BinaryColor::Off);

    let mid = (DISPLAY_WIDTH / 2) as i32;

    let _ = Text::with_text_style(
        frame.title,
        Point::new(mid, 4),
        text_style(&FONT_7X13_BOLD, BinaryColor::On),
        centered(Baseline::Top),
    )
    .draw(target);

    let _ = Text::with_text_style(
        frame.status.as_str(),
        Point::new(mid, 32),
        text_style(&FONT_6X10, BinaryColor::On),
        centered(Baseline::Middle),
    )
    .draw(target);

    draw_button(target, frame.left, Anchor::Left);
    draw_button(target, frame.right, Anchor::Right);
    draw_button(target, frame.center, Anchor::Center);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DeviceState, PowerLevel};
    use core::convert::Infallible;

    /// Counts lit pixels, and any drawn outside the panel.
    struct PixelCounter {
        lit: usize,
        out_of_bounds: usize,
    }

    impl PixelCounter {
        fn new() -> Self {
            Self {
                lit: 0,
                out_of_bounds: 0,
            }
        }
    }

    impl OriginDimensions for PixelCounter {
        fn size(&self) -> Size {
            Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
        }
    }

    impl DrawTarget for PixelCounter {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            let area = self.bounding_box();
            for Pixel(point, color) in pixels {
                if !area.contains(point) {
                    self.out_of_bounds += 1;
                } else if color == BinaryColor::On {
                    self.lit += 1;
                }
            }
            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.lit = if color == BinaryColor::On {
                (DISPLAY_WIDTH * DISPLAY_HEIGHT) as usize
            } else {
                0
            };
            Ok(())
        }
    }

    fn render(state: DeviceState) -> PixelCounter {
        let mut target = PixelCounter::new();
        draw_frame(&mut target, &Frame::from_state(&state));
        target
    }

    #[test]
    fn frame_stays_on_panel() {
        let target = render(DeviceState::default());
        assert!(target.lit > 0);
        assert_eq!(target.out_of_bounds, 0);
    }

    #[test]
    fn on_and_off_frames_differ() {
        let off = render(DeviceState {
            power_level: PowerLevel::new(4),
            is_on: false,
        });
        let on = render(DeviceState {
            power_level: PowerLevel::new(4),
            is_on: true,
        });
        assert_ne!(off.lit, on.lit);
    }
}
