//! GPIO button input with async debouncing.
//!
//! Six physical buttons (active-low with internal pull-up):
//!   - LEFT / RIGHT - dim / brighten
//!   - OK           - switch the flashlight on or off
//!   - BACK         - leave the applet
//!   - UP / DOWN    - wired but unused
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and posts `InputEvent`s to the controller queue.

use crate::app::post_input;
use crate::config::{
    BUTTON_DEBOUNCE_MS, BUTTON_LONG_PRESS_MS, BUTTON_REPEAT_MS, EVENT_QUEUE_DEPTH,
};
use crate::ui::{AppEvent, InputEvent, InputKey, InputKind};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

pub type EventSender = Sender<'static, CriticalSectionRawMutex, AppEvent, EVENT_QUEUE_DEPTH>;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces and posts `Press`.
/// While held it posts `Long` once, then `Repeat` periodically. On release
/// it posts `Short` (if no `Long` was sent) followed by `Release`.
pub async fn button_task(pin: AnyPin, key: InputKey, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if btn.is_high() {
            continue;
        }

        debug!("Button: {} pressed", key);
        post_input(tx, InputEvent::new(key, InputKind::Press)).await;

        let mut held = Duration::from_millis(BUTTON_LONG_PRESS_MS);
        let mut long = false;
        loop {
            match select(btn.wait_for_rising_edge(), Timer::after(held)).await {
                Either::First(()) => break,
                Either::Second(()) => {
                    let kind = if long { InputKind::Repeat } else { InputKind::Long };
                    post_input(tx, InputEvent::new(key, kind)).await;
                    long = true;
                    held = Duration::from_millis(BUTTON_REPEAT_MS);
                }
            }
        }

        if !long {
            post_input(tx, InputEvent::new(key, InputKind::Short)).await;
        }
        post_input(tx, InputEvent::new(key, InputKind::Release)).await;

        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
