//! Integration tests for the flashlight host-testable logic.

use core::convert::Infallible;

use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use flashlight::app::{post_input, startup_state, try_snapshot};
use flashlight::config::EVENT_QUEUE_DEPTH;
use flashlight::led::LINE_COUNT;
use flashlight::ui::{AppEvent, InputEvent, InputKey};
use flashlight::{Controller, LedLine, Line, LineSet, PinDriver, Redraw};

#[derive(Clone, Copy, Default)]
struct Gpio {
    high: bool,
}

impl ErrorType for Gpio {
    type Error = Infallible;
}

impl OutputPin for Gpio {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for Gpio {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}

impl LedLine for Gpio {
    fn configure_push_pull(&mut self) {
        self.high = false;
    }

    fn sense_high(&mut self) -> bool {
        self.high
    }
}

fn run_keys(keys: &[InputKey], lines: [Gpio; LINE_COUNT]) -> (flashlight::DeviceState, LineSet) {
    let mut driver = PinDriver::new(lines);
    let state = Mutex::<NoopRawMutex, _>::new(startup_state(&mut driver));
    let events = Channel::<NoopRawMutex, AppEvent, EVENT_QUEUE_DEPTH>::new();
    let redraw = Signal::<NoopRawMutex, Redraw>::new();
    let mut controller = Controller::new(&state, driver);

    block_on(async {
        // Feed in batches so the bounded queue never blocks the producer.
        let batches: Vec<&[InputKey]> = if keys.is_empty() {
            vec![&keys[..]]
        } else {
            keys.chunks(EVENT_QUEUE_DEPTH - 1).collect()
        };
        for chunk in batches {
            for key in chunk {
                post_input(events.sender(), InputEvent::press(*key)).await;
            }
            post_input(events.sender(), InputEvent::press(InputKey::Back)).await;
            controller.run(events.receiver(), &redraw).await;
        }
    });

    let snap = try_snapshot(&state).expect("state lock is free after the run");
    (snap, controller.into_driver().asserted())
}

#[test]
fn dim_toggle_brighten_toggle_scenario() {
    let mut keys = vec![InputKey::Left; 5];
    keys.push(InputKey::Ok);
    let (state, pins) = run_keys(&keys, [Gpio::default(); LINE_COUNT]);
    assert_eq!(state.power_level.get(), 1);
    assert!(state.is_on);
    assert_eq!(pins, LineSet::of(&[Line::A]));

    keys.extend([InputKey::Right; 10]);
    let (state, pins) = run_keys(&keys, [Gpio::default(); LINE_COUNT]);
    assert_eq!(state.power_level.get(), 6);
    assert_eq!(
        pins,
        LineSet::of(&[Line::A, Line::D, Line::B, Line::C, Line::E, Line::G])
    );

    keys.push(InputKey::Ok);
    let (state, pins) = run_keys(&keys, [Gpio::default(); LINE_COUNT]);
    assert!(!state.is_on);
    assert!(pins.is_empty());
}

#[test]
fn lit_line_a_at_startup_reads_as_on() {
    let mut lines = [Gpio::default(); LINE_COUNT];
    lines[Line::A.index()].high = true;

    // OK switches a probed-on light off.
    let (state, pins) = run_keys(&[InputKey::Ok], lines);
    assert!(!state.is_on);
    assert!(pins.is_empty());
}

#[test]
fn back_alone_exits_without_touching_pins() {
    let mut lines = [Gpio::default(); LINE_COUNT];
    lines[Line::A.index()].high = true;
    lines[Line::F.index()].high = true;

    let (state, pins) = run_keys(&[], lines);
    assert!(state.is_on);
    assert_eq!(pins, LineSet::of(&[Line::A, Line::F]));
}
