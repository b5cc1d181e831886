//! Flashlight controller and renderer loops.
//!
//! The controller owns the pin driver. Each tick it waits up to
//! `EVENT_POLL_TIMEOUT_MS` for an input event, takes the state lock,
//! applies at most one transition (pins included) and releases the lock,
//! then asks the renderer for a redraw. The renderer takes the same lock
//! with a short timeout and skips the frame when it cannot get it, so a
//! half-applied transition is never drawn.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{with_timeout, Duration};

use crate::config::{EVENT_POLL_TIMEOUT_MS, RENDER_LOCK_TIMEOUT_MS};
use crate::led::{LedLine, PinDriver};
use crate::state::DeviceState;
use crate::ui::display::{draw_frame, Screen};
use crate::ui::input_logic::{action_for, Action};
use crate::ui::view::Frame;
use crate::ui::{AppEvent, Flow, InputEvent};

/// Requests from the controller side to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    /// Draw the current state.
    Frame,
    /// Turn the panel off and stop rendering.
    Disable,
}

/// Apply one action to the state and the pins.
///
/// Callers hold the state lock for the duration.
pub fn apply<P: LedLine>(
    state: &mut DeviceState,
    driver: &mut PinDriver<P>,
    action: Action,
) -> Flow {
    match action {
        Action::Increase | Action::Decrease => {
            state.power_level = if action == Action::Increase {
                state.power_level.increased()
            } else {
                state.power_level.decreased()
            };
            debug!("level -> {}", state.power_level);
            if state.is_on {
                driver.apply_level(state.power_level.get());
            }
        }
        Action::Toggle => {
            driver.initialize_pins();
            if state.is_on {
                driver.reset_all();
                state.is_on = false;
            } else {
                driver.apply_level(state.power_level.get());
                state.is_on = true;
            }
            info!("flashlight {}", if state.is_on { "on" } else { "off" });
        }
        Action::Exit => return Flow::Exit,
    }
    Flow::Continue
}

/// Read pin A and build the startup state from it.
pub fn startup_state<P: LedLine>(driver: &mut PinDriver<P>) -> DeviceState {
    let is_on = driver.probe();
    info!("startup probe: light {}", if is_on { "on" } else { "off" });
    DeviceState::probed(is_on)
}

/// Owns the pins and turns input events into state transitions.
pub struct Controller<'a, M: RawMutex, P> {
    state: &'a Mutex<M, DeviceState>,
    driver: PinDriver<P>,
}

impl<'a, M: RawMutex, P: LedLine> Controller<'a, M, P> {
    pub fn new(state: &'a Mutex<M, DeviceState>, driver: PinDriver<P>) -> Self {
        Self { state, driver }
    }

    /// Handle one tick. `None` means the poll timed out.
    pub async fn process(&mut self, event: Option<AppEvent>) -> Flow {
        let mut state = self.state.lock().await;

        let Some(AppEvent::Key(input)) = event else {
            return Flow::Continue;
        };
        match action_for(input) {
            Some(action) => apply(&mut state, &mut self.driver, action),
            None => Flow::Continue,
        }
    }

    /// Run until Back is pressed, requesting a redraw after every tick.
    pub async fn run<const N: usize>(
        &mut self,
        events: Receiver<'_, M, AppEvent, N>,
        redraw: &Signal<M, Redraw>,
    ) {
        let poll = Duration::from_millis(EVENT_POLL_TIMEOUT_MS);
        loop {
            let event = with_timeout(poll, events.receive()).await.ok();
            let flow = self.process(event).await;
            redraw.signal(Redraw::Frame);
            if flow == Flow::Exit {
                break;
            }
        }
        info!("controller: exit requested");
    }

    /// Hand the pin driver back, leaving the pins as they are.
    pub fn into_driver(self) -> PinDriver<P> {
        self.driver
    }
}

/// Queue an input event, waiting while the queue is full.
pub async fn post_input<M: RawMutex, const N: usize>(
    events: Sender<'_, M, AppEvent, N>,
    event: InputEvent,
) {
    events.send(AppEvent::Key(event)).await;
}

/// Copy the state if the lock is free right now.
pub fn try_snapshot<M: RawMutex>(state: &Mutex<M, DeviceState>) -> Option<DeviceState> {
    state.try_lock().ok().map(|s| *s)
}

/// Copy the state, giving up after `timeout`.
pub async fn snapshot<M: RawMutex>(
    state: &Mutex<M, DeviceState>,
    timeout: Duration,
) -> Option<DeviceState> {
    with_timeout(timeout, state.lock()).await.ok().map(|s| *s)
}

/// Draw the state whenever asked, until told to disable the panel.
pub async fn render_loop<M: RawMutex, S: Screen>(
    state: &Mutex<M, DeviceState>,
    redraw: &Signal<M, Redraw>,
    screen: &mut S,
) {
    let lock_timeout = Duration::from_millis(RENDER_LOCK_TIMEOUT_MS);
    loop {
        match redraw.wait().await {
            Redraw::Frame => match snapshot(state, lock_timeout).await {
                Some(current) => {
                    draw_frame(screen, &Frame::from_state(&current));
                    screen.flush();
                }
                None => debug!("render: state busy, frame skipped"),
            },
            Redraw::Disable => {
                screen.set_enabled(false);
                break;
            }
        }
    }
}
