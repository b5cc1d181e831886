//! Flashlight applet firmware entry point.
//!
//! Boots the nRF52840, binds the LED lines, buttons and OLED, then runs
//! the controller until BACK is pressed. The LED lines are left as they
//! are on exit, so the next launch probes line A to find out whether the
//! light is still on.

#![no_std]
#![no_main]

use defmt::{error, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Flex, Pin};
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use flashlight::app::{render_loop, startup_state, Controller, Redraw};
use flashlight::board::{init_display, Display};
use flashlight::config::EVENT_QUEUE_DEPTH;
use flashlight::error::{exit_status, Error};
use flashlight::led::PinDriver;
use flashlight::state::DeviceState;
use flashlight::ui::buttons::{button_task, EventSender};
use flashlight::ui::{AppEvent, InputKey};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type StateMutex = Mutex<CriticalSectionRawMutex, DeviceState>;
type EventQueue = Channel<CriticalSectionRawMutex, AppEvent, EVENT_QUEUE_DEPTH>;
type I2c = twim::Twim<'static, peripherals::TWISPI0>;

static STATE: StaticCell<StateMutex> = StaticCell::new();
static EVENTS: StaticCell<EventQueue> = StaticCell::new();
static REDRAW: Signal<CriticalSectionRawMutex, Redraw> = Signal::new();

#[embassy_executor::task(pool_size = 6)]
async fn button(pin: AnyPin, key: InputKey, tx: EventSender) {
    button_task(pin, key, tx).await
}

#[embassy_executor::task]
async fn render(state: &'static StateMutex, mut display: Display<I2c>) {
    render_loop(state, &REDRAW, &mut display).await;
    info!("render: disabled");
}

fn led_line(pin: AnyPin) -> Flex<'static> {
    Flex::new(pin)
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("flashlight starting");

    let mut driver = PinDriver::new([
        led_line(p.P0_03.degrade()),
        led_line(p.P0_04.degrade()),
        led_line(p.P0_28.degrade()),
        led_line(p.P0_29.degrade()),
        led_line(p.P0_30.degrade()),
        led_line(p.P0_31.degrade()),
        led_line(p.P1_01.degrade()),
    ]);

    let initial = startup_state(&mut driver);

    let setup = (|| -> Result<(&'static StateMutex, &'static EventQueue), Error> {
        let state = STATE.try_init(Mutex::new(initial)).ok_or(Error::StateMutex)?;
        let events = EVENTS.try_init(Channel::new()).ok_or(Error::EventQueue)?;
        Ok((state, events))
    })();
    let (state, events) = match setup {
        Ok(handles) => handles,
        Err(e) => {
            error!("flashlight: {} (exit {})", e, e.exit_code());
            return;
        }
    };

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = init_display(i2c);
    unwrap!(spawner.spawn(render(state, display)));

    let tx = events.sender();
    for (pin, key) in [
        (p.P0_11.degrade(), InputKey::Up),
        (p.P0_12.degrade(), InputKey::Down),
        (p.P0_24.degrade(), InputKey::Left),
        (p.P0_25.degrade(), InputKey::Right),
        (p.P1_08.degrade(), InputKey::Ok),
        (p.P1_07.degrade(), InputKey::Back),
    ] {
        unwrap!(spawner.spawn(button(pin, key, tx)));
    }

    REDRAW.signal(Redraw::Frame);
    let mut controller = Controller::new(state, driver);
    controller.run(events.receiver(), &REDRAW).await;
    // Dropping a Flex disconnects its pin; the LED lines must outlive the applet.
    controller.into_driver().detach();

    REDRAW.signal(Redraw::Disable);
    info!("flashlight: exit {}", exit_status(Ok(())));
}
