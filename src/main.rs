//! matrixkb - RP2040 matrix keyboard firmware
//!
//! Core 1 scans the key matrix in a tight loop and publishes each
//! snapshot. Core 0 runs the Embassy executor: USB device, HID writer,
//! LED output reports, the 10 ms report loop and the status LED.
//!
//! Build & flash:
//!   cargo run --release --features embedded --target thumbv6m-none-eabi

#![no_std]
#![no_main]

mod led;
mod usb;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Delay, Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use matrixkb::config::{MATRIX_COLS, MATRIX_ROWS, REPORT_INTERVAL_MS};
use matrixkb::{CycleOutcome, Matrix, ReportLoop, SnapshotChannel, DEFAULT_KEYMAP};

use usb::hid_device::{self, KeyboardHidReader, KeyboardHidWriter, QueueSink, UsbDriver};

type BoardMatrix =
    Matrix<'static, Input<'static>, Output<'static>, Delay, MATRIX_ROWS, MATRIX_COLS>;

/// Latest matrix snapshot, written by core 1 and read by the report loop.
static SNAPSHOTS: SnapshotChannel<CriticalSectionRawMutex> = SnapshotChannel::new();

static CORE1_STACK: StaticCell<Stack<4096>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("matrixkb starting");

    // Wiring order must match `config::COL_LINES` / `config::ROW_LINES`.
    let cols = [
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
        Output::new(p.PIN_19, Level::Low),
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::Low),
    ];
    let rows = [
        Input::new(p.PIN_2, Pull::Down),
        Input::new(p.PIN_3, Pull::Down),
        Input::new(p.PIN_4, Pull::Down),
        Input::new(p.PIN_5, Pull::Down),
        Input::new(p.PIN_6, Pull::Down),
    ];
    let matrix: BoardMatrix = Matrix::new(cols, rows, Delay, &DEFAULT_KEYMAP);

    let core1_stack = CORE1_STACK.init(Stack::new());
    spawn_core1(p.CORE1, core1_stack, move || scan_loop(matrix));

    let status_led = Output::new(p.PIN_25, Level::Low);
    let usb = hid_device::init(p.USB);

    unwrap!(spawner.spawn(usb_device_task(usb.device)));
    unwrap!(spawner.spawn(hid_writer_task(usb.writer)));
    unwrap!(spawner.spawn(hid_reader_task(usb.reader)));
    unwrap!(spawner.spawn(report_task()));
    unwrap!(spawner.spawn(led_task(status_led)));

    info!("All tasks spawned");
}

/// Core 1 entry: scan forever, publishing every pass. A publish that
/// finds the slot busy is dropped; the next pass follows ~30 ms later.
fn scan_loop(mut matrix: BoardMatrix) -> ! {
    info!("Scan loop running on core 1");
    loop {
        let snapshot = matrix.scan();
        SNAPSHOTS.publish(&snapshot);
    }
}

#[embassy_executor::task]
async fn report_task() {
    let mut reporter = ReportLoop::new(&DEFAULT_KEYMAP, &SNAPSHOTS, REPORT_INTERVAL_MS);
    let mut sink = QueueSink;

    loop {
        Timer::at(Instant::from_millis(reporter.next_due_ms())).await;

        let now = Instant::now().as_millis();
        let suspended = hid_device::is_suspended();
        if reporter.poll(now, suspended, &mut sink) == CycleOutcome::WakeupRequested {
            hid_device::request_remote_wakeup();
        }
    }
}

#[embassy_executor::task]
async fn usb_device_task(device: embassy_usb::UsbDevice<'static, UsbDriver>) {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_writer_task(writer: KeyboardHidWriter) {
    hid_device::hid_writer_task(writer).await
}

#[embassy_executor::task]
async fn hid_reader_task(reader: KeyboardHidReader) {
    hid_device::hid_reader_task(reader).await
}

#[embassy_executor::task]
async fn led_task(led: Output<'static>) {
    led::led_task(led).await
}
