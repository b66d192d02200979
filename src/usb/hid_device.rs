//! USB HID device - keyboard + media on one composite interface.
//!
//! Initialises the Embassy USB stack on the RP2040 USB controller and
//! exposes a single HID interface whose reports are told apart by ID
//! (see `matrixkb::hid::HID_REPORT_DESCRIPTOR`).
//!
//! The report loop never talks to the endpoint directly: it pushes
//! reports into [`REPORT_QUEUE`] through [`QueueSink`] and carries on.
//! [`hid_writer_task`] drains the queue onto the IN endpoint.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::{debug, info, warn};
use embassy_futures::select::{select, Either};
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_usb::class::hid::{
    Config as HidConfig, HidReader, HidReaderWriter, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config, Handler, UsbDevice};
use static_cell::StaticCell;

use matrixkb::config::{self, REPORT_ID_CONSUMER_CONTROL, REPORT_ID_KEYBOARD, REPORT_QUEUE_DEPTH};
use matrixkb::hid::keyboard::{caps_lock_from_leds, KEYBOARD_SLOTS};
use matrixkb::hid::{HidReport, KeyboardReport, MediaReport, HID_REPORT_DESCRIPTOR, MAX_REPORT_SIZE};
use matrixkb::{Error, LinkState, ReportSink, UsbError};

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

pub type UsbDriver = Driver<'static, USB>;

/// OUT reports are `[report_id, leds]`; leave headroom for hosts that pad.
pub const HID_READ_SIZE: usize = 8;

pub type KeyboardHidReader = HidReader<'static, UsbDriver, HID_READ_SIZE>;
pub type KeyboardHidWriter = HidWriter<'static, UsbDriver, MAX_REPORT_SIZE>;

static HID_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();
static CONTROL_REQUEST_HANDLER: StaticCell<LedRequestHandler> = StaticCell::new();

static USB_CONFIGURED: AtomicBool = AtomicBool::new(false);
static USB_SUSPENDED: AtomicBool = AtomicBool::new(false);
static CAPS_LOCK: AtomicBool = AtomicBool::new(false);

/// Reports waiting for the IN endpoint.
pub static REPORT_QUEUE: Channel<CriticalSectionRawMutex, HidReport, REPORT_QUEUE_DEPTH> =
    Channel::new();

static WAKEUP_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

struct UsbStateHandler;

impl Handler for UsbStateHandler {
    fn reset(&mut self) {
        USB_CONFIGURED.store(false, Ordering::Relaxed);
    }

    fn configured(&mut self, configured: bool) {
        USB_CONFIGURED.store(configured, Ordering::Relaxed);
        info!("USB configured={}", configured);
    }

    fn suspended(&mut self, suspended: bool) {
        USB_SUSPENDED.store(suspended, Ordering::Relaxed);
        info!("USB suspended={}", suspended);
    }
}

/// Picks the Caps Lock bit out of the keyboard LED output report, whether
/// it arrives on the OUT endpoint or as a SET_REPORT control request.
struct LedRequestHandler;

impl RequestHandler for LedRequestHandler {
    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        if let ReportId::Out(REPORT_ID_KEYBOARD) = id {
            // Control transfers keep the report ID in the data stage.
            let leds = match data {
                [REPORT_ID_KEYBOARD, rest @ ..] if !rest.is_empty() => rest,
                _ => data,
            };
            if let Some(on) = caps_lock_from_leds(leds) {
                debug!("Host LEDs: caps_lock={}", on);
                CAPS_LOCK.store(on, Ordering::Relaxed);
            }
        }
        OutResponse::Accepted
    }
}

/// Current link state for the status LED.
pub fn link_state() -> LinkState {
    LinkState::from_usb(
        USB_CONFIGURED.load(Ordering::Relaxed),
        USB_SUSPENDED.load(Ordering::Relaxed),
    )
}

pub fn is_suspended() -> bool {
    USB_SUSPENDED.load(Ordering::Relaxed)
}

pub fn caps_lock() -> bool {
    CAPS_LOCK.load(Ordering::Relaxed)
}

/// Ask the USB task to wake the host on its next suspend check.
pub fn request_remote_wakeup() {
    WAKEUP_SIGNAL.signal(());
}

/// Build result containing the USB device runner and the HID endpoints.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub reader: KeyboardHidReader,
    pub writer: KeyboardHidWriter,
}

/// Initialise the USB stack and create the composite HID device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usb: USB) -> UsbHidDevice {
    let driver = Driver::new(usb, Irqs);

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;
    usb_config.supports_remote_wakeup = true;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    builder.handler(USB_STATE_HANDLER.init(UsbStateHandler));

    let hid_config = HidConfig {
        report_descriptor: HID_REPORT_DESCRIPTOR,
        request_handler: Some(CONTROL_REQUEST_HANDLER.init(LedRequestHandler)),
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 16,
    };
    let hid = HidReaderWriter::<_, HID_READ_SIZE, MAX_REPORT_SIZE>::new(
        &mut builder,
        HID_STATE.init(State::new()),
        hid_config,
    );
    let (reader, writer) = hid.split();

    let device = builder.build();

    info!("USB HID device initialised (keyboard + media)");

    UsbHidDevice {
        device,
        reader,
        writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// Handles enumeration and suspend/resume. While suspended it also waits
/// for a remote-wakeup request from the report loop.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    loop {
        device.run_until_suspend().await;
        WAKEUP_SIGNAL.reset();

        match select(device.wait_resume(), WAKEUP_SIGNAL.wait()).await {
            Either::First(()) => {}
            Either::Second(()) => {
                info!("Key held while suspended - waking host");
                if device.remote_wakeup().await.is_err() {
                    warn!("Remote wakeup rejected (not enabled by host?)");
                }
            }
        }
    }
}

/// Drain [`REPORT_QUEUE`] onto the HID IN endpoint.
pub async fn hid_writer_task(mut writer: KeyboardHidWriter) -> ! {
    info!("HID writer task started - waiting for reports");

    let receiver = REPORT_QUEUE.receiver();
    let mut buf = [0u8; MAX_REPORT_SIZE];

    loop {
        let report = receiver.receive().await;

        let n = match report.serialize(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                warn!("Could not frame {}: {}", report, e);
                continue;
            }
        };

        writer.ready().await;
        if let Err(e) = writer.write(&buf[..n]).await {
            warn!("USB HID write failed: {}", usb_error(e));
        }
    }
}

/// Serve LED output reports from the host.
pub async fn hid_reader_task(reader: KeyboardHidReader) -> ! {
    let mut handler = LedRequestHandler;
    reader.run(true, &mut handler).await
}

fn usb_error(e: EndpointError) -> Error {
    match e {
        EndpointError::BufferOverflow => UsbError::BufferOverflow.into(),
        EndpointError::Disabled => UsbError::Disabled.into(),
    }
}

/// [`ReportSink`] that queues reports for [`hid_writer_task`].
///
/// A full queue drops the report; the next cycle will send fresh state.
pub struct QueueSink;

impl QueueSink {
    fn enqueue(&mut self, report: HidReport) {
        if REPORT_QUEUE.try_send(report).is_err() {
            warn!("{}: dropping {}", Error::QueueFull, report);
        }
    }
}

impl ReportSink for QueueSink {
    fn send_keyboard_report(
        &mut self,
        _report_id: u8,
        modifier: u8,
        keycodes: &[u8; KEYBOARD_SLOTS],
    ) {
        let report = KeyboardReport::new(modifier, *keycodes);
        self.enqueue(HidReport::Keyboard(report));
    }

    fn send_raw_report(&mut self, report_id: u8, payload: &[u8]) {
        match (report_id, payload.first()) {
            (REPORT_ID_CONSUMER_CONTROL, Some(&actions)) => {
                self.enqueue(HidReport::Media(MediaReport::new(actions)));
            }
            _ => warn!("Unsupported raw report id={}", report_id),
        }
    }
}
