//! HID report types and the composite report descriptor.
//!
//! One HID interface carries two top-level collections, told apart by
//! report ID:
//!
//! - `REPORT_ID_KEYBOARD` (1): boot-layout keyboard + 5 LED outputs
//! - `REPORT_ID_CONSUMER_CONTROL` (2): one-byte media bitmap
//!
//! On the wire every input report is `[report_id, payload...]`.

pub mod keyboard;
pub mod media;


use crate::config::{REPORT_ID_CONSUMER_CONTROL, REPORT_ID_KEYBOARD};
use crate::error::Error;

pub use keyboard::KeyboardReport;
pub use media::MediaReport;

/// Largest input report on the wire, report ID included.
pub const MAX_REPORT_SIZE: usize = 1 + keyboard::KEYBOARD_REPORT_SIZE;

/// A report queued for the USB writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidReport {
    Keyboard(KeyboardReport),
    Media(MediaReport),
}

impl HidReport {
    pub fn report_id(&self) -> u8 {
        match self {
            HidReport::Keyboard(_) => REPORT_ID_KEYBOARD,
            HidReport::Media(_) => REPORT_ID_CONSUMER_CONTROL,
        }
    }

    /// Write `[report_id, payload...]` into `buf`, returning the length.
    pub fn serialize(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let (id, payload) = buf.split_first_mut().ok_or(Error::BufferOverflow)?;
        *id = self.report_id();
        let n = match self {
            HidReport::Keyboard(k) => k.serialize(payload)?,
            HidReport::Media(m) => m.serialize(payload)?,
        };
        Ok(n + 1)
    }
}

/// USB HID Report Descriptor for the composite keyboard + media device.
#[rustfmt::skip]
pub const HID_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    0x85, REPORT_ID_KEYBOARD, //   Report ID
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved byte -
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x01, //   Input (Constant) - padding
    //
    //   - LED output (5 bits + 3 padding) -
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x95, 0x05, //   Report Count (5)
    0x75, 0x01, //   Report Size (1)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x03, //   Report Size (3)
    0x91, 0x01, //   Output (Constant) - padding
    //
    //   - Key codes (6 bytes) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0xFF, //   Usage Maximum (255)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x95, 0x06, //   Report Count (6)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x00, //   Input (Data, Array)
    0xC0, // End Collection
    //
    0x05, 0x0C, // Usage Page (Consumer)
    0x09, 0x01, // Usage (Consumer Control)
    0xA1, 0x01, // Collection (Application)
    0x85, REPORT_ID_CONSUMER_CONTROL, //   Report ID
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x04, //   Report Count (4)
    0x09, 0xB5, //   Usage (Scan Next Track)
    0x09, 0xB6, //   Usage (Scan Previous Track)
    0x09, 0xE9, //   Usage (Volume Increment)
    0x09, 0xEA, //   Usage (Volume Decrement)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x04, //   Report Size (4)
    0x81, 0x01, //   Input (Constant) - padding
    0xC0, // End Collection
];
