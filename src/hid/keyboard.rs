//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI (never set - FN trigger)
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```

use crate::error::Error;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Number of ordinary (non-modifier) key slots in a boot report.
pub const KEYBOARD_SLOTS: usize = 6;

/// Caps Lock bit in the host's LED output report.
pub const LED_CAPS_LOCK: u8 = 1 << 1;

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes, zero-padded.
    pub keycodes: [u8; KEYBOARD_SLOTS],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; KEYBOARD_SLOTS],
        }
    }

    pub const fn new(modifier: u8, keycodes: [u8; KEYBOARD_SLOTS]) -> Self {
        Self {
            modifier,
            reserved: 0,
            keycodes,
        }
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 8).
    pub fn serialize(&self, buf: &mut [u8]) -> Result<usize, Error> {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return Err(Error::BufferOverflow);
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..8].copy_from_slice(&self.keycodes);
        Ok(KEYBOARD_REPORT_SIZE)
    }

    /// Returns `true` if no keys are pressed (release event).
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }
}

/// Caps Lock state from a keyboard LED output report (report ID already
/// stripped). `None` if the host sent an empty payload.
pub fn caps_lock_from_leds(data: &[u8]) -> Option<bool> {
    data.first().map(|&leds| leds & LED_CAPS_LOCK != 0)
}
