//! Consumer Control HID support - track skip and volume.
//!
//! Consumer Control is a separate HID usage page (0x0C). Here it is a
//! one-byte bitmap, one bit per media action, so several actions can be
//! held at once:
//!
//! ```text
//! Bit 0 = Scan Next Track     (0x00B5)
//! Bit 1 = Scan Previous Track (0x00B6)
//! Bit 2 = Volume Increment    (0x00E9)
//! Bit 3 = Volume Decrement    (0x00EA)
//! Bit 4-7: padding
//! ```

use crate::error::Error;

/// Media report size in bytes.
pub const MEDIA_REPORT_SIZE: usize = 1;

/// Consumer Control HID report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MediaReport {
    /// OR of `keycode::MEDIA_*` flags.
    pub actions: u8,
}

impl MediaReport {
    /// Create an empty (no keys pressed) report.
    pub const fn empty() -> Self {
        Self { actions: 0 }
    }

    pub const fn new(actions: u8) -> Self {
        Self { actions }
    }

    /// Serialize to USB HID report bytes.
    pub fn serialize(&self, buf: &mut [u8]) -> Result<usize, Error> {
        match buf.first_mut() {
            Some(byte) => {
                *byte = self.actions;
                Ok(MEDIA_REPORT_SIZE)
            }
            None => Err(Error::BufferOverflow),
        }
    }

    /// Check if any media key is pressed.
    pub fn is_empty(&self) -> bool {
        self.actions == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::{MEDIA_SCAN_PREV, MEDIA_VOLUME_UP};

    #[test]
    fn media_report_empty() {
        assert!(MediaReport::empty().is_empty());
    }

    #[test]
    fn media_report_serialize_combined_actions() {
        let report = MediaReport::new(MEDIA_SCAN_PREV | MEDIA_VOLUME_UP);
        let mut buf = [0u8; 1];
        assert_eq!(report.serialize(&mut buf), Ok(1));
        assert_eq!(buf, [0b0000_0110]);
    }

    #[test]
    fn media_report_serialize_buffer_too_small() {
        let mut buf = [0u8; 0];
        assert_eq!(
            MediaReport::new(MEDIA_VOLUME_UP).serialize(&mut buf),
            Err(Error::BufferOverflow)
        );
    }
}
