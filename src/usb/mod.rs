//! USB Device subsystem - presents a composite HID device to the host.
//!
//! The RP2040's built-in USB 1.1 Full-Speed controller is driven by
//! `embassy-usb`. One HID interface carries both collections:
//!
//! - Report ID 1: Keyboard (boot layout, LED output report)
//! - Report ID 2: Consumer control (media bitmap)

pub mod hid_device;
