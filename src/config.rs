//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place. The key
//! tables themselves live in [`crate::keymap`].

// Matrix

/// Number of row lines (inputs).
pub const MATRIX_ROWS: usize = 5;

/// Number of column lines (driven outputs).
pub const MATRIX_COLS: usize = 15;

/// Maximum number of keycodes captured by one scan pass:
/// 6 ordinary keys + up to 8 modifier / FN-trigger keys.
pub const MAX_KEYS: usize = 6 + 8;

/// Settle time after driving a column high and again after driving it
/// low (µs). A key must stay closed for the whole active window of its
/// column to be seen.
pub const MATRIX_SETTLE_DELAY_US: u32 = 1_000;

// GPIO line assignments (Raspberry Pi Pico)
//
// These are logical GPIO numbers; the actual `embassy_rp::peripherals::*`
// types are selected in `main.rs`. The order is the physical wiring order
// and is part of the keymap contract: column N of `DEFAULT_KEYMAP` is wired
// to `COL_LINES[N]`, row N to `ROW_LINES[N]`.
//
//   Columns  → GP7 .. GP21 (driven high one at a time)
//   Rows     → GP2 .. GP6  (inputs, pulled down)
//   Status LED → GP25

/// Column GPIO numbers, in scan order.
pub const COL_LINES: [u8; MATRIX_COLS] = [7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21];

/// Row GPIO numbers, in sample order.
pub const ROW_LINES: [u8; MATRIX_ROWS] = [2, 3, 4, 5, 6];

// Reporting

/// Report loop cadence (ms). One keyboard and one media decision per tick.
pub const REPORT_INTERVAL_MS: u64 = 10;

/// Report ID of the keyboard collection in the composite descriptor.
pub const REPORT_ID_KEYBOARD: u8 = 1;

/// Report ID of the consumer (media) collection in the composite descriptor.
pub const REPORT_ID_CONSUMER_CONTROL: u8 = 2;

/// Depth of the queue between the report loop and the USB writer task.
pub const REPORT_QUEUE_DEPTH: usize = 8;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "matrixkb";
pub const USB_PRODUCT: &str = "Matrix Keyboard";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// Bus current drawn from the host (mA).
pub const USB_MAX_POWER_MA: u16 = 100;

/// USB HID polling interval (ms). Matches the report cadence.
pub const USB_HID_POLL_MS: u8 = 10;

// Status LED

/// Blink period while the device is not enumerated (ms).
pub const BLINK_NOT_MOUNTED_MS: u32 = 250;

/// Blink period while enumerated and running (ms).
pub const BLINK_MOUNTED_MS: u32 = 1_000;

/// Blink period while the host has suspended the bus (ms).
pub const BLINK_SUSPENDED_MS: u32 = 2_500;

/// How often the LED task re-evaluates the blink state (ms).
pub const LED_POLL_MS: u64 = 10;
