//! HID usage IDs and bit assignments used by the keymap and reports.
//!
//! Keycodes are raw `u8` usages from the Keyboard/Keypad usage page
//! (0x07), exactly as they travel in bytes 2-7 of a boot keyboard
//! report. `KEY_NONE` marks an unpopulated matrix position.

pub const KEY_NONE: u8 = 0x00;

pub const KEY_A: u8 = 0x04;
pub const KEY_B: u8 = 0x05;
pub const KEY_C: u8 = 0x06;
pub const KEY_D: u8 = 0x07;
pub const KEY_E: u8 = 0x08;
pub const KEY_F: u8 = 0x09;
pub const KEY_G: u8 = 0x0A;
pub const KEY_H: u8 = 0x0B;
pub const KEY_I: u8 = 0x0C;
pub const KEY_J: u8 = 0x0D;
pub const KEY_K: u8 = 0x0E;
pub const KEY_L: u8 = 0x0F;
pub const KEY_M: u8 = 0x10;
pub const KEY_N: u8 = 0x11;
pub const KEY_O: u8 = 0x12;
pub const KEY_P: u8 = 0x13;
pub const KEY_Q: u8 = 0x14;
pub const KEY_R: u8 = 0x15;
pub const KEY_S: u8 = 0x16;
pub const KEY_T: u8 = 0x17;
pub const KEY_U: u8 = 0x18;
pub const KEY_V: u8 = 0x19;
pub const KEY_W: u8 = 0x1A;
pub const KEY_X: u8 = 0x1B;
pub const KEY_Y: u8 = 0x1C;
pub const KEY_Z: u8 = 0x1D;

pub const KEY_1: u8 = 0x1E;
pub const KEY_2: u8 = 0x1F;
pub const KEY_3: u8 = 0x20;
pub const KEY_4: u8 = 0x21;
pub const KEY_5: u8 = 0x22;
pub const KEY_6: u8 = 0x23;
pub const KEY_7: u8 = 0x24;
pub const KEY_8: u8 = 0x25;
pub const KEY_9: u8 = 0x26;
pub const KEY_0: u8 = 0x27;

pub const KEY_ENTER: u8 = 0x28;
pub const KEY_ESCAPE: u8 = 0x29;
pub const KEY_BACKSPACE: u8 = 0x2A;
pub const KEY_TAB: u8 = 0x2B;
pub const KEY_SPACE: u8 = 0x2C;
pub const KEY_MINUS: u8 = 0x2D;
pub const KEY_EQUAL: u8 = 0x2E;
pub const KEY_BRACKET_LEFT: u8 = 0x2F;
pub const KEY_BRACKET_RIGHT: u8 = 0x30;
pub const KEY_BACKSLASH: u8 = 0x31;
pub const KEY_SEMICOLON: u8 = 0x33;
pub const KEY_APOSTROPHE: u8 = 0x34;
pub const KEY_GRAVE: u8 = 0x35;
pub const KEY_COMMA: u8 = 0x36;
pub const KEY_PERIOD: u8 = 0x37;
pub const KEY_SLASH: u8 = 0x38;
pub const KEY_CAPS_LOCK: u8 = 0x39;

pub const KEY_F1: u8 = 0x3A;
pub const KEY_F2: u8 = 0x3B;
pub const KEY_F3: u8 = 0x3C;
pub const KEY_F4: u8 = 0x3D;
pub const KEY_F5: u8 = 0x3E;
pub const KEY_F6: u8 = 0x3F;
pub const KEY_F7: u8 = 0x40;
pub const KEY_F8: u8 = 0x41;
pub const KEY_F9: u8 = 0x42;
pub const KEY_F10: u8 = 0x43;
pub const KEY_F11: u8 = 0x44;
pub const KEY_F12: u8 = 0x45;

pub const KEY_INSERT: u8 = 0x49;
pub const KEY_HOME: u8 = 0x4A;
pub const KEY_PAGE_UP: u8 = 0x4B;
pub const KEY_DELETE: u8 = 0x4C;
pub const KEY_END: u8 = 0x4D;
pub const KEY_PAGE_DOWN: u8 = 0x4E;
pub const KEY_ARROW_RIGHT: u8 = 0x4F;
pub const KEY_ARROW_LEFT: u8 = 0x50;
pub const KEY_ARROW_DOWN: u8 = 0x51;
pub const KEY_ARROW_UP: u8 = 0x52;

pub const KEY_CONTROL_LEFT: u8 = 0xE0;
pub const KEY_SHIFT_LEFT: u8 = 0xE1;
pub const KEY_ALT_LEFT: u8 = 0xE2;
pub const KEY_GUI_LEFT: u8 = 0xE3;
pub const KEY_CONTROL_RIGHT: u8 = 0xE4;
pub const KEY_SHIFT_RIGHT: u8 = 0xE5;
pub const KEY_ALT_RIGHT: u8 = 0xE6;
pub const KEY_GUI_RIGHT: u8 = 0xE7;

/// The matrix position that switches the FN layer on while held.
/// It never reaches the host as a modifier.
pub const FN_TRIGGER: u8 = KEY_GUI_RIGHT;

// Modifier byte (byte 0 of the keyboard report)

pub const MOD_LEFT_CTRL: u8 = 1 << 0;
pub const MOD_LEFT_SHIFT: u8 = 1 << 1;
pub const MOD_LEFT_ALT: u8 = 1 << 2;
pub const MOD_LEFT_GUI: u8 = 1 << 3;
pub const MOD_RIGHT_CTRL: u8 = 1 << 4;
pub const MOD_RIGHT_SHIFT: u8 = 1 << 5;
pub const MOD_RIGHT_ALT: u8 = 1 << 6;
/// Defined by the boot protocol but never set by this firmware.
pub const MOD_RIGHT_GUI: u8 = 1 << 7;

// Media byte (consumer report). Bit order follows the usage order in
// `hid::HID_REPORT_DESCRIPTOR`.

pub const MEDIA_SCAN_NEXT: u8 = 1 << 0;
pub const MEDIA_SCAN_PREV: u8 = 1 << 1;
pub const MEDIA_VOLUME_UP: u8 = 1 << 2;
pub const MEDIA_VOLUME_DOWN: u8 = 1 << 3;

/// Modifier mask for a host-visible modifier key.
///
/// Returns `None` for ordinary keys and for [`FN_TRIGGER`].
pub const fn modifier_bit(code: u8) -> Option<u8> {
    match code {
        KEY_CONTROL_LEFT => Some(MOD_LEFT_CTRL),
        KEY_SHIFT_LEFT => Some(MOD_LEFT_SHIFT),
        KEY_ALT_LEFT => Some(MOD_LEFT_ALT),
        KEY_GUI_LEFT => Some(MOD_LEFT_GUI),
        KEY_CONTROL_RIGHT => Some(MOD_RIGHT_CTRL),
        KEY_SHIFT_RIGHT => Some(MOD_RIGHT_SHIFT),
        KEY_ALT_RIGHT => Some(MOD_RIGHT_ALT),
        _ => None,
    }
}
