//! Static key tables: the primary matrix layout and the FN layer.
//!
//! A [`KeyMap`] is plain immutable data. `keycodes[row][col]` is the
//! primary usage at each matrix position, `alternates` maps a primary
//! usage to what it becomes while FN is held, and `media` maps a usage
//! to the media-action bits it raises while FN is held.

use crate::config::{MATRIX_COLS, MATRIX_ROWS};
use crate::keycode::*;

/// Primary layout plus the static FN layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyMap<const ROWS: usize, const COLS: usize> {
    /// Primary usage for each `(row, col)`; `KEY_NONE` where no switch exists.
    pub keycodes: [[u8; COLS]; ROWS],
    /// `(primary, alternate)` pairs applied while FN is held.
    pub alternates: &'static [(u8, u8)],
    /// `(primary, media flags)` pairs applied while FN is held.
    pub media: &'static [(u8, u8)],
}

impl<const ROWS: usize, const COLS: usize> KeyMap<ROWS, COLS> {
    /// Primary usage at a matrix position. Out-of-table positions read as
    /// `KEY_NONE`.
    pub fn keycode(&self, row: usize, col: usize) -> u8 {
        self.keycodes
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KEY_NONE)
    }

    /// FN-layer replacement for `code`. First match wins.
    pub fn alternate_of(&self, code: u8) -> Option<u8> {
        self.alternates
            .iter()
            .find(|&&(primary, _)| primary == code)
            .map(|&(_, alternate)| alternate)
    }

    /// Media flags raised by `code` while FN is held. First match wins.
    pub fn media_of(&self, code: u8) -> Option<u8> {
        self.media
            .iter()
            .find(|&&(primary, _)| primary == code)
            .map(|&(_, flags)| flags)
    }
}

/// FN + number row → F-keys, FN + navigation → Home/End/Insert.
pub const DEFAULT_ALTERNATES: [(u8, u8); 15] = [
    (KEY_1, KEY_F1),
    (KEY_2, KEY_F2),
    (KEY_3, KEY_F3),
    (KEY_4, KEY_F4),
    (KEY_5, KEY_F5),
    (KEY_6, KEY_F6),
    (KEY_7, KEY_F7),
    (KEY_8, KEY_F8),
    (KEY_9, KEY_F9),
    (KEY_0, KEY_F10),
    (KEY_MINUS, KEY_F11),
    (KEY_EQUAL, KEY_F12),
    (KEY_PAGE_UP, KEY_HOME),
    (KEY_PAGE_DOWN, KEY_END),
    (KEY_DELETE, KEY_INSERT),
];

/// FN + arrows → track skip and volume.
pub const DEFAULT_MEDIA: [(u8, u8); 4] = [
    (KEY_ARROW_LEFT, MEDIA_SCAN_PREV),
    (KEY_ARROW_RIGHT, MEDIA_SCAN_NEXT),
    (KEY_ARROW_UP, MEDIA_VOLUME_UP),
    (KEY_ARROW_DOWN, MEDIA_VOLUME_DOWN),
];

/// 68-key ISO layout, indexed in wiring order (see `config::COL_LINES`
/// and `config::ROW_LINES`).
#[rustfmt::skip]
pub const DEFAULT_KEYMAP: KeyMap<MATRIX_ROWS, MATRIX_COLS> = KeyMap {
    keycodes: [
        [KEY_ESCAPE,       KEY_1,        KEY_2,        KEY_3,    KEY_4,    KEY_5,     KEY_6,    KEY_7,    KEY_8,        KEY_9,         KEY_0,            KEY_MINUS,           KEY_EQUAL,             KEY_BACKSPACE,  KEY_GRAVE],
        [KEY_TAB,          KEY_Q,        KEY_W,        KEY_E,    KEY_R,    KEY_T,     KEY_Y,    KEY_U,    KEY_I,        KEY_O,         KEY_P,            KEY_BRACKET_LEFT,    KEY_BRACKET_RIGHT,     KEY_BACKSLASH,  KEY_PAGE_UP],
        [KEY_CAPS_LOCK,    KEY_A,        KEY_S,        KEY_D,    KEY_F,    KEY_G,     KEY_H,    KEY_J,    KEY_K,        KEY_L,         KEY_SEMICOLON,    KEY_APOSTROPHE,      KEY_NONE,              KEY_ENTER,      KEY_PAGE_DOWN],
        [KEY_SHIFT_LEFT,   KEY_Z,        KEY_X,        KEY_C,    KEY_V,    KEY_B,     KEY_N,    KEY_M,    KEY_COMMA,    KEY_PERIOD,    KEY_SLASH,        KEY_NONE,            KEY_SHIFT_RIGHT,       KEY_ARROW_UP,   KEY_DELETE],
        [KEY_CONTROL_LEFT, KEY_GUI_LEFT, KEY_ALT_LEFT, KEY_NONE, KEY_NONE, KEY_SPACE, KEY_NONE, KEY_NONE, KEY_NONE,     KEY_ALT_RIGHT, KEY_GUI_RIGHT,    KEY_CONTROL_RIGHT,   KEY_ARROW_LEFT,        KEY_ARROW_DOWN, KEY_ARROW_RIGHT],
    ],
    alternates: &DEFAULT_ALTERNATES,
    media: &DEFAULT_MEDIA,
};
