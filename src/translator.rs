//! Snapshot → report translation, including the FN layer.
//!
//! Codes are taken in encounter order. Modifiers set their bit and take
//! no slot; the FN trigger sets `fn_active` and nothing else; every other
//! code takes the next of six slots, and the 7th and later are dropped.
//!
//! With FN held, two independent passes run over the occupied slots:
//! first each code is swapped for its alternate (if it has one), then each
//! resulting code ORs its media flags into the media byte. The media pass
//! leaves the slot in place, so one key can yield both a keyboard usage
//! and a media action.

use crate::hid::keyboard::KEYBOARD_SLOTS;
use crate::hid::{KeyboardReport, MediaReport};
use crate::keycode::{modifier_bit, FN_TRIGGER};
use crate::keymap::KeyMap;
use crate::snapshot::Snapshot;

/// Report derived from one snapshot. Holds no state across cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TranslatedReport {
    pub modifier: u8,
    pub keycodes: [u8; KEYBOARD_SLOTS],
    pub media: u8,
    pub fn_active: bool,
}

impl TranslatedReport {
    pub fn keyboard_report(&self) -> KeyboardReport {
        KeyboardReport::new(self.modifier, self.keycodes)
    }

    pub fn media_report(&self) -> MediaReport {
        MediaReport::new(self.media)
    }

    /// Number of occupied ordinary slots.
    pub fn key_count(&self) -> usize {
        self.keycodes.iter().take_while(|&&k| k != 0).count()
    }
}

/// Translate a scan snapshot into a report.
pub fn translate<const ROWS: usize, const COLS: usize>(
    snapshot: &Snapshot,
    keymap: &KeyMap<ROWS, COLS>,
) -> TranslatedReport {
    let mut report = TranslatedReport::default();
    let mut used = 0;

    for code in snapshot.iter() {
        if let Some(bit) = modifier_bit(code) {
            report.modifier |= bit;
        } else if code == FN_TRIGGER {
            report.fn_active = true;
        } else if used < KEYBOARD_SLOTS {
            report.keycodes[used] = code;
            used += 1;
        }
    }

    if report.fn_active {
        let slots = &mut report.keycodes[..used];

        for slot in slots.iter_mut() {
            if let Some(alternate) = keymap.alternate_of(*slot) {
                *slot = alternate;
            }
        }

        for &code in slots.iter() {
            if let Some(flags) = keymap.media_of(code) {
                report.media |= flags;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::*;
    use crate::keymap::DEFAULT_KEYMAP;

    fn tr(codes: &[u8]) -> TranslatedReport {
        translate(&Snapshot::from_codes(codes), &DEFAULT_KEYMAP)
    }

    #[test]
    fn empty_snapshot_gives_empty_report() {
        assert_eq!(tr(&[]), TranslatedReport::default());
    }

    #[test]
    fn ordinary_keys_fill_slots_in_order() {
        let report = tr(&[KEY_H, KEY_I]);
        assert_eq!(report.keycodes, [KEY_H, KEY_I, 0, 0, 0, 0]);
        assert_eq!(report.modifier, 0);
        assert_eq!(report.key_count(), 2);
    }

    #[test]
    fn modifiers_set_bits_without_taking_slots() {
        let report = tr(&[KEY_CONTROL_LEFT, KEY_A, KEY_SHIFT_RIGHT, KEY_ALT_RIGHT]);
        let expected = MOD_LEFT_CTRL | MOD_RIGHT_SHIFT | MOD_RIGHT_ALT;
        assert_eq!(report.modifier, expected);
        assert_eq!(report.keycodes, [KEY_A, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn seventh_ordinary_key_is_dropped() {
        let report = tr(&[KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F, KEY_G, KEY_H]);
        assert_eq!(report.keycodes, [KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F]);
    }

    #[test]
    fn modifiers_after_full_slots_still_count() {
        let mut codes = vec![KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F, KEY_G];
        codes.push(KEY_GUI_LEFT);
        let report = tr(&codes);
        assert_eq!(report.modifier, MOD_LEFT_GUI);
    }

    #[test]
    fn fn_trigger_is_not_reported_as_modifier() {
        let report = tr(&[KEY_GUI_RIGHT]);
        assert!(report.fn_active);
        assert_eq!(report.modifier & MOD_RIGHT_GUI, 0);
        assert_eq!(report.keycodes, [0; 6]);
    }

    #[test]
    fn fn_remaps_number_row_to_function_keys() {
        let report = tr(&[KEY_GUI_RIGHT, KEY_1]);
        assert!(report.fn_active);
        assert_eq!(report.keycodes[0], KEY_F1);
        assert_eq!(report.modifier, 0);
        assert_eq!(report.media, 0);
    }

    #[test]
    fn fn_remaps_navigation_keys() {
        let report = tr(&[KEY_PAGE_UP, KEY_GUI_RIGHT, KEY_PAGE_DOWN, KEY_DELETE]);
        assert_eq!(report.keycodes, [KEY_HOME, KEY_END, KEY_INSERT, 0, 0, 0]);
    }

    #[test]
    fn unmapped_keys_pass_through_fn_layer() {
        let report = tr(&[KEY_GUI_RIGHT, KEY_Q]);
        assert_eq!(report.keycodes[0], KEY_Q);
        assert_eq!(report.media, 0);
    }

    #[test]
    fn without_fn_there_is_no_remap() {
        let report = tr(&[KEY_1, KEY_ARROW_LEFT]);
        assert!(!report.fn_active);
        assert_eq!(report.keycodes, [KEY_1, KEY_ARROW_LEFT, 0, 0, 0, 0]);
        assert_eq!(report.media, 0);
    }

    #[test]
    fn fn_arrow_sets_media_flag_and_keeps_slot() {
        let report = tr(&[KEY_GUI_RIGHT, KEY_ARROW_LEFT]);
        assert!(report.fn_active);
        assert_eq!(report.media, MEDIA_SCAN_PREV);
        assert_eq!(report.keycodes[0], KEY_ARROW_LEFT);
    }

    #[test]
    fn media_flags_accumulate() {
        let report = tr(&[KEY_ARROW_UP, KEY_ARROW_RIGHT, KEY_GUI_RIGHT]);
        assert_eq!(report.media, MEDIA_VOLUME_UP | MEDIA_SCAN_NEXT);
    }

    #[test]
    fn media_pass_sees_alternate_codes() {
        // A key whose alternate is media-mapped raises the media flag of the
        // alternate, not of the primary.
        static ALTERNATES: [(u8, u8); 1] = [(KEY_J, KEY_ARROW_DOWN)];
        static MEDIA: [(u8, u8); 2] = [
            (KEY_J, MEDIA_SCAN_NEXT),
            (KEY_ARROW_DOWN, MEDIA_VOLUME_DOWN),
        ];
        let map: KeyMap<1, 1> = KeyMap {
            keycodes: [[KEY_J]],
            alternates: &ALTERNATES,
            media: &MEDIA,
        };
        let report = translate(&Snapshot::from_codes(&[KEY_GUI_RIGHT, KEY_J]), &map);
        assert_eq!(report.keycodes[0], KEY_ARROW_DOWN);
        assert_eq!(report.media, MEDIA_VOLUME_DOWN);
    }

    #[test]
    fn translation_is_idempotent() {
        let snapshot = Snapshot::from_codes(&[KEY_SHIFT_LEFT, KEY_GUI_RIGHT, KEY_2, KEY_ARROW_UP]);
        let first = translate(&snapshot, &DEFAULT_KEYMAP);
        let second = translate(&snapshot, &DEFAULT_KEYMAP);
        assert_eq!(first, second);
    }

    #[test]
    fn report_conversions() {
        let report = tr(&[KEY_SHIFT_LEFT, KEY_A, KEY_GUI_RIGHT, KEY_ARROW_DOWN]);
        assert_eq!(
            report.keyboard_report(),
            KeyboardReport::new(MOD_LEFT_SHIFT, [KEY_A, KEY_ARROW_DOWN, 0, 0, 0, 0])
        );
        assert_eq!(report.media_report(), MediaReport::new(MEDIA_VOLUME_DOWN));
    }
}
