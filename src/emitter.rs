//! Edge-triggered report emission.
//!
//! A boot keyboard has no "key released" event: the host only learns a
//! key went up when a report arrives without it. Reports are therefore
//! sent while something is held, plus exactly one all-released report on
//! the cycle after the last key goes up. Nothing is sent while idle.
//!
//! The keyboard and media channels are decided independently each cycle.
//! A cycle that raises a media action does not assert the keyboard
//! channel, so a media-mapped key is never reported as both at once.

use crate::config::{REPORT_ID_CONSUMER_CONTROL, REPORT_ID_KEYBOARD};
use crate::hid::keyboard::KEYBOARD_SLOTS;
use crate::hid::{KeyboardReport, MediaReport};
use crate::snapshot::Snapshot;
use crate::translator::TranslatedReport;

/// Host-link transmission capability.
///
/// Both calls are fire-and-forget: delivery failures and backpressure
/// are the implementor's concern and are never reported back.
pub trait ReportSink {
    fn send_keyboard_report(
        &mut self,
        report_id: u8,
        modifier: u8,
        keycodes: &[u8; KEYBOARD_SLOTS],
    );

    fn send_raw_report(&mut self, report_id: u8, payload: &[u8]);
}

/// Whether the previous cycle left each channel asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmitterState {
    pub keyboard_nonempty: bool,
    pub media_nonempty: bool,
}

/// What one cycle transmits on each channel (`None` = nothing sent).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Emission {
    pub keyboard: Option<KeyboardReport>,
    pub media: Option<MediaReport>,
}

impl Emission {
    /// `true` if neither channel transmitted.
    pub fn is_idle(&self) -> bool {
        self.keyboard.is_none() && self.media.is_none()
    }
}

/// Decide this cycle's transmissions and the state carried to the next.
///
/// A channel sent only to close out a previous cycle always gets the
/// empty report, never the current slots.
pub fn decide(
    state: EmitterState,
    report: &TranslatedReport,
    snapshot: &Snapshot,
) -> (EmitterState, Emission) {
    let media_active = report.fn_active && report.media != 0;
    let keyboard_active = !snapshot.is_empty() && report.media == 0;

    let media = if media_active {
        Some(report.media_report())
    } else if state.media_nonempty {
        Some(MediaReport::empty())
    } else {
        None
    };

    let keyboard = if keyboard_active {
        Some(report.keyboard_report())
    } else if state.keyboard_nonempty {
        Some(KeyboardReport::empty())
    } else {
        None
    };

    let next = EmitterState {
        keyboard_nonempty: keyboard_active,
        media_nonempty: media_active,
    };

    (next, Emission { keyboard, media })
}

/// Owns the emission state for the lifetime of the report loop.
#[derive(Debug, Default)]
pub struct Emitter {
    state: EmitterState,
}

impl Emitter {
    pub const fn new() -> Self {
        Self {
            state: EmitterState {
                keyboard_nonempty: false,
                media_nonempty: false,
            },
        }
    }

    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Run one cycle: decide, transmit (media first), and advance state.
    pub fn emit<S: ReportSink>(
        &mut self,
        report: &TranslatedReport,
        snapshot: &Snapshot,
        sink: &mut S,
    ) -> Emission {
        let (next, emission) = decide(self.state, report, snapshot);
        self.state = next;

        if let Some(media) = emission.media {
            sink.send_raw_report(REPORT_ID_CONSUMER_CONTROL, &[media.actions]);
        }
        if let Some(keyboard) = emission.keyboard {
            sink.send_keyboard_report(REPORT_ID_KEYBOARD, keyboard.modifier, &keyboard.keycodes);
        }

        emission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::HidReport;
    use crate::keycode::*;
    use crate::keymap::DEFAULT_KEYMAP;
    use crate::translator::translate;

    #[derive(Default)]
    struct RecordingSink {
        sent: Vec<(u8, HidReport)>,
    }

    impl ReportSink for RecordingSink {
        fn send_keyboard_report(
            &mut self,
            report_id: u8,
            modifier: u8,
            keycodes: &[u8; KEYBOARD_SLOTS],
        ) {
            let report = KeyboardReport::new(modifier, *keycodes);
            self.sent.push((report_id, HidReport::Keyboard(report)));
        }

        fn send_raw_report(&mut self, report_id: u8, payload: &[u8]) {
            let report = MediaReport::new(payload[0]);
            self.sent.push((report_id, HidReport::Media(report)));
        }
    }

    fn cycle(emitter: &mut Emitter, sink: &mut RecordingSink, codes: &[u8]) -> Emission {
        let snapshot = Snapshot::from_codes(codes);
        let report = translate(&snapshot, &DEFAULT_KEYMAP);
        emitter.emit(&report, &snapshot, sink)
    }

    fn keyboard(modifier: u8, keys: &[u8]) -> HidReport {
        let mut keycodes = [0u8; 6];
        keycodes[..keys.len()].copy_from_slice(keys);
        HidReport::Keyboard(KeyboardReport::new(modifier, keycodes))
    }

    fn media(actions: u8) -> HidReport {
        HidReport::Media(MediaReport::new(actions))
    }

    #[test]
    fn idle_sends_nothing() {
        let mut emitter = Emitter::new();
        let mut sink = RecordingSink::default();
        for _ in 0..3 {
            assert!(cycle(&mut emitter, &mut sink, &[]).is_idle());
        }
        assert!(sink.sent.is_empty());
    }

    #[test]
    fn press_then_release_sends_exactly_one_empty_report() {
        let mut emitter = Emitter::new();
        let mut sink = RecordingSink::default();

        cycle(&mut emitter, &mut sink, &[KEY_A]);
        cycle(&mut emitter, &mut sink, &[]);
        cycle(&mut emitter, &mut sink, &[]);

        assert_eq!(
            sink.sent,
            vec![
                (REPORT_ID_KEYBOARD, keyboard(0, &[KEY_A])),
                (REPORT_ID_KEYBOARD, keyboard(0, &[])),
            ]
        );
    }

    #[test]
    fn held_key_is_resent_every_cycle() {
        let mut emitter = Emitter::new();
        let mut sink = RecordingSink::default();
        for _ in 0..3 {
            cycle(&mut emitter, &mut sink, &[KEY_SHIFT_LEFT, KEY_B]);
        }
        assert_eq!(sink.sent.len(), 3);
        assert!(sink
            .sent
            .iter()
            .all(|(_, r)| *r == keyboard(MOD_LEFT_SHIFT, &[KEY_B])));
    }

    #[test]
    fn fn_alone_asserts_keyboard_channel() {
        let mut emitter = Emitter::new();
        let mut sink = RecordingSink::default();

        let emission = cycle(&mut emitter, &mut sink, &[KEY_GUI_RIGHT]);
        assert_eq!(emission.keyboard, Some(KeyboardReport::empty()));
        assert_eq!(emission.media, None);
        assert!(emitter.state().keyboard_nonempty);
    }

    #[test]
    fn media_key_press_and_release() {
        let mut emitter = Emitter::new();
        let mut sink = RecordingSink::default();

        cycle(&mut emitter, &mut sink, &[KEY_GUI_RIGHT, KEY_ARROW_UP]);
        cycle(&mut emitter, &mut sink, &[]);
        cycle(&mut emitter, &mut sink, &[]);

        assert_eq!(
            sink.sent,
            vec![
                (REPORT_ID_CONSUMER_CONTROL, media(MEDIA_VOLUME_UP)),
                (REPORT_ID_CONSUMER_CONTROL, media(0)),
            ]
        );
    }

    #[test]
    fn media_cycle_suppresses_keyboard_channel() {
        let mut emitter = Emitter::new();
        let mut sink = RecordingSink::default();

        let emission = cycle(&mut emitter, &mut sink, &[KEY_GUI_RIGHT, KEY_ARROW_LEFT]);
        assert_eq!(emission.keyboard, None);
        assert_eq!(emission.media, Some(MediaReport::new(MEDIA_SCAN_PREV)));
    }

    #[test]
    fn switching_from_keyboard_to_media_releases_keyboard() {
        let mut emitter = Emitter::new();
        let mut sink = RecordingSink::default();

        // FN held first, then an arrow: the keyboard channel is closed with
        // an all-released report rather than reporting the arrow.
        cycle(&mut emitter, &mut sink, &[KEY_GUI_RIGHT]);
        sink.sent.clear();
        let emission = cycle(&mut emitter, &mut sink, &[KEY_GUI_RIGHT, KEY_ARROW_RIGHT]);

        assert_eq!(emission.media, Some(MediaReport::new(MEDIA_SCAN_NEXT)));
        assert_eq!(emission.keyboard, Some(KeyboardReport::empty()));
        assert_eq!(
            sink.sent,
            vec![
                (REPORT_ID_CONSUMER_CONTROL, media(MEDIA_SCAN_NEXT)),
                (REPORT_ID_KEYBOARD, keyboard(0, &[])),
            ]
        );
        assert_eq!(
            emitter.state(),
            EmitterState {
                keyboard_nonempty: false,
                media_nonempty: true,
            }
        );
    }

    #[test]
    fn decide_is_pure() {
        let snapshot = Snapshot::from_codes(&[KEY_A]);
        let report = translate(&snapshot, &DEFAULT_KEYMAP);
        let state = EmitterState::default();
        let first = decide(state, &report, &snapshot);
        assert_eq!(first, decide(state, &report, &snapshot));
    }
}
