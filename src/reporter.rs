//! The report loop: fixed-cadence scan-to-report cycle on the USB side.
//!
//! [`ReportLoop`] owns everything the reporting context keeps between
//! cycles (its copy of the latest snapshot, the emission state, and the
//! cadence timestamp), so no global mutable state is involved.
//!
//! The cadence is an elapsed-time check rather than a sleep: `poll` may be
//! called as often as the caller likes and only runs a cycle once the
//! interval has passed. The next deadline advances by exactly one interval,
//! so a late cycle does not shift the ones after it.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::emitter::{Emission, Emitter, ReportSink};
use crate::keymap::KeyMap;
use crate::snapshot::{SnapshotChannel, SnapshotReader};
use crate::translator::translate;

/// Result of one call to [`ReportLoop::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// The interval has not elapsed yet; nothing happened.
    NotDue,
    /// A cycle ran; carries what was transmitted.
    Reported(Emission),
    /// The bus is suspended and a key is held: wake the host instead of
    /// sending reports.
    WakeupRequested,
}

pub struct ReportLoop<'a, M: RawMutex, const ROWS: usize, const COLS: usize> {
    keymap: &'a KeyMap<ROWS, COLS>,
    reader: SnapshotReader<'a, M>,
    emitter: Emitter,
    interval_ms: u64,
    last_ms: u64,
}

impl<'a, M: RawMutex, const ROWS: usize, const COLS: usize> ReportLoop<'a, M, ROWS, COLS> {
    pub fn new(
        keymap: &'a KeyMap<ROWS, COLS>,
        channel: &'a SnapshotChannel<M>,
        interval_ms: u64,
    ) -> Self {
        Self {
            keymap,
            reader: SnapshotReader::new(channel),
            emitter: Emitter::new(),
            interval_ms,
            last_ms: 0,
        }
    }

    /// Timestamp (ms) at which the next cycle becomes due.
    pub fn next_due_ms(&self) -> u64 {
        self.last_ms + self.interval_ms
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Run a cycle if one is due at `now_ms`.
    pub fn poll<S: ReportSink>(
        &mut self,
        now_ms: u64,
        suspended: bool,
        sink: &mut S,
    ) -> CycleOutcome {
        if now_ms.saturating_sub(self.last_ms) < self.interval_ms {
            return CycleOutcome::NotDue;
        }
        self.last_ms += self.interval_ms;

        let snapshot = self.reader.refresh();

        if suspended && !snapshot.is_empty() {
            return CycleOutcome::WakeupRequested;
        }

        let report = translate(snapshot, self.keymap);
        CycleOutcome::Reported(self.emitter.emit(&report, snapshot, sink))
    }
}
