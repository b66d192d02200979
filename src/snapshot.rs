//! Scan snapshots and the single-slot handoff between scan and report loops.
//!
//! The scan loop runs on its own core and the report loop runs on the
//! USB executor. They share exactly one [`Snapshot`] slot. Both sides
//! use a non-blocking `try_lock`: whoever finds the slot busy simply
//! skips the transfer this cycle. The scanner keeps scanning and the
//! reporter keeps using the last snapshot it managed to read, so neither
//! cadence can stall the other.
//!
//! A transfer always copies a whole snapshot under the lock, so the
//! reader never sees a mix of two scan passes. It may see a stale one.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use heapless::Vec;

use crate::config::MAX_KEYS;
use crate::keycode::KEY_NONE;

/// Keycodes seen active during one complete scan pass, in encounter order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    keys: Vec<u8, MAX_KEYS>,
}

impl Snapshot {
    /// An empty snapshot (nothing pressed).
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Build a snapshot from a list of codes, dropping `KEY_NONE` and
    /// anything past `MAX_KEYS`.
    pub fn from_codes(codes: &[u8]) -> Self {
        let mut snapshot = Self::new();
        for &code in codes {
            snapshot.push(code);
        }
        snapshot
    }

    /// Append a keycode. Returns `false` (and stores nothing) for
    /// `KEY_NONE` or when the snapshot is already full.
    pub fn push(&mut self, code: u8) -> bool {
        if code == KEY_NONE {
            return false;
        }
        self.keys.push(code).is_ok()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.is_full()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys.iter().copied()
    }
}

/// Latest-value slot shared between the scan and report loops.
pub struct SnapshotChannel<M: RawMutex> {
    slot: Mutex<M, Snapshot>,
}

impl<M: RawMutex> SnapshotChannel<M> {
    /// Create a channel whose slot already holds an empty snapshot.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Snapshot::new()),
        }
    }

    /// Producer side: overwrite the slot with `snapshot`.
    ///
    /// Returns `false` if the reader held the slot; the pass is dropped.
    pub fn publish(&self, snapshot: &Snapshot) -> bool {
        match self.slot.try_lock() {
            Ok(mut slot) => {
                slot.clone_from(snapshot);
                true
            }
            Err(_) => false,
        }
    }

    /// Consumer side: copy the slot out, or `None` if the producer held it.
    pub fn try_read(&self) -> Option<Snapshot> {
        self.slot.try_lock().ok().map(|slot| slot.clone())
    }
}

impl<M: RawMutex> Default for SnapshotChannel<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// The report loop's local copy of the shared slot.
///
/// Starts out empty, so a reader that loses the very first race still
/// works on a well-defined "nothing pressed" snapshot.
pub struct SnapshotReader<'a, M: RawMutex> {
    channel: &'a SnapshotChannel<M>,
    last: Snapshot,
}

impl<'a, M: RawMutex> SnapshotReader<'a, M> {
    pub fn new(channel: &'a SnapshotChannel<M>) -> Self {
        Self {
            channel,
            last: Snapshot::new(),
        }
    }

    /// Try to pick up the newest snapshot; fall back to the last one read.
    pub fn refresh(&mut self) -> &Snapshot {
        match self.channel.try_read() {
            Some(snapshot) => self.last = snapshot,
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("snapshot slot busy, reusing previous pass");
            }
        }
        &self.last
    }

    /// The snapshot most recently returned by [`refresh`](Self::refresh).
    pub fn last(&self) -> &Snapshot {
        &self.last
    }
}
