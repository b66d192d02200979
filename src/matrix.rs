//! Key matrix scanner.
//!
//! Columns are driven outputs, rows are sampled inputs. Each pass drives
//! one column high, waits for the lines to settle, samples every row,
//! drives the column low again and waits once more before moving on.
//! There is no debounce filter beyond that settle window: a switch has
//! to stay closed for its column's whole active window to be seen.
//!
//! Column and row order is the wiring order of the keymap table, so the
//! arrays handed to [`Matrix::new`] must follow `config::COL_LINES` and
//! `config::ROW_LINES` exactly.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::MATRIX_SETTLE_DELAY_US;
use crate::keymap::KeyMap;
use crate::snapshot::Snapshot;

/// Matrix is the physical pcb layout of the keyboard matrix.
pub struct Matrix<'a, In, Out, D, const ROWS: usize, const COLS: usize>
where
    In: InputPin,
    Out: OutputPin,
    D: DelayNs,
{
    /// Driven column lines, in scan order.
    cols: [Out; COLS],
    /// Sampled row lines, in sample order.
    rows: [In; ROWS],
    delay: D,
    keymap: &'a KeyMap<ROWS, COLS>,
    settle_us: u32,
}

impl<'a, In, Out, D, const ROWS: usize, const COLS: usize> Matrix<'a, In, Out, D, ROWS, COLS>
where
    In: InputPin,
    Out: OutputPin,
    D: DelayNs,
{
    /// Create a matrix from already-configured pins. All columns are
    /// driven inactive before the first scan.
    pub fn new(
        mut cols: [Out; COLS],
        rows: [In; ROWS],
        delay: D,
        keymap: &'a KeyMap<ROWS, COLS>,
    ) -> Self {
        for col in cols.iter_mut() {
            col.set_low().ok();
        }
        Self {
            cols,
            rows,
            delay,
            keymap,
            settle_us: MATRIX_SETTLE_DELAY_US,
        }
    }

    /// Override the settle delay (µs) applied after each column edge.
    pub fn with_settle_delay_us(mut self, settle_us: u32) -> Self {
        self.settle_us = settle_us;
        self
    }

    /// Run one full pass over the matrix.
    ///
    /// Positions mapped to `KEY_NONE` are skipped; detections beyond
    /// `MAX_KEYS` are dropped. A row that fails to read counts as open.
    pub fn scan(&mut self) -> Snapshot {
        let mut snapshot = Snapshot::new();

        for (col_idx, col) in self.cols.iter_mut().enumerate() {
            col.set_high().ok();
            self.delay.delay_us(self.settle_us);

            for (row_idx, row) in self.rows.iter_mut().enumerate() {
                if row.is_high().unwrap_or(false) && !snapshot.is_full() {
                    snapshot.push(self.keymap.keycode(row_idx, col_idx));
                }
            }

            col.set_low().ok();
            self.delay.delay_us(self.settle_us);
        }

        snapshot
    }
}
