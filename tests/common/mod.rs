//! Shared host-side fixtures: a simulated switch matrix and a sink that
//! records every report the emitter sends.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use matrixkb::config::{MATRIX_COLS, MATRIX_ROWS, REPORT_ID_CONSUMER_CONTROL, REPORT_ID_KEYBOARD};
use matrixkb::hid::keyboard::KEYBOARD_SLOTS;
use matrixkb::hid::{HidReport, KeyboardReport, MediaReport};
use matrixkb::{KeyMap, Matrix, ReportSink, DEFAULT_KEYMAP};

/// Closed switches, as `(row, col)`, plus the currently driven column.
#[derive(Default)]
pub struct Switches {
    closed: Vec<(usize, usize)>,
    driven: Option<usize>,
}

#[derive(Clone, Default)]
pub struct Board(Rc<RefCell<Switches>>);

impl Board {
    pub fn press(&self, row: usize, col: usize) {
        let mut switches = self.0.borrow_mut();
        if !switches.closed.contains(&(row, col)) {
            switches.closed.push((row, col));
        }
    }

    pub fn release(&self, row: usize, col: usize) {
        self.0.borrow_mut().closed.retain(|&pos| pos != (row, col));
    }

    pub fn release_all(&self) {
        self.0.borrow_mut().closed.clear();
    }
}

pub struct ColPin(usize, Board);
pub struct RowPin(usize, Board);
pub struct NoDelay;

impl ErrorType for ColPin {
    type Error = Infallible;
}

impl OutputPin for ColPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut switches = (self.1).0.borrow_mut();
        if switches.driven == Some(self.0) {
            switches.driven = None;
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        (self.1).0.borrow_mut().driven = Some(self.0);
        Ok(())
    }
}

impl ErrorType for RowPin {
    type Error = Infallible;
}

impl InputPin for RowPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        let switches = (self.1).0.borrow();
        let closed = |col: usize| switches.closed.contains(&(self.0, col));
        Ok(switches.driven.is_some_and(closed))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

pub type TestMatrix<'a> = Matrix<'a, RowPin, ColPin, NoDelay, MATRIX_ROWS, MATRIX_COLS>;

/// A matrix wired to the default keymap, and the board that drives it.
pub fn default_matrix() -> (TestMatrix<'static>, Board) {
    matrix_with(&DEFAULT_KEYMAP)
}

pub fn matrix_with(keymap: &KeyMap<MATRIX_ROWS, MATRIX_COLS>) -> (TestMatrix<'_>, Board) {
    let board = Board::default();
    let cols = core::array::from_fn(|i| ColPin(i, board.clone()));
    let rows = core::array::from_fn(|i| RowPin(i, board.clone()));
    (Matrix::new(cols, rows, NoDelay, keymap), board)
}

/// Everything handed to the sink, in send order.
#[derive(Default)]
pub struct RecordingSink {
    pub sent: Vec<HidReport>,
}

impl RecordingSink {
    pub fn take(&mut self) -> Vec<HidReport> {
        std::mem::take(&mut self.sent)
    }
}

impl ReportSink for RecordingSink {
    fn send_keyboard_report(
        &mut self,
        report_id: u8,
        modifier: u8,
        keycodes: &[u8; KEYBOARD_SLOTS],
    ) {
        assert_eq!(report_id, REPORT_ID_KEYBOARD);
        self.sent.push(keyboard(modifier, *keycodes));
    }

    fn send_raw_report(&mut self, report_id: u8, payload: &[u8]) {
        assert_eq!(report_id, REPORT_ID_CONSUMER_CONTROL);
        assert_eq!(payload.len(), 1);
        self.sent.push(HidReport::Media(MediaReport::new(payload[0])));
    }
}

pub fn keyboard(modifier: u8, keycodes: [u8; KEYBOARD_SLOTS]) -> HidReport {
    HidReport::Keyboard(KeyboardReport::new(modifier, keycodes))
}

pub fn media(actions: u8) -> HidReport {
    HidReport::Media(MediaReport::new(actions))
}
