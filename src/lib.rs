//! Host-testable core of the matrixkb keyboard firmware.
//!
//! Everything that holds state or makes a decision lives here and runs
//! on the host without hardware:
//!
//! ```text
//! keymap ─▶ matrix ─▶ snapshot channel ─▶ translator ─▶ emitter ─▶ ReportSink
//!  (data)   (core 1)      (handoff)         (FN layer)   (edges)    (USB, core 0)
//! ```
//!
//! Usage: `cargo test` (host). The embedded binary in `main.rs` is built
//! with `--features embedded` and only adds board bring-up and the USB
//! glue around these modules.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod hid;
pub mod keycode;
pub mod keymap;
pub mod matrix;
pub mod reporter;
pub mod snapshot;
pub mod status;
pub mod translator;

pub use emitter::{Emission, Emitter, EmitterState, ReportSink};
pub use error::{Error, UsbError};
pub use keymap::{KeyMap, DEFAULT_KEYMAP};
pub use matrix::Matrix;
pub use reporter::{CycleOutcome, ReportLoop};
pub use snapshot::{Snapshot, SnapshotChannel, SnapshotReader};
pub use status::{LinkState, StatusIndicator};
pub use translator::{translate, TranslatedReport};
