//! Unified error type for matrixkb.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! Nothing in the scan → translate → emit pipeline fails; these errors
//! only occur at the boundary with the USB stack and are logged there.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Buffer too small for the requested operation.
    BufferOverflow,

    /// The report queue towards the USB writer is full; the report was dropped.
    QueueFull,

    /// USB stack returned an error.
    Usb(UsbError),
}

/// Subset of USB endpoint errors we propagate (keeps the enum `Copy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UsbError {
    /// The endpoint is not configured or the host has not enumerated us yet.
    Disabled,
    /// The report did not fit into the endpoint's max packet size.
    BufferOverflow,
}

// Convenience conversions

impl From<UsbError> for Error {
    fn from(e: UsbError) -> Self {
        Error::Usb(e)
    }
}
