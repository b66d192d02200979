//! Status LED policy.
//!
//! The LED blinks at a rate that tells the USB link state apart:
//!
//! | State        | Period  |
//! |--------------|---------|
//! | not mounted  | 250 ms  |
//! | mounted      | 1000 ms |
//! | suspended    | 2500 ms |
//!
//! While the host reports Caps Lock on, the LED is held solid on instead.
//! All state lives in [`StatusIndicator`], owned by the LED task.

use crate::config::{BLINK_MOUNTED_MS, BLINK_NOT_MOUNTED_MS, BLINK_SUSPENDED_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    NotMounted,
    Mounted,
    Suspended,
}

impl LinkState {
    /// Combine the USB device's configured/suspended flags. Suspend wins.
    pub fn from_usb(configured: bool, suspended: bool) -> Self {
        if suspended {
            LinkState::Suspended
        } else if configured {
            LinkState::Mounted
        } else {
            LinkState::NotMounted
        }
    }

    pub const fn blink_interval_ms(self) -> u32 {
        match self {
            LinkState::NotMounted => BLINK_NOT_MOUNTED_MS,
            LinkState::Mounted => BLINK_MOUNTED_MS,
            LinkState::Suspended => BLINK_SUSPENDED_MS,
        }
    }
}

pub struct StatusIndicator {
    link: LinkState,
    caps_lock: bool,
    led_on: bool,
    last_toggle_ms: u64,
    dirty: bool,
}

impl StatusIndicator {
    pub const fn new() -> Self {
        Self {
            link: LinkState::NotMounted,
            caps_lock: false,
            led_on: false,
            last_toggle_ms: 0,
            dirty: false,
        }
    }

    pub fn link_state(&self) -> LinkState {
        self.link
    }

    pub fn set_link_state(&mut self, link: LinkState) {
        self.link = link;
    }

    /// Caps Lock from the host's LED output report.
    pub fn set_caps_lock(&mut self, on: bool) {
        if self.caps_lock == on {
            return;
        }
        self.caps_lock = on;
        self.led_on = on;
        self.dirty = true;
    }

    /// Advance to `now_ms`. Returns the level to write to the LED when it
    /// changes, `None` otherwise.
    pub fn poll(&mut self, now_ms: u64) -> Option<bool> {
        if self.caps_lock {
            self.last_toggle_ms = now_ms;
            return self.take_dirty();
        }

        let interval = u64::from(self.link.blink_interval_ms());
        if now_ms.saturating_sub(self.last_toggle_ms) < interval {
            return self.take_dirty();
        }

        self.last_toggle_ms = now_ms;
        self.led_on = !self.led_on;
        self.dirty = false;
        Some(self.led_on)
    }

    fn take_dirty(&mut self) -> Option<bool> {
        if core::mem::take(&mut self.dirty) {
            Some(self.led_on)
        } else {
            None
        }
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
