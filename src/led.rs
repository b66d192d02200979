//! Status LED task.
//!
//! Feeds the USB link state and the host's Caps Lock LED into a
//! [`StatusIndicator`] and writes the pin whenever the level changes.

use defmt::info;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Instant, Ticker};

use matrixkb::config::LED_POLL_MS;
use matrixkb::StatusIndicator;

use crate::usb::hid_device;

pub async fn led_task(mut led: Output<'static>) -> ! {
    let mut indicator = StatusIndicator::new();
    let mut ticker = Ticker::every(Duration::from_millis(LED_POLL_MS));

    loop {
        let link = hid_device::link_state();
        if link != indicator.link_state() {
            info!("Status: {}", link);
            indicator.set_link_state(link);
        }
        indicator.set_caps_lock(hid_device::caps_lock());

        if let Some(on) = indicator.poll(Instant::now().as_millis()) {
            led.set_level(on.into());
        }

        ticker.next().await;
    }
}
