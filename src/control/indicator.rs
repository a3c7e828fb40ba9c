//! Pre-actuation warning indicator.
//!
//! Blinks the warning lamp before the relay moves, giving anyone near the
//! bell or strike a moment of notice.  Fully blocking, like the actuation
//! protocols.

use log::debug;

use crate::app::ports::{ActuatorPort, DelayPort};

/// Blocking lamp blinker.
///
/// The toggle loop runs an *inclusive* index `0..=count`, so `count + 1`
/// lamp writes are issued — one more than a naive reading of "blink
/// `count` times".  The lamp level at step `i` is the parity of `i`
/// (odd = lit), which means an even count always parks the lamp dark.
/// This is long-standing shipped behaviour; the default count is even
/// precisely so the extra write is the one that turns the lamp off.
pub struct WarningIndicator {
    blink_count: u8,
    blink_duration_ms: u32,
}

impl WarningIndicator {
    pub fn new(blink_count: u8, blink_duration_ms: u32) -> Self {
        Self {
            blink_count,
            blink_duration_ms,
        }
    }

    /// Run the full blink sequence.  Each lamp write is followed by a
    /// blocking wait of the configured duration.
    pub fn run(&self, hw: &mut (impl ActuatorPort + DelayPort)) {
        debug!(
            "indicator: {} lamp toggles of {} ms",
            u32::from(self.blink_count) + 1,
            self.blink_duration_ms
        );
        for i in 0..=u32::from(self.blink_count) {
            hw.set_warning_lamp(i % 2 == 1);
            hw.sleep_ms(self.blink_duration_ms);
        }
    }
}
