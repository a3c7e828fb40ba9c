//! Bell/strike relay driver.
//!
//! Generic over any [`OutputPin`] so the same driver runs on the real
//! GPIO and on mock pins in tests.  The driver owns a software mirror of
//! the coil state and maps logical "energized" onto the configured
//! electrical polarity (most cheap relay boards are active-low).
//!
//! Pin write results are discarded: there is no feedback line on this
//! board, so a failed drive is indistinguishable from a successful one.

use embedded_hal::digital::{OutputPin, PinState};

/// A relay controlled by a digital output pin.
pub struct Relay<P: OutputPin> {
    pin: P,
    active_low: bool,
    energized: bool,
}

impl<P: OutputPin> Relay<P> {
    /// Take ownership of the pin and force the coil to its resting level.
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut relay = Self {
            pin,
            active_low,
            energized: false,
        };
        relay.apply();
        relay
    }

    /// Drive the coil: `true` = energized.
    pub fn set(&mut self, energized: bool) {
        self.energized = energized;
        self.apply();
    }

    /// Whether the coil is currently energized (software mirror).
    pub fn is_energized(&self) -> bool {
        self.energized
    }

    fn apply(&mut self) {
        let high = self.energized != self.active_low;
        let _ = self.pin.set_state(PinState::from(high));
    }
}
