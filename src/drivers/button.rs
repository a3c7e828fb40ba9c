//! Push-button driver: single synchronous level read.
//!
//! ## Hardware
//!
//! Momentary switch with an external pull-up (active-low in the shipping
//! configuration; polarity is a constructor parameter for other board
//! revisions).
//!
//! Deliberately *not* debounced and not edge-detected: the control loop
//! samples at tick rate, orders of magnitude slower than switch bounce,
//! and a held button is meant to ring again on every pass.

use embedded_hal::digital::InputPin;

pub struct Button<P: InputPin> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// `true` while the button is held.  An unreadable pin counts as
    /// released — a broken input must never ring the bell.
    pub fn is_active(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(_) => false,
        }
    }
}
