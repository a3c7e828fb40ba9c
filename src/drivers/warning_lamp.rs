//! Warning lamp driver (active-high indicator).

use embedded_hal::digital::{OutputPin, PinState};

pub struct WarningLamp<P: OutputPin> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> WarningLamp<P> {
    /// Take ownership of the pin, starting dark.
    pub fn new(pin: P) -> Self {
        let mut lamp = Self { pin, lit: false };
        lamp.apply();
        lamp
    }

    pub fn set(&mut self, lit: bool) {
        self.lit = lit;
        self.apply();
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    fn apply(&mut self) {
        let _ = self.pin.set_state(PinState::from(self.lit));
    }
}
