//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the relay, warning lamp and button drivers plus the time source,
//! exposing them through [`ActuatorPort`], [`InputPort`] and
//! [`DelayPort`].  Generic over the concrete pins so the same adapter
//! wires up `esp-idf-hal` pin drivers on target and fake pins anywhere
//! else.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::adapters::time::Esp32TimeAdapter;
use crate::app::ports::{ActuatorPort, DelayPort, InputPort};
use crate::drivers::button::Button;
use crate::drivers::relay::Relay;
use crate::drivers::warning_lamp::WarningLamp;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<R: OutputPin, L: OutputPin, B: InputPin> {
    relay: Relay<R>,
    lamp: WarningLamp<L>,
    button: Button<B>,
    clock: Esp32TimeAdapter,
}

impl<R: OutputPin, L: OutputPin, B: InputPin> HardwareAdapter<R, L, B> {
    pub fn new(
        relay: Relay<R>,
        lamp: WarningLamp<L>,
        button: Button<B>,
        clock: Esp32TimeAdapter,
    ) -> Self {
        Self {
            relay,
            lamp,
            button,
            clock,
        }
    }

    /// Uptime passthrough for the main-loop heartbeat log.
    pub fn uptime_secs(&self) -> u64 {
        self.clock.uptime_secs()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<R: OutputPin, L: OutputPin, B: InputPin> ActuatorPort for HardwareAdapter<R, L, B> {
    fn set_relay(&mut self, energized: bool) {
        self.relay.set(energized);
    }

    fn set_warning_lamp(&mut self, lit: bool) {
        self.lamp.set(lit);
    }

    fn all_off(&mut self) {
        self.relay.set(false);
        self.lamp.off();
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<R: OutputPin, L: OutputPin, B: InputPin> InputPort for HardwareAdapter<R, L, B> {
    fn button_active(&mut self) -> bool {
        self.button.is_active()
    }
}

// ── DelayPort implementation ──────────────────────────────────

impl<R: OutputPin, L: OutputPin, B: InputPin> DelayPort for HardwareAdapter<R, L, B> {
    fn sleep_ms(&mut self, ms: u32) {
        self.clock.sleep_ms(ms);
    }
}
