//! Relay actuation protocols.
//!
//! The relay rings the bell (FLICKER) or holds a door strike open (STATIC).
//! Both protocols are fully blocking: the control thread sits inside
//! `operate()` until the relay is back at rest.
//!
//! | Mode    | Behaviour                                              |
//! |---------|--------------------------------------------------------|
//! | Static  | energize, dwell `D`, de-energize (two pin writes)      |
//! | Flicker | toggle every `I` ms until elapsed ≥ `T`, then one      |
//! |         | corrective flip if the coil is still energized         |
//!
//! The actuator owns the authoritative software relay state.  Hardware is
//! only ever told to move through [`RelayActuator::operate`], and every
//! write updates the software mirror in the same step, so the mirror and
//! the pin cannot drift apart.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::app::ports::{ActuatorPort, DelayPort};

/// How a trigger drives the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperateMode {
    /// One continuous energized dwell (door strike, gate release).
    Static,
    /// Rapid on/off toggling for the whole duration (bell ring).
    Flicker,
}

/// Blocking relay actuation with an owned state mirror.
pub struct RelayActuator {
    /// Software mirror of the coil state.  Starts de-energized; `operate`
    /// guarantees it reads `false` again on return.
    energized: bool,
    dwell_ms: u32,
    flicker_interval_ms: u32,
    flicker_total_ms: u32,
}

impl RelayActuator {
    /// `flicker_interval_ms` must be at least 1: the flicker clock only
    /// advances by one interval per flip, so a zero interval never reaches
    /// the total.
    pub fn new(dwell_ms: u32, flicker_interval_ms: u32, flicker_total_ms: u32) -> Self {
        assert!(
            flicker_interval_ms >= 1,
            "flicker_interval_ms must be >= 1"
        );
        Self {
            energized: false,
            dwell_ms,
            flicker_interval_ms,
            flicker_total_ms,
        }
    }

    /// Run one full actuation.  Blocks until the protocol completes and
    /// returns the number of relay pin writes issued.  On return the relay
    /// is de-energized regardless of mode or starting state.
    pub fn operate(&mut self, mode: OperateMode, hw: &mut (impl ActuatorPort + DelayPort)) -> u32 {
        debug!("relay: {:?} actuation start", mode);
        let flips = match mode {
            OperateMode::Static => self.run_static(hw),
            OperateMode::Flicker => self.run_flicker(hw),
        };
        debug!("relay: {:?} actuation done ({} flips)", mode, flips);
        flips
    }

    /// Current software relay state.
    pub fn is_energized(&self) -> bool {
        self.energized
    }

    /// Invert the relay: read the mirror, write the opposite level, update
    /// the mirror.  Nothing else may touch the relay pin.
    fn flip(&mut self, hw: &mut impl ActuatorPort) {
        let next = !self.energized;
        hw.set_relay(next);
        self.energized = next;
        trace!("relay: flip -> {}", if next { "on" } else { "off" });
    }

    /// Absolute write used by the static protocol; shares the mirror with
    /// `flip` so a static dwell also ends with the mirror reading off.
    fn set(&mut self, energized: bool, hw: &mut impl ActuatorPort) {
        hw.set_relay(energized);
        self.energized = energized;
    }

    fn run_static(&mut self, hw: &mut (impl ActuatorPort + DelayPort)) -> u32 {
        self.set(true, hw);
        hw.sleep_ms(self.dwell_ms);
        self.set(false, hw);
        2
    }

    fn run_flicker(&mut self, hw: &mut (impl ActuatorPort + DelayPort)) -> u32 {
        let mut elapsed_ms: u32 = 0;
        let mut flips: u32 = 0;

        // The full interval is waited after every flip, including the last
        // one, so a total that is not a multiple of the interval overshoots
        // rather than truncating the final pulse.
        while elapsed_ms < self.flicker_total_ms {
            self.flip(hw);
            flips += 1;
            hw.sleep_ms(self.flicker_interval_ms);
            elapsed_ms += self.flicker_interval_ms;
        }

        // Odd toggle count leaves the coil energized; one corrective flip
        // restores the resting state.
        if self.energized {
            debug!("relay: corrective flip to rest");
            self.flip(hw);
            flips += 1;
        }

        flips
    }
}
