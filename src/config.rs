//! System configuration parameters
//!
//! All tunable parameters for the BellHop controller.  Values are fixed at
//! build/boot time; there is no runtime provisioning or persistence.

use serde::{Deserialize, Serialize};

use crate::control::actuation::OperateMode;

// ---------------------------------------------------------------------------
// Build-time constants (site-specific, set before flashing)
// ---------------------------------------------------------------------------

/// Wi-Fi station credentials.
pub const WIFI_SSID: &str = "workshop-iot";
pub const WIFI_PASS: &str = "change-me-before-flashing";

/// Base URL of the trigger queue endpoint.  The device id is appended as a
/// query parameter, e.g. `https://bellhop.example.net/api/trigger?id=BH-A1B2C3`.
pub const REMOTE_TRIGGER_URL: &str = "http://bellhop.example.net/api/trigger";

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Control loop ---
    /// Idle sleep at the top of every control-loop tick (milliseconds)
    pub tick_period_ms: u32,
    /// Remote trigger poll cadence: poll once every this many ticks
    pub remote_poll_ticks: u32,

    // --- Relay actuation ---
    /// STATIC mode: how long the relay stays energized (milliseconds)
    pub relay_dwell_ms: u32,
    /// FLICKER mode: interval between relay flips (milliseconds)
    pub flicker_interval_ms: u32,
    /// FLICKER mode: total actuation duration (milliseconds)
    pub flicker_total_ms: u32,
    /// Actuation mode used for remotely requested triggers.
    /// The local button always rings FLICKER.
    pub remote_trigger_mode: OperateMode,

    // --- Warning indicator ---
    /// Lamp toggle count before an actuation (an even count parks the lamp dark)
    pub warning_blink_count: u8,
    /// Wait after each lamp toggle (milliseconds)
    pub warning_blink_ms: u32,

    // --- I/O polarity ---
    /// Button reads LOW when pressed (external pull-up)
    pub button_active_low: bool,
    /// Relay board energizes on a LOW gpio level
    pub relay_active_low: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Control loop
            tick_period_ms: 1000,
            remote_poll_ticks: 5,

            // Relay actuation
            relay_dwell_ms: 4000,
            flicker_interval_ms: 500,
            flicker_total_ms: 4000,
            remote_trigger_mode: OperateMode::Flicker,

            // Warning indicator
            warning_blink_count: 6,
            warning_blink_ms: 300,

            // I/O polarity
            button_active_low: true,
            relay_active_low: false,
        }
    }
}
