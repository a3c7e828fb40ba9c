//! ESP32 time adapter.
//!
//! Provides monotonic uptime queries plus the blocking [`DelayPort`]
//! sleep that every cooperative wait in the control loop goes through.
//!
//! - **`target_os = "espidf"`** — `esp_timer_get_time()` for uptime and a
//!   FreeRTOS task delay for sleeping (yields to the idle task, which
//!   keeps the idle watchdog happy).
//! - **`not(target_os = "espidf")`** — `std::time::Instant` and
//!   `std::thread::sleep` for host-side runs.

use crate::app::ports::DelayPort;

/// Time adapter for the ESP32-S3 platform.
pub struct Esp32TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Seconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_secs(&self) -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64 / 1_000_000
    }

    /// Seconds since boot (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }
}

impl DelayPort for Esp32TimeAdapter {
    fn sleep_ms(&mut self, ms: u32) {
        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);

        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
