//! BellHop Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single blocking control thread.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          LogEventSink      Esp32TimeAdapter   │
//! │  (Actuator+Input+Delay)   (EventSink)       (uptime, sleep)    │
//! │  WifiAdapter              HttpTriggerAdapter                   │
//! │  (Connectivity)           (RemoteTrigger)                      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  tick: sleep · button · poll cadence · actuation       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This binary only builds with the `espidf` feature; host targets use
//! the library plus the simulation halves of the adapters.
#![deny(unused_must_use)]

use anyhow::Result;
use log::{debug, error, info, warn};

use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, EspWifi};

use bellhop::adapters::device_id;
use bellhop::adapters::hardware::HardwareAdapter;
use bellhop::adapters::log_sink::LogEventSink;
use bellhop::adapters::remote::HttpTriggerAdapter;
use bellhop::adapters::time::Esp32TimeAdapter;
use bellhop::adapters::wifi::{ConnectivityPort, WifiAdapter};
use bellhop::app::service::AppService;
use bellhop::config::{self, SystemConfig};
use bellhop::drivers::button::Button;
use bellhop::drivers::relay::Relay;
use bellhop::drivers::warning_lamp::WarningLamp;
use bellhop::drivers::watchdog::Watchdog;
use bellhop::pins;

/// Heartbeat log cadence, in control ticks.
const HEARTBEAT_EVERY_TICKS: u64 = 60;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  BellHop v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SystemConfig::default();
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => warn!("Config echo failed: {}", e),
    }

    // ── 2. Peripherals and GPIO ───────────────────────────────
    let peripherals = Peripherals::take()?;

    // SAFETY: pins::* are the board's dedicated relay/lamp/button GPIOs;
    // nothing else claims them after Peripherals::take().
    let relay_pin = PinDriver::output(unsafe { AnyOutputPin::new(pins::RELAY_GPIO) })?;
    let lamp_pin = PinDriver::output(unsafe { AnyOutputPin::new(pins::WARNING_LAMP_GPIO) })?;
    let mut button_pin = PinDriver::input(unsafe { AnyIOPin::new(pins::BUTTON_GPIO) })?;
    button_pin.set_pull(Pull::Up)?;

    let mut hw = HardwareAdapter::new(
        Relay::new(relay_pin, config.relay_active_low),
        WarningLamp::new(lamp_pin),
        Button::new(button_pin, config.button_active_low),
        Esp32TimeAdapter::new(),
    );

    let watchdog = Watchdog::new();

    // ── 3. Device identity ────────────────────────────────────
    let ident = device_id::DeviceIdentity::detect();
    info!("Device ID: {} (hostname: {})", ident.id(), ident.hostname());

    // ── 4. WiFi station ───────────────────────────────────────
    let sysloop = EspSystemEventLoop::take()?;
    let nvs_partition = EspDefaultNvsPartition::take()?;
    let esp_wifi = EspWifi::new(peripherals.modem, sysloop.clone(), Some(nvs_partition))?;

    let mut wifi = WifiAdapter::new();
    wifi.attach_driver(BlockingWifi::wrap(esp_wifi, sysloop)?);

    if let Err(e) = wifi.set_credentials(config::WIFI_SSID, config::WIFI_PASS) {
        warn!("WiFi credentials rejected ({}), running local-only", e);
    } else if let Err(e) = wifi.connect() {
        // Not fatal: the local button keeps working and wifi.poll()
        // retries with backoff from inside the control loop.
        warn!("WiFi connect failed ({}), will retry in the loop", e);
    }

    // ── 5. Remote trigger endpoint ────────────────────────────
    let mut remote = match HttpTriggerAdapter::new(config::REMOTE_TRIGGER_URL, ident.id()) {
        Ok(r) => {
            info!("Remote trigger endpoint: {}", r.url());
            r
        }
        Err(e) => {
            // Bad build-time URL is unrecoverable — log and halt.
            // In production this triggers the watchdog reset after timeout.
            error!("Remote trigger init failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 6. App service + control loop ─────────────────────────
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(&config);
    app.start(&mut hw, &mut sink);

    info!("System ready. Entering control loop.");

    loop {
        app.tick(&mut hw, &mut remote, &mut sink);

        // WiFi reconnection poll (exponential backoff).
        wifi.poll();

        // Feed watchdog on every iteration.
        watchdog.feed();

        if app.tick_count() % HEARTBEAT_EVERY_TICKS == 0 {
            debug!(
                "HEART | uptime={}s ticks={} wifi={} rssi={:?}",
                hw.uptime_secs(),
                app.tick_count(),
                if wifi.is_connected() { "up" } else { "down" },
                wifi.rssi()
            );
        }
    }
}
