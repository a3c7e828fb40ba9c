//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements        | Connects to               |
//! |-------------|-------------------|---------------------------|
//! | `hardware`  | ActuatorPort      | ESP32 GPIO (relay, lamp)  |
//! |             | InputPort         | ESP32 GPIO (push button)  |
//! |             | DelayPort         | FreeRTOS blocking delay   |
//! | `log_sink`  | EventSink         | Serial log output         |
//! | `remote`    | RemoteTriggerPort | HTTP trigger endpoint     |
//! | `time`      | —                 | ESP32 system timer        |
//! | `wifi`      | ConnectivityPort  | ESP-IDF WiFi STA          |
//! | `device_id` | —                 | eFuse factory MAC         |

pub mod device_id;
pub mod hardware;
pub mod log_sink;
pub mod remote;
pub mod time;
pub mod wifi;
