//! Remote trigger adapter.
//!
//! Implements [`RemoteTriggerPort`] over plain HTTP.  Each poll issues a
//! blocking GET against the trigger endpoint with the device ID as a
//! query parameter:
//!
//! ```text
//! GET <base-url>?id=BH-XXYYZZ
//! ```
//!
//! The server dequeues at most one pending trigger per request and
//! answers with a bare `1` (trigger pending) or `0` (queue empty).
//! Any transport or HTTP failure is reported as "no trigger" so the
//! control loop never sees an error from this port; the failure is
//! logged and counted instead.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real request via
//!   `esp_idf_svc::http::client::EspHttpConnection`.
//! - **all other targets**: deterministic simulation schedule that
//!   answers with canned bodies through the same response parser.

use log::{debug, warn};

use crate::app::ports::RemoteTriggerPort;
use crate::error::{CommsError, Error, Result};

#[cfg(target_os = "espidf")]
use esp_idf_svc::http::client::{Configuration as HttpConfiguration, EspHttpConnection};
#[cfg(target_os = "espidf")]
use esp_idf_svc::http::Method;

/// Longest accepted `<base-url>?id=<device-id>` string.
const MAX_URL_LEN: usize = 160;

/// Response bodies longer than this cannot be a trigger flag.
#[cfg(target_os = "espidf")]
const MAX_BODY_LEN: usize = 16;

// ───────────────────────────────────────────────────────────────
// Response parsing
// ───────────────────────────────────────────────────────────────

/// Interprets a trigger endpoint body.  `1` (allowing surrounding ASCII
/// whitespace) means a trigger is pending; anything else means the
/// queue is empty.
fn parse_trigger_response(body: &[u8]) -> bool {
    let trimmed = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map_or(&[][..], |start| {
            let end = body.len()
                - body
                    .iter()
                    .rev()
                    .position(|b| !b.is_ascii_whitespace())
                    .unwrap_or(0);
            &body[start..end]
        });
    trimmed == b"1"
}

// ───────────────────────────────────────────────────────────────
// HTTP trigger adapter
// ───────────────────────────────────────────────────────────────

pub struct HttpTriggerAdapter {
    /// Full request URL, query parameter included.
    url: heapless::String<MAX_URL_LEN>,
    consecutive_failures: u32,
    #[cfg(not(target_os = "espidf"))]
    sim_poll_counter: u32,
}

impl HttpTriggerAdapter {
    /// Builds the adapter for one device.  The URL is assembled once up
    /// front so the polling path does no formatting.
    pub fn new(base_url: &str, device_id: &str) -> Result<Self> {
        let mut url = heapless::String::new();
        if url.push_str(base_url).is_err()
            || url.push_str("?id=").is_err()
            || url.push_str(device_id).is_err()
        {
            return Err(Error::Config("remote trigger URL too long"));
        }
        Ok(Self {
            url,
            consecutive_failures: 0,
            #[cfg(not(target_os = "espidf"))]
            sim_poll_counter: 0,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_poll(&mut self) -> core::result::Result<bool, CommsError> {
        let mut conn = EspHttpConnection::new(&HttpConfiguration::default())
            .map_err(|_| CommsError::ConnectFailed)?;
        conn.initiate_request(Method::Get, self.url.as_str(), &[])
            .map_err(|_| CommsError::RequestFailed)?;
        conn.initiate_response()
            .map_err(|_| CommsError::RequestFailed)?;

        let status = conn.status();
        if !(200..300).contains(&status) {
            return Err(CommsError::BadStatus(status));
        }

        let mut body = [0u8; MAX_BODY_LEN];
        let mut len = 0;
        while len < body.len() {
            let n = conn
                .read(&mut body[len..])
                .map_err(|_| CommsError::ReadFailed)?;
            if n == 0 {
                break;
            }
            len += n;
        }
        Ok(parse_trigger_response(&body[..len]))
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_poll(&mut self) -> core::result::Result<bool, CommsError> {
        self.sim_poll_counter = self.sim_poll_counter.wrapping_add(1);
        // Fixed schedule: an occasional failure, an occasional trigger.
        if self.sim_poll_counter % 13 == 7 {
            return Err(CommsError::RequestFailed);
        }
        let body: &[u8] = if self.sim_poll_counter % 7 == 3 {
            b"1\n"
        } else {
            b"0\n"
        };
        Ok(parse_trigger_response(body))
    }
}

impl RemoteTriggerPort for HttpTriggerAdapter {
    fn poll_pending(&mut self) -> bool {
        match self.platform_poll() {
            Ok(pending) => {
                self.consecutive_failures = 0;
                debug!(
                    "REMOTE | {} -> {}",
                    self.url,
                    if pending { "pending" } else { "empty" }
                );
                pending
            }
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                warn!(
                    "REMOTE | poll failed ({}, {} consecutive), treating as no trigger",
                    e, self.consecutive_failures
                );
                false
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
