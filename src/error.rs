//! Unified error types for the BellHop firmware.
//!
//! The control core deliberately has no recoverable-error taxonomy: relay and
//! lamp writes are fire-and-forget digital I/O.  Errors exist only at the
//! system boundary — peripheral bring-up and the network path — and funnel
//! into a single `Error` enum so top-level handling stays uniform.  All
//! variants are `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral or subsystem initialisation failed.
    Init(&'static str),
    /// The remote trigger channel failed.
    Comms(CommsError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Comms(e) => write!(f, "comms: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Communications errors
// ---------------------------------------------------------------------------

/// Failure modes of the HTTP trigger poll.  A failed poll is always reported
/// to the control loop as "no trigger pending"; these variants exist so the
/// log line can say what actually went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommsError {
    /// Could not open the HTTP connection (DNS, TCP, TLS).
    ConnectFailed,
    /// The GET request could not be sent.
    RequestFailed,
    /// The server answered with a non-200 status.
    BadStatus(u16),
    /// Reading the response body failed mid-stream.
    ReadFailed,
}

impl fmt::Display for CommsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectFailed => write!(f, "connect failed"),
            Self::RequestFailed => write!(f, "request failed"),
            Self::BadStatus(code) => write!(f, "HTTP status {code}"),
            Self::ReadFailed => write!(f, "response read failed"),
        }
    }
}

impl From<CommsError> for Error {
    fn from(e: CommsError) -> Self {
        Self::Comms(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
