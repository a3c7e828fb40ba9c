//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (relay, lamp, button, clock, HTTP poller, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly and the whole control loop runs against mocks on the host.
//!
//! Relay and lamp writes are expressed in *logical* terms (energized / lit);
//! electrical polarity is an adapter concern.

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the relay and lamp.
///
/// Writes carry no result — digital pin I/O on this board is treated as
/// infallible and drive failures are out of scope (there is no feedback
/// line to detect them anyway).
pub trait ActuatorPort {
    /// Drive the relay coil: `true` = energized.
    fn set_relay(&mut self, energized: bool);

    /// Drive the warning lamp: `true` = lit.
    fn set_warning_lamp(&mut self, lit: bool);

    /// Relay de-energized, lamp dark — the safe resting state.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the local push-button.
pub trait InputPort {
    /// Single synchronous level read: `true` while the button is held.
    /// No debouncing and no edge detection — a button still held at the
    /// next read triggers again.
    fn button_active(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Delay port (driven adapter: domain → time source)
// ───────────────────────────────────────────────────────────────

/// Blocking cooperative wait.  The control thread owns the CPU; every
/// pause in the actuation protocol goes through this single seam so tests
/// can run on a virtual clock.
pub trait DelayPort {
    fn sleep_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Remote trigger port (driven adapter: network → domain)
// ───────────────────────────────────────────────────────────────

/// Poll-side port for the remote trigger queue.
///
/// The call may block for as long as the transport needs; the control loop
/// accepts the stall.  Transport failures MUST be swallowed and reported as
/// `false` — a broken network never affects actuation correctness.
pub trait RemoteTriggerPort {
    /// Ask the remote endpoint whether a trigger is queued.
    fn poll_pending(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// the sink failing or dropping events never affects control flow).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
