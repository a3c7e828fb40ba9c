//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today that is the serial log, but
//! the sink is also what integration tests record to assert sequencing.

use crate::control::actuation::OperateMode;

use super::service::LoopState;

/// Where a trigger came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// The wired push-button next to the bell.
    LocalButton,
    /// The polled trigger queue on the server.
    Remote,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The control loop has started (carries initial state).
    Started(LoopState),

    /// The loop moved between phases.
    StateChanged { from: LoopState, to: LoopState },

    /// The remote trigger queue was polled.
    RemotePolled { pending: bool },

    /// A trigger was accepted and the warning/actuation sequence begins.
    ActuationStarted {
        source: TriggerSource,
        mode: OperateMode,
    },

    /// The actuation sequence finished; the relay is back at rest.
    ActuationCompleted {
        source: TriggerSource,
        mode: OperateMode,
        flips: u32,
    },
}
