//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! Loop-phase changes are demoted to trace so per-tick chatter stays out
//! of the production log, where only polls and actuations matter.

use log::{debug, info, trace};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                trace!("STATE | {} -> {}", from.name(), to.name());
            }
            AppEvent::RemotePolled { pending } => {
                debug!(
                    "POLL  | remote queue: {}",
                    if *pending { "trigger pending" } else { "empty" }
                );
            }
            AppEvent::ActuationStarted { source, mode } => {
                info!("RING  | start: source={:?} mode={:?}", source, mode);
            }
            AppEvent::ActuationCompleted {
                source,
                mode,
                flips,
            } => {
                info!(
                    "RING  | done: source={:?} mode={:?} flips={}",
                    source, mode, flips
                );
            }
        }
    }
}
