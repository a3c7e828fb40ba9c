//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the relay actuator, the warning indicator, and the
//! remote poll cadence.  It exposes a clean, hardware-agnostic API; all
//! I/O flows through port traits injected at call sites, making the whole
//! control loop testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  RemotePort ──▶ │       AppService        │
//! ActuatorPort ◀──│  indicator · actuator   │
//!   DelayPort ◀──│      poll cadence       │
//!                 └────────────────────────┘
//! ```
//!
//! One call to [`AppService::tick`] is one full pass of the control loop.
//! Everything inside is blocking and sequential: a local actuation runs to
//! completion before the remote branch is even evaluated, so at most one
//! actuation sequence is ever in flight.

use log::{info, trace};

use crate::config::SystemConfig;
use crate::control::actuation::{OperateMode, RelayActuator};
use crate::control::indicator::WarningIndicator;

use super::events::{AppEvent, TriggerSource};
use super::ports::{ActuatorPort, DelayPort, EventSink, InputPort, RemoteTriggerPort};

// ───────────────────────────────────────────────────────────────
// Loop state
// ───────────────────────────────────────────────────────────────

/// Phase of the control loop, for transition logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Sleeping out the tick period.
    Idle,
    /// Sampling the button / remote queue.
    Polling,
    /// Blocking inside a warning + actuation sequence.
    Actuating,
}

impl LoopState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Polling => "Polling",
            Self::Actuating => "Actuating",
        }
    }
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    actuator: RelayActuator,
    indicator: WarningIndicator,
    state: LoopState,
    /// Idle sleep at the top of every tick (ms).
    tick_period_ms: u32,
    /// Poll the remote queue once every this many ticks.
    remote_poll_ticks: u32,
    /// Mode for remotely requested actuations; the local button is
    /// hard-wired to FLICKER.
    remote_trigger_mode: OperateMode,
    /// Ticks since the last remote poll.  Stays within
    /// `[0, remote_poll_ticks)` forever: it is reset on the poll branch.
    poll_counter: u32,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// `remote_poll_ticks` is the poll cadence divisor and must be at
    /// least 1.  Does **not** touch hardware — call [`AppService::start`]
    /// next.
    pub fn new(config: &SystemConfig) -> Self {
        assert!(
            config.remote_poll_ticks >= 1,
            "remote_poll_ticks must be >= 1"
        );
        Self {
            actuator: RelayActuator::new(
                config.relay_dwell_ms,
                config.flicker_interval_ms,
                config.flicker_total_ms,
            ),
            indicator: WarningIndicator::new(config.warning_blink_count, config.warning_blink_ms),
            state: LoopState::Idle,
            tick_period_ms: config.tick_period_ms,
            remote_poll_ticks: config.remote_poll_ticks,
            remote_trigger_mode: config.remote_trigger_mode,
            poll_counter: 0,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force the known-safe resting state (relay off, lamp dark) and
    /// announce startup.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        sink.emit(&AppEvent::Started(self.state));
        info!(
            "AppService started in {} (tick {} ms, remote poll every {} ticks)",
            self.state.name(),
            self.tick_period_ms,
            self.remote_poll_ticks
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle:
    ///
    /// 1. sleep out the tick period,
    /// 2. read the local button — if held, warn + FLICKER,
    /// 3. count the tick towards the poll cadence — on every
    ///    `remote_poll_ticks`-th tick, poll the remote queue and, if a
    ///    trigger is pending, warn + actuate in the configured mode.
    ///
    /// The call blocks for the entire cycle, actuations included.  The
    /// `hw` parameter satisfies [`ActuatorPort`], [`InputPort`] **and**
    /// [`DelayPort`] — one object, which avoids a double mutable borrow
    /// while keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl ActuatorPort + InputPort + DelayPort),
        remote: &mut impl RemoteTriggerPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        trace!("tick {}", self.tick_count);
        hw.sleep_ms(self.tick_period_ms);

        self.transition(LoopState::Polling, sink);

        // 1. Local button — level-sensed; a button still held on the next
        //    pass triggers again.
        if hw.button_active() {
            self.run_actuation(TriggerSource::LocalButton, OperateMode::Flicker, hw, sink);
        }

        // 2. Remote queue, rate-limited to once per `remote_poll_ticks`.
        //    The counter resets on the poll branch whatever the poll
        //    returns, which keeps it bounded across unbounded uptime.
        self.poll_counter += 1;
        if self.poll_counter % self.remote_poll_ticks == 0 {
            self.poll_counter = 0;
            let pending = remote.poll_pending();
            sink.emit(&AppEvent::RemotePolled { pending });
            if pending {
                self.run_actuation(TriggerSource::Remote, self.remote_trigger_mode, hw, sink);
            }
        }

        self.transition(LoopState::Idle, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current loop phase.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Ticks accumulated towards the next remote poll.
    pub fn poll_counter(&self) -> u32 {
        self.poll_counter
    }

    /// Software relay state (off between ticks by construction).
    pub fn relay_energized(&self) -> bool {
        self.actuator.is_energized()
    }

    // ── Internal ──────────────────────────────────────────────

    /// One complete warning + actuation sequence, run to completion.
    fn run_actuation(
        &mut self,
        source: TriggerSource,
        mode: OperateMode,
        hw: &mut (impl ActuatorPort + DelayPort),
        sink: &mut impl EventSink,
    ) {
        self.transition(LoopState::Actuating, sink);
        info!("trigger: {:?} -> {:?} actuation", source, mode);
        sink.emit(&AppEvent::ActuationStarted { source, mode });

        self.indicator.run(hw);
        let flips = self.actuator.operate(mode, hw);

        sink.emit(&AppEvent::ActuationCompleted {
            source,
            mode,
            flips,
        });
        self.transition(LoopState::Polling, sink);
    }

    fn transition(&mut self, to: LoopState, sink: &mut impl EventSink) {
        if to == self.state {
            return;
        }
        trace!("loop: {} -> {}", self.state.name(), to.name());
        sink.emit(&AppEvent::StateChanged {
            from: self.state,
            to,
        });
        self.state = to;
    }
}
