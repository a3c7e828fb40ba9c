//! Control loop orchestration tests: startup, tick structure, poll
//! cadence and trigger arbitration.

use crate::mock_hw::{HwCall, MockHardware, MockRemote, RecordingSink};

use bellhop::app::events::{AppEvent, TriggerSource};
use bellhop::app::service::{AppService, LoopState};
use bellhop::config::SystemConfig;
use bellhop::control::actuation::OperateMode;

fn make_app(config: &SystemConfig) -> (AppService, RecordingSink) {
    (AppService::new(config), RecordingSink::new())
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_forces_everything_off_before_the_first_tick() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();

    app.start(&mut hw, &mut sink);

    assert_eq!(hw.calls, vec![(0, HwCall::AllOff)]);
    assert_eq!(sink.events, vec![AppEvent::Started(LoopState::Idle)]);
    assert_eq!(app.state(), LoopState::Idle);
}

// ── Tick structure ────────────────────────────────────────────

#[test]
fn tick_sleeps_the_full_period_before_sampling() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::new();

    app.tick(&mut hw, &mut remote, &mut sink);

    // The sleep is the first thing a tick does; the button is sampled
    // only after the full period has elapsed.
    assert_eq!(hw.calls[0], (0, HwCall::Sleep(1000)));
    assert_eq!(hw.button_reads, vec![1000]);
}

#[test]
fn tick_returns_to_idle() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::with_button_script(&[true]);
    let mut remote = MockRemote::new();

    app.tick(&mut hw, &mut remote, &mut sink);

    assert_eq!(app.state(), LoopState::Idle);
}

#[test]
fn quiet_tick_emits_exactly_one_transition_pair() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::new();

    app.tick(&mut hw, &mut remote, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            AppEvent::StateChanged {
                from: LoopState::Idle,
                to: LoopState::Polling,
            },
            AppEvent::StateChanged {
                from: LoopState::Polling,
                to: LoopState::Idle,
            },
        ]
    );
}

#[test]
fn button_tick_walks_the_full_state_sequence() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::with_button_script(&[true]);
    let mut remote = MockRemote::new();

    app.tick(&mut hw, &mut remote, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            AppEvent::StateChanged {
                from: LoopState::Idle,
                to: LoopState::Polling,
            },
            AppEvent::StateChanged {
                from: LoopState::Polling,
                to: LoopState::Actuating,
            },
            AppEvent::ActuationStarted {
                source: TriggerSource::LocalButton,
                mode: OperateMode::Flicker,
            },
            AppEvent::ActuationCompleted {
                source: TriggerSource::LocalButton,
                mode: OperateMode::Flicker,
                flips: 8,
            },
            AppEvent::StateChanged {
                from: LoopState::Actuating,
                to: LoopState::Polling,
            },
            AppEvent::StateChanged {
                from: LoopState::Polling,
                to: LoopState::Idle,
            },
        ]
    );
}

// ── Remote poll cadence ───────────────────────────────────────

#[test]
fn remote_is_polled_exactly_every_n_ticks() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::new();

    for _ in 0..23 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    // Cadence 5 → polls on ticks 5, 10, 15 and 20 only.
    assert_eq!(remote.polls, 4);
    assert_eq!(app.poll_counter(), 3);
}

#[test]
fn poll_counter_stays_bounded_forever() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::new();

    for _ in 0..137 {
        app.tick(&mut hw, &mut remote, &mut sink);
        assert!(app.poll_counter() < config.remote_poll_ticks);
    }
}

#[test]
fn empty_poll_does_not_actuate() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::with_script(&[false, false, false]);

    for _ in 0..15 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    assert_eq!(remote.polls, 3);
    assert!(hw.relay_writes().is_empty());
}

#[test]
fn pending_trigger_is_consumed_once() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    // One pending trigger, then the queue stays empty.
    let mut remote = MockRemote::with_script(&[true]);

    for _ in 0..15 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    let starts = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ActuationStarted { .. }))
        .count();
    assert_eq!(starts, 1);
}

#[test]
fn failed_poll_tick_still_counts_towards_the_next_one() {
    // A poll that answers "empty" (which is also how transport failures
    // surface) must not stretch the cadence: the counter was already
    // reset, so the next poll lands N ticks later.
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::with_script(&[false, true]);

    for _ in 0..10 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    assert_eq!(remote.polls, 2);
    let starts = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ActuationStarted { .. }))
        .count();
    assert_eq!(starts, 1);
}

// ── Trigger arbitration ───────────────────────────────────────

#[test]
fn local_button_rings_flicker_even_when_remote_mode_is_static() {
    let mut config = SystemConfig::default();
    config.remote_trigger_mode = OperateMode::Static;
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::with_button_script(&[true]);
    let mut remote = MockRemote::new();

    app.tick(&mut hw, &mut remote, &mut sink);

    assert!(sink.events.contains(&AppEvent::ActuationStarted {
        source: TriggerSource::LocalButton,
        mode: OperateMode::Flicker,
    }));
}

#[test]
fn both_triggers_in_one_tick_run_sequentially_local_first() {
    let mut config = SystemConfig::default();
    config.remote_trigger_mode = OperateMode::Static;
    let (mut app, mut sink) = make_app(&config);
    // Button held on tick 5, the same tick the remote poll is due.
    let mut hw = MockHardware::with_button_script(&[false, false, false, false, true]);
    let mut remote = MockRemote::with_script(&[true]);

    for _ in 0..5 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    let find = |pred: &dyn Fn(&AppEvent) -> bool| {
        sink.events
            .iter()
            .position(|e| pred(e))
            .expect("event missing")
    };

    let local_done = find(&|e| {
        matches!(
            e,
            AppEvent::ActuationCompleted {
                source: TriggerSource::LocalButton,
                ..
            }
        )
    });
    let polled = find(&|e| matches!(e, AppEvent::RemotePolled { pending: true }));
    let remote_started = find(&|e| {
        matches!(
            e,
            AppEvent::ActuationStarted {
                source: TriggerSource::Remote,
                mode: OperateMode::Static,
            }
        )
    });

    // The local sequence completes before the remote queue is even read.
    assert!(local_done < polled);
    assert!(polled < remote_started);

    // Two full warning sequences, two relay protocols: flicker writes
    // then static writes, strictly ordered in time.
    let writes = hw.relay_writes();
    assert_eq!(writes.len(), 8 + 2);
    assert!(writes[7].0 < writes[8].0);
    assert!(!hw.relay_energized());
}
