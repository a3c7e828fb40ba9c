//! End-to-end actuation timelines through the full service.
//!
//! Every test drives [`AppService::tick`] against the virtual-clock mocks
//! and asserts the exact timestamped pin history, so a regression in any
//! layer (service orchestration, indicator, actuator) shows up as a
//! shifted or missing write.

use crate::mock_hw::{MockHardware, MockRemote, RecordingSink};

use bellhop::app::events::{AppEvent, TriggerSource};
use bellhop::app::service::AppService;
use bellhop::config::SystemConfig;
use bellhop::control::actuation::OperateMode;

fn make_app(config: &SystemConfig) -> (AppService, RecordingSink) {
    (AppService::new(config), RecordingSink::new())
}

// ── Local button: warning blink then flicker ─────────────────

#[test]
fn button_press_blinks_warning_then_flickers_relay() {
    // Defaults: 1000 ms tick, 6 blinks of 300 ms, flicker 500/4000 ms.
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::with_button_script(&[true]);
    let mut remote = MockRemote::new();

    app.tick(&mut hw, &mut remote, &mut sink);

    // Warning lamp: count+1 = 7 writes, 300 ms apart, starting the
    // instant the press is sampled (1000 ms, right after the tick sleep).
    assert_eq!(
        hw.lamp_writes(),
        vec![
            (1000, false),
            (1300, true),
            (1600, false),
            (1900, true),
            (2200, false),
            (2500, true),
            (2800, false),
        ]
    );

    // Relay: 8 toggles at 500 ms intervals, starting once the blink
    // sequence has fully played out (2800 + 300 = 3100 ms).
    assert_eq!(
        hw.relay_writes(),
        vec![
            (3100, true),
            (3600, false),
            (4100, true),
            (4600, false),
            (5100, true),
            (5600, false),
            (6100, true),
            (6600, false),
        ]
    );

    assert!(!hw.relay_energized());
    assert!(!app.relay_energized());
    assert!(sink.events.contains(&AppEvent::ActuationStarted {
        source: TriggerSource::LocalButton,
        mode: OperateMode::Flicker,
    }));
    assert!(sink.events.contains(&AppEvent::ActuationCompleted {
        source: TriggerSource::LocalButton,
        mode: OperateMode::Flicker,
        flips: 8,
    }));
}

// ── Remote trigger: static dwell ──────────────────────────────

#[test]
fn remote_trigger_runs_configured_static_dwell() {
    let mut config = SystemConfig::default();
    config.remote_trigger_mode = OperateMode::Static;
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::with_script(&[true]);

    // Poll cadence is every 5 ticks; nothing happens on ticks 1-4.
    for _ in 0..5 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    assert_eq!(remote.polls, 1);

    // Tick 5 samples the button at 5000 ms, polls, then runs the warning
    // blink (5000..=6800) and the static dwell.
    assert_eq!(hw.relay_writes(), vec![(7100, true), (11100, false)]);
    assert!(sink.events.contains(&AppEvent::ActuationCompleted {
        source: TriggerSource::Remote,
        mode: OperateMode::Static,
        flips: 2,
    }));
}

// ── Quiet system: no output at all ────────────────────────────

#[test]
fn no_input_means_no_pin_activity() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::new();
    let mut remote = MockRemote::new();

    for _ in 0..10 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    assert!(hw.relay_writes().is_empty());
    assert!(hw.lamp_writes().is_empty());
    // The remote queue was still consulted on schedule (ticks 5 and 10).
    assert_eq!(remote.polls, 2);
    assert_eq!(
        sink.events
            .iter()
            .filter(|e| matches!(e, AppEvent::RemotePolled { pending: false }))
            .count(),
        2
    );
    // Ten sleeps of the tick period plus nothing else.
    assert_eq!(hw.total_slept_ms(), 10_000);
}

// ── Held button: re-triggers on the next pass ─────────────────

#[test]
fn held_button_triggers_again_next_tick() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::with_button_script(&[true, true]);
    let mut remote = MockRemote::new();

    app.tick(&mut hw, &mut remote, &mut sink);
    app.tick(&mut hw, &mut remote, &mut sink);

    // The level is sampled exactly once per tick, never mid-actuation:
    // at 1000 ms, and again only after the first full sequence (ending
    // 7100 ms) plus the next tick sleep.
    assert_eq!(hw.button_reads, vec![1000, 8100]);

    let starts: Vec<_> = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ActuationStarted { .. }))
        .collect();
    assert_eq!(starts.len(), 2);

    // The relay came fully to rest between the two sequences.
    let writes = hw.relay_writes();
    assert_eq!(writes.len(), 16);
    assert_eq!(writes[7], (6600, false));
    assert_eq!(writes[8], (10_200, true));
}

// ── Release before the next sample: exactly one actuation ─────

#[test]
fn released_button_does_not_retrigger() {
    let config = SystemConfig::default();
    let (mut app, mut sink) = make_app(&config);
    let mut hw = MockHardware::with_button_script(&[true, false, false]);
    let mut remote = MockRemote::new();

    for _ in 0..3 {
        app.tick(&mut hw, &mut remote, &mut sink);
    }

    let starts = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ActuationStarted { .. }))
        .count();
    assert_eq!(starts, 1);
}
