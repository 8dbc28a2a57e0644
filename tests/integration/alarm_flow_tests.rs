//! Integration tests for the sample → alarm → dashboard pipeline.
//!
//! Drive `AppService` directly against the mock adapters and check the
//! buzzer line, the alarm state and the rendered frame together.

use embedded_hal::digital::PinState;
use gasdash::alarm::{AlarmMode, BuzzerState};
use gasdash::app::commands::AppCommand;
use gasdash::app::events::AppEvent;
use gasdash::app::service::AppService;
use gasdash::dashboard::{
    COLOUR_MQ135_ALERT, COLOUR_MQ135_CLEAR, COLOUR_MQ9_CLEAR, NOTICE_SENSOR_UNAVAILABLE,
};
use gasdash::error::{ErrorKind, SensorError};
use gasdash::sensors::climate::ClimateSample;

use crate::mock_hw::{HwCall, LogSink, MockHardware, RecordingDisplay};

fn make_app() -> (AppService, MockHardware, RecordingDisplay, LogSink) {
    let hw = MockHardware::new();
    let mut app = AppService::new(&hw.config);
    let mut display = RecordingDisplay::new();
    let mut sink = LogSink::new();
    app.start(&mut display, &mut sink);
    (app, hw, display, sink)
}

fn toggle(app: &mut AppService, hw: &mut MockHardware, display: &mut RecordingDisplay, sink: &mut LogSink) {
    app.handle_command(AppCommand::ToggleBuzzer, hw, display, sink)
        .expect("toggle should succeed");
}

#[test]
fn start_shows_placeholder_frame() {
    let (app, _hw, display, sink) = make_app();
    assert_eq!(display.frames.len(), 1);
    assert_eq!(display.last().temperature_c.text, "Temperature (C): -- *C");
    assert_eq!(display.last().button.text, "Turn Buzzer On");
    assert_eq!(sink.events, [AppEvent::Started(AlarmMode::Auto)]);
    assert_eq!(app.buzzer(), BuzzerState::default());
}

// ── Button presses ────────────────────────────────────────────

#[test]
fn single_toggle_forces_buzzer_on() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    toggle(&mut app, &mut hw, &mut display, &mut sink);

    assert_eq!(
        app.buzzer(),
        BuzzerState {
            manual_override: true,
            physical_on: true
        }
    );
    assert!(hw.buzzer_on());
    assert_eq!(display.last().button.text, "Turn Buzzer Off");
    assert!(sink.events.contains(&AppEvent::ModeChanged {
        from: AlarmMode::Auto,
        to: AlarmMode::Manual
    }));
}

#[test]
fn double_toggle_returns_to_auto_and_silent() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    toggle(&mut app, &mut hw, &mut display, &mut sink);
    toggle(&mut app, &mut hw, &mut display, &mut sink);

    assert_eq!(app.buzzer(), BuzzerState::default());
    assert_eq!(app.mode(), AlarmMode::Auto);
    assert!(!hw.buzzer_on());
    assert_eq!(display.last().button.text, "Turn Buzzer On");
}

// ── Gas cycles ────────────────────────────────────────────────

#[test]
fn mq135_gas_sounds_alarm_and_paints_label() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.set_gas(true, false);

    let reading = app.tick(&mut hw, &mut display, &mut sink).unwrap();

    assert!(reading.gas135_detected && !reading.gas9_detected);
    assert!(app.buzzer().physical_on);
    assert!(!app.buzzer().manual_override);
    assert!(hw.buzzer_on());
    let view = display.last();
    assert_eq!(view.mq135.text, "MQ135 Status: Gas Detected!");
    assert_eq!(view.mq135.background, COLOUR_MQ135_ALERT);
    assert_eq!(view.mq9.text, "MQ9 Status: No Gas Detected");
}

#[test]
fn clear_air_keeps_buzzer_off_with_neutral_labels() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    app.tick(&mut hw, &mut display, &mut sink).unwrap();

    assert!(!app.buzzer().physical_on);
    assert_eq!(hw.count(HwCall::WriteLine(hw.config.buzzer_line, PinState::Low)), 1);
    let view = display.last();
    assert_eq!(view.mq135.text, "MQ135 Status: No Gas Detected");
    assert_eq!(view.mq135.background, COLOUR_MQ135_CLEAR);
    assert_eq!(view.mq9.text, "MQ9 Status: No Gas Detected");
    assert_eq!(view.mq9.background, COLOUR_MQ9_CLEAR);
    assert_eq!(view.temperature_c.text, "Temperature (C): 21.0 *C");
    assert_eq!(view.temperature_f.text, "Temperature (F): 69.8 *F");
}

#[test]
fn alarm_clears_when_gas_goes_away() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    hw.set_gas(false, true);
    app.tick(&mut hw, &mut display, &mut sink).unwrap();
    assert!(hw.buzzer_on());

    hw.set_gas(false, false);
    app.tick(&mut hw, &mut display, &mut sink).unwrap();
    assert!(!hw.buzzer_on());

    let changes = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::BuzzerChanged { .. }))
        .count();
    assert_eq!(changes, 2);
}

#[test]
fn manual_override_suppresses_gas_logic() {
    let (mut app, mut hw, mut display, mut sink) = make_app();

    // Manual on, then gas clears: buzzer stays on.
    toggle(&mut app, &mut hw, &mut display, &mut sink);
    hw.set_gas(false, false);
    app.tick(&mut hw, &mut display, &mut sink).unwrap();
    assert!(hw.buzzer_on());

    // Second press hands control back to the gas logic.
    toggle(&mut app, &mut hw, &mut display, &mut sink);
    hw.set_gas(true, true);
    app.tick(&mut hw, &mut display, &mut sink).unwrap();
    assert!(hw.buzzer_on(), "auto mode resumes gas logic");
}

#[test]
fn manual_mode_never_auto_reverts() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    toggle(&mut app, &mut hw, &mut display, &mut sink);

    for gas in [true, false, true, false] {
        hw.set_gas(gas, gas);
        app.tick(&mut hw, &mut display, &mut sink).unwrap();
        assert_eq!(app.mode(), AlarmMode::Manual);
        assert!(app.buzzer().physical_on);
    }
}

// ── Transient faults ──────────────────────────────────────────

#[test]
fn transient_read_skips_cycle_and_keeps_stale_values() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.script_climate(Ok(ClimateSample {
        temperature_c: 25.0,
        humidity_percent: 50.0,
    }));
    hw.script_climate(Err(SensorError::ChecksumMismatch));

    app.tick(&mut hw, &mut display, &mut sink).unwrap();
    let reads_before = hw.calls.len();
    let reading = app.tick(&mut hw, &mut display, &mut sink).unwrap();

    assert!(!reading.valid);
    assert_eq!(reading.error, Some(ErrorKind::TransientRead));
    // Only the climate read happened; gas lines and buzzer were untouched.
    assert_eq!(hw.calls[reads_before..], [HwCall::ReadClimate]);
    assert_eq!(display.last().temperature_c.text, "Temperature (C): 25.0 *C");
    assert_eq!(display.last().notice, Some(NOTICE_SENSOR_UNAVAILABLE));
    assert_eq!(app.skipped_count(), 1);
    assert!(sink.events.contains(&AppEvent::ReadingSkipped(ErrorKind::TransientRead)));
}

#[test]
fn next_cycle_after_transient_failure_recovers() {
    let (mut app, mut hw, mut display, mut sink) = make_app();
    hw.script_climate(Err(SensorError::Timeout));
    hw.set_gas(true, false);

    assert!(!app.tick(&mut hw, &mut display, &mut sink).unwrap().valid);
    assert!(!hw.buzzer_on());

    let reading = app.tick(&mut hw, &mut display, &mut sink).unwrap();
    assert!(reading.valid);
    assert!(hw.buzzer_on());
    assert_eq!(display.last().notice, None);
    assert_eq!(app.tick_count(), 2);
}
