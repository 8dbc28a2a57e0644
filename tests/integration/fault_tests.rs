//! Fatal fault handling: hardware must be released before the error
//! reaches the caller.

use gasdash::app::events::AppEvent;
use gasdash::app::service::AppService;
use gasdash::error::{ActuatorError, Error, SensorError};
use gasdash::events::{Event, EventQueue};
use gasdash::scheduler::Scheduler;

use crate::mock_hw::{FakeClock, HwCall, LogSink, MockHardware, RecordingDisplay};

#[test]
fn fatal_sensor_fault_releases_then_propagates() {
    let mut hw = MockHardware::new();
    hw.script_climate(Ok(gasdash::sensors::climate::ClimateSample {
        temperature_c: 20.0,
        humidity_percent: 30.0,
    }));
    hw.script_climate(Err(SensorError::GpioReadFailed));
    let config = hw.config.clone();
    let mut app = AppService::new(&config);
    let mut display = RecordingDisplay::new();
    let mut sink = LogSink::new();
    let queue = EventQueue::new();
    let mut clock = FakeClock::new(&queue);

    let result = Scheduler::new(&config).run(
        &mut app,
        &mut hw,
        &mut display,
        &mut sink,
        &mut clock,
        &queue,
    );

    assert_eq!(result, Err(Error::Sensor(SensorError::GpioReadFailed)));
    assert!(hw.released);
    assert_eq!(hw.calls.last(), Some(&HwCall::Release));
    assert_eq!(hw.count(HwCall::Release), 1);
    assert!(sink.events.contains(&AppEvent::Fault(Error::Sensor(SensorError::GpioReadFailed))));
    assert_eq!(sink.events.last(), Some(&AppEvent::Stopped { cycles: 1 }));
}

#[test]
fn failed_buzzer_write_is_fatal() {
    let mut hw = MockHardware::new();
    hw.fail_writes = true;
    let config = hw.config.clone();
    let mut app = AppService::new(&config);
    let mut display = RecordingDisplay::new();
    let mut sink = LogSink::new();
    let queue = EventQueue::new();
    let mut clock = FakeClock::new(&queue).at(5_000, Event::Shutdown);

    let result = Scheduler::new(&config).run(
        &mut app,
        &mut hw,
        &mut display,
        &mut sink,
        &mut clock,
        &queue,
    );

    assert_eq!(result, Err(Error::Actuator(ActuatorError::GpioWriteFailed)));
    assert!(hw.released);
    assert!(!result.unwrap_err().is_transient());
}
