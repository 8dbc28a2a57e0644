//! Mock adapters for integration tests.
//!
//! Records every hardware call so tests can assert on the full history
//! without touching real GPIO lines.

use std::collections::VecDeque;

use embedded_hal::digital::PinState;
use gasdash::app::events::AppEvent;
use gasdash::app::ports::{Clock, DisplaySink, EventSink, HardwarePort, LineId};
use gasdash::config::SystemConfig;
use gasdash::dashboard::DashboardView;
use gasdash::error::{ActuatorError, Result, SensorError};
use gasdash::events::{Event, EventQueue};
use gasdash::sensors::climate::ClimateSample;

// ── Hardware call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HwCall {
    ReadClimate,
    ReadLine(LineId),
    WriteLine(LineId, PinState),
    Release,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub config: SystemConfig,
    pub calls: Vec<HwCall>,
    /// Scripted climate results; the default sample once exhausted.
    pub climate: VecDeque<core::result::Result<ClimateSample, SensorError>>,
    pub mq135: PinState,
    pub mq9: PinState,
    pub fail_writes: bool,
    pub released: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            config: SystemConfig::default(),
            calls: Vec::new(),
            climate: VecDeque::new(),
            mq135: PinState::High,
            mq9: PinState::High,
            fail_writes: false,
            released: false,
        }
    }

    /// Gas presence, active low on the wire.
    pub fn set_gas(&mut self, mq135: bool, mq9: bool) {
        self.mq135 = PinState::from(!mq135);
        self.mq9 = PinState::from(!mq9);
    }

    pub fn script_climate(&mut self, result: core::result::Result<ClimateSample, SensorError>) {
        self.climate.push_back(result);
    }

    /// Last level written to the buzzer line, `false` if never written.
    pub fn buzzer_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HwCall::WriteLine(line, level) if *line == self.config.buzzer_line => {
                    Some(*level == PinState::High)
                }
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn count(&self, call: HwCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl HardwarePort for MockHardware {
    fn read_climate(&mut self) -> core::result::Result<ClimateSample, SensorError> {
        self.calls.push(HwCall::ReadClimate);
        if self.released {
            return Err(SensorError::LineReleased);
        }
        self.climate.pop_front().unwrap_or(Ok(ClimateSample {
            temperature_c: 21.0,
            humidity_percent: 40.0,
        }))
    }

    fn read_line(&mut self, line: LineId) -> Result<PinState> {
        self.calls.push(HwCall::ReadLine(line));
        if self.released {
            return Err(SensorError::LineReleased.into());
        }
        if line == self.config.mq135_line {
            Ok(self.mq135)
        } else if line == self.config.mq9_line {
            Ok(self.mq9)
        } else {
            Err(SensorError::UnknownLine(line).into())
        }
    }

    fn write_line(&mut self, line: LineId, level: PinState) -> Result<()> {
        if self.released {
            return Err(ActuatorError::LineReleased.into());
        }
        if self.fail_writes {
            return Err(ActuatorError::GpioWriteFailed.into());
        }
        self.calls.push(HwCall::WriteLine(line, level));
        Ok(())
    }

    fn release(&mut self) {
        self.calls.push(HwCall::Release);
        self.released = true;
    }
}

// ── Recording display ─────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDisplay {
    pub frames: Vec<DashboardView>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &DashboardView {
        self.frames.last().expect("no frame rendered")
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, view: &DashboardView) {
        self.frames.push(view.clone());
    }
}

// ── Recording event sink ──────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Fake clock ────────────────────────────────────────────────

/// Advances instantly on sleep and plays scripted events at given times.
pub struct FakeClock<'q> {
    now: u64,
    queue: &'q EventQueue,
    script: VecDeque<(u64, Event)>,
}

#[allow(dead_code)]
impl<'q> FakeClock<'q> {
    pub fn new(queue: &'q EventQueue) -> Self {
        Self {
            now: 0,
            queue,
            script: VecDeque::new(),
        }
    }

    /// Push `event` once the clock reaches `at_ms`.  Keep calls in time order.
    pub fn at(mut self, at_ms: u64, event: Event) -> Self {
        self.script.push_back((at_ms, event));
        self
    }
}

impl Clock for FakeClock<'_> {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.now += ms;
        while let Some(&(at, event)) = self.script.front() {
            if at > self.now {
                break;
            }
            self.queue.push(event);
            self.script.pop_front();
        }
    }
}
