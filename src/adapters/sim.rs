//! In-memory board simulation.
//!
//! Stands in for the Raspberry Pi when the crate is built without the
//! `rpi` feature, and backs the unit tests.  Inputs are set directly;
//! the buzzer line is recorded.
//!
//! Optional behaviours for the host demo:
//! - `with_drift()`: temperature and humidity wander sinusoidally.
//! - `with_noise(n)`: every `n`-th climate read fails with a checksum
//!   error, the way a DHT11 on a busy Linux box does.

use std::collections::VecDeque;

use embedded_hal::digital::PinState;
use log::info;

use crate::app::ports::{HardwarePort, LineId};
use crate::config::SystemConfig;
use crate::error::{ActuatorError, Result, SensorError};
use crate::sensors::climate::ClimateSample;

pub struct SimHardware {
    buzzer_line: LineId,
    mq135_line: LineId,
    mq9_line: LineId,
    buzzer: PinState,
    buzzer_writes: u32,
    mq135: PinState,
    mq9: PinState,
    climate: ClimateSample,
    scripted_failures: VecDeque<SensorError>,
    fail_every: Option<u32>,
    drift: bool,
    climate_reads: u32,
    released: bool,
}

impl SimHardware {
    /// 22 °C, 45 %RH, no gas, buzzer low.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            buzzer_line: config.buzzer_line,
            mq135_line: config.mq135_line,
            mq9_line: config.mq9_line,
            buzzer: PinState::Low,
            buzzer_writes: 0,
            mq135: PinState::High,
            mq9: PinState::High,
            climate: ClimateSample {
                temperature_c: 22.0,
                humidity_percent: 45.0,
            },
            scripted_failures: VecDeque::new(),
            fail_every: None,
            drift: false,
            climate_reads: 0,
            released: false,
        }
    }

    pub fn with_drift(mut self) -> Self {
        self.drift = true;
        self
    }

    pub fn with_noise(mut self, fail_every: u32) -> Self {
        self.fail_every = (fail_every > 0).then_some(fail_every);
        self
    }

    // ── Inputs ────────────────────────────────────────────────

    pub fn set_climate(&mut self, temperature_c: f32, humidity_percent: f32) {
        self.climate = ClimateSample {
            temperature_c,
            humidity_percent,
        };
    }

    /// Set gas presence; the lines are driven low for "present".
    pub fn set_gas(&mut self, mq135: bool, mq9: bool) {
        self.mq135 = PinState::from(!mq135);
        self.mq9 = PinState::from(!mq9);
    }

    /// Queue a failure for the next climate read.
    pub fn fail_next_climate(&mut self, error: SensorError) {
        self.scripted_failures.push_back(error);
    }

    // ── Observations ──────────────────────────────────────────

    pub fn buzzer_on(&self) -> bool {
        self.buzzer == PinState::High
    }

    pub fn buzzer_writes(&self) -> u32 {
        self.buzzer_writes
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    fn drifted(&self) -> ClimateSample {
        if !self.drift {
            return self.climate;
        }
        let t = self.climate_reads as f32;
        ClimateSample {
            temperature_c: self.climate.temperature_c + 1.5 * (t / 60.0).sin(),
            humidity_percent: self.climate.humidity_percent + 5.0 * (t / 90.0).cos(),
        }
    }
}

impl HardwarePort for SimHardware {
    fn read_climate(&mut self) -> core::result::Result<ClimateSample, SensorError> {
        if self.released {
            return Err(SensorError::LineReleased);
        }
        self.climate_reads = self.climate_reads.wrapping_add(1);
        if let Some(e) = self.scripted_failures.pop_front() {
            return Err(e);
        }
        if let Some(n) = self.fail_every {
            if self.climate_reads % n == 0 {
                return Err(SensorError::ChecksumMismatch);
            }
        }
        Ok(self.drifted())
    }

    fn read_line(&mut self, line: LineId) -> Result<PinState> {
        if self.released {
            return Err(SensorError::LineReleased.into());
        }
        if line == self.mq135_line {
            Ok(self.mq135)
        } else if line == self.mq9_line {
            Ok(self.mq9)
        } else {
            Err(SensorError::UnknownLine(line).into())
        }
    }

    fn write_line(&mut self, line: LineId, level: PinState) -> Result<()> {
        if self.released {
            return Err(ActuatorError::LineReleased.into());
        }
        if line != self.buzzer_line {
            return Err(ActuatorError::UnknownLine(line).into());
        }
        self.buzzer = level;
        self.buzzer_writes += 1;
        Ok(())
    }

    fn release(&mut self) {
        if !self.released {
            self.buzzer = PinState::Low;
            self.released = true;
            info!("hw(sim): lines released");
        }
    }
}
