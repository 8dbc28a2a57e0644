//! Sensor subsystem: gas lines, climate sensor, and the [`SensorSampler`].
//!
//! The sampler performs one polling cycle through the
//! [`HardwarePort`] and produces a fresh [`Reading`].  Climate-sensor
//! noise is absorbed into an invalid reading; every other failure is
//! returned to the caller.

pub mod climate;
pub mod dht11;
pub mod gas;

use log::{debug, warn};

use crate::app::ports::{HardwarePort, LineId};
use crate::config::SystemConfig;
use crate::error::{ErrorKind, Result};
use climate::celsius_to_fahrenheit;
use gas::GasLine;

/// Snapshot of every input for one cycle.  Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature_celsius: f32,
    pub temperature_fahrenheit: f32,
    pub humidity_percent: f32,
    pub gas135_detected: bool,
    pub gas9_detected: bool,
    /// False when the climate read failed; all other fields are then zeroed
    /// and must not be interpreted.
    pub valid: bool,
    pub error: Option<ErrorKind>,
}

impl Reading {
    /// A reading whose climate read failed this cycle.
    pub const fn invalid(kind: ErrorKind) -> Self {
        Self {
            temperature_celsius: 0.0,
            temperature_fahrenheit: 0.0,
            humidity_percent: 0.0,
            gas135_detected: false,
            gas9_detected: false,
            valid: false,
            error: Some(kind),
        }
    }

    /// True if either gas line reports gas.
    pub fn any_gas(&self) -> bool {
        self.valid && (self.gas135_detected || self.gas9_detected)
    }
}

/// Performs one polling cycle over the three fixed inputs.
pub struct SensorSampler {
    mq135_line: LineId,
    mq9_line: LineId,
}

impl SensorSampler {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            mq135_line: config.mq135_line,
            mq9_line: config.mq9_line,
        }
    }

    /// Read climate first, then both gas lines.
    ///
    /// A transient climate failure short-circuits the cycle: gas lines are
    /// not read and `Ok(Reading::invalid(..))` is returned.
    pub fn sample(&self, hw: &mut impl HardwarePort) -> Result<Reading> {
        let climate = match hw.read_climate() {
            Ok(sample) => sample,
            Err(e) if e.is_transient() => {
                warn!("Climate read failed ({}), skipping cycle", e);
                return Ok(Reading::invalid(ErrorKind::TransientRead));
            }
            Err(e) => return Err(e.into()),
        };

        let gas135 = GasLine::from_level(hw.read_line(self.mq135_line)?);
        let gas9 = GasLine::from_level(hw.read_line(self.mq9_line)?);

        let reading = Reading {
            temperature_celsius: climate.temperature_c,
            temperature_fahrenheit: celsius_to_fahrenheit(climate.temperature_c),
            humidity_percent: climate.humidity_percent,
            gas135_detected: gas135.is_present(),
            gas9_detected: gas9.is_present(),
            valid: true,
            error: None,
        };
        debug!("Sampled {:?}", reading);
        Ok(reading)
    }
}
