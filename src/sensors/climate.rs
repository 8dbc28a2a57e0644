//! Temperature / humidity sample and the climate-sensor driver seam.

use crate::error::SensorError;

/// One climate measurement, straight from the sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateSample {
    pub temperature_c: f32,
    pub humidity_percent: f32,
}

/// Driver-level interface for a single-wire climate sensor.
///
/// [`LineHardware`](crate::adapters::hardware::LineHardware) owns one of
/// these and forwards `read_climate` to it.
pub trait ClimateSensor {
    fn read(&mut self) -> Result<ClimateSample, SensorError>;
}

/// `F = C × 9/5 + 32`, unrounded.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}
