//! Hardware adapter: bridges GPIO lines and the climate sensor to the
//! [`HardwarePort`] trait.
//!
//! Generic over `embedded-hal` 1.0 digital pins so the same adapter
//! serves the Raspberry Pi (`rppal` pins, see `adapters::rpi`) and
//! host tests (plain mock pins).  Each line id from the config maps to
//! exactly one owned pin; unknown ids are a fatal error.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::{info, warn};

use crate::app::ports::{HardwarePort, LineId};
use crate::config::SystemConfig;
use crate::error::{ActuatorError, Result, SensorError};
use crate::sensors::climate::{ClimateSample, ClimateSensor};

/// Concrete adapter that owns the buzzer output, both gas inputs and the
/// climate sensor.  `None` means released.
pub struct LineHardware<O, I, C> {
    buzzer_line: LineId,
    mq135_line: LineId,
    mq9_line: LineId,
    buzzer: Option<O>,
    mq135: Option<I>,
    mq9: Option<I>,
    climate: Option<C>,
}

impl<O, I, C> LineHardware<O, I, C>
where
    O: OutputPin,
    I: InputPin,
    C: ClimateSensor,
{
    pub fn new(config: &SystemConfig, buzzer: O, mq135: I, mq9: I, climate: C) -> Self {
        Self {
            buzzer_line: config.buzzer_line,
            mq135_line: config.mq135_line,
            mq9_line: config.mq9_line,
            buzzer: Some(buzzer),
            mq135: Some(mq135),
            mq9: Some(mq9),
            climate: Some(climate),
        }
    }

    pub fn is_released(&self) -> bool {
        self.buzzer.is_none() && self.mq135.is_none() && self.mq9.is_none() && self.climate.is_none()
    }
}

// ── HardwarePort implementation ───────────────────────────────

impl<O, I, C> HardwarePort for LineHardware<O, I, C>
where
    O: OutputPin,
    I: InputPin,
    C: ClimateSensor,
{
    fn read_climate(&mut self) -> core::result::Result<ClimateSample, SensorError> {
        self.climate.as_mut().ok_or(SensorError::LineReleased)?.read()
    }

    fn read_line(&mut self, line: LineId) -> Result<PinState> {
        let pin = if line == self.mq135_line {
            self.mq135.as_mut()
        } else if line == self.mq9_line {
            self.mq9.as_mut()
        } else {
            return Err(SensorError::UnknownLine(line).into());
        };
        let pin = pin.ok_or(SensorError::LineReleased)?;
        let high = pin.is_high().map_err(|_| SensorError::GpioReadFailed)?;
        Ok(PinState::from(high))
    }

    fn write_line(&mut self, line: LineId, level: PinState) -> Result<()> {
        if line != self.buzzer_line {
            return Err(ActuatorError::UnknownLine(line).into());
        }
        let pin = self.buzzer.as_mut().ok_or(ActuatorError::LineReleased)?;
        pin.set_state(level).map_err(|_| ActuatorError::GpioWriteFailed)?;
        Ok(())
    }

    fn release(&mut self) {
        if let Some(mut buzzer) = self.buzzer.take() {
            if buzzer.set_low().is_err() {
                warn!("Release: could not silence buzzer on line {}", self.buzzer_line);
            }
        }
        let was_held = self.mq135.take().is_some() | self.mq9.take().is_some();
        let had_climate = self.climate.take().is_some();
        if was_held || had_climate {
            info!(
                "Released lines buzzer={} mq135={} mq9={}",
                self.buzzer_line, self.mq135_line, self.mq9_line
            );
        }
    }
}
