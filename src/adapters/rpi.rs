//! Raspberry Pi bindings (`rpi` feature).
//!
//! Acquires the buzzer, MQ135, MQ9 and DHT11 lines through `rppal` and
//! wraps them in [`LineHardware`].  `rppal` pins implement the
//! `embedded-hal` 1.0 digital traits and reset themselves when dropped,
//! which is what [`HardwarePort::release`] relies on.
//!
//! ## DHT11 bus
//!
//! The Pi has no open-drain outputs, so the data line is an [`IoPin`]
//! switched between output (start pulse) and input (response).  Bit
//! timing is measured by busy-polling from user space; preemption
//! regularly corrupts frames, which surface as transient
//! checksum/timeout errors and are absorbed by the sampler.
//!
//! [`HardwarePort::release`]: crate::app::ports::HardwarePort::release

use std::thread;
use std::time::{Duration, Instant};

use log::{error, info};
use rppal::gpio::{Gpio, InputPin, IoPin, Level, Mode, OutputPin};

use crate::adapters::hardware::LineHardware;
use crate::config::SystemConfig;
use crate::error::{Error, SensorError};
use crate::sensors::climate::{ClimateSample, ClimateSensor};
use crate::sensors::dht11::{FRAME_BITS, decode_frame, frame_from_pulses};

/// Host start pulse: hold the line low for at least 18 ms.
const START_LOW_MS: u64 = 20;
/// Sensor response phases are ~80 µs each.
const RESPONSE_TIMEOUT_US: u32 = 200;
/// Longest legal bit phase (70 µs high for a `1`) plus slack.
const BIT_TIMEOUT_US: u32 = 150;

/// The board as wired on the Pi.
pub type RpiHardware = LineHardware<OutputPin, InputPin, Dht11>;

/// Claim every line named in `config`.
pub fn acquire(config: &SystemConfig) -> Result<RpiHardware, Error> {
    let gpio = Gpio::new().map_err(|e| {
        error!("GPIO controller unavailable: {}", e);
        Error::Init("GPIO controller unavailable")
    })?;

    let claim = |line: u8| {
        gpio.get(line).map_err(|e| {
            error!("GPIO {} unavailable: {}", line, e);
            Error::Init("GPIO line unavailable")
        })
    };

    let buzzer = claim(config.buzzer_line)?.into_output_low();
    let mq135 = claim(config.mq135_line)?.into_input();
    let mq9 = claim(config.mq9_line)?.into_input();
    let dht = Dht11::new(claim(config.climate_line)?.into_io(Mode::Input));

    info!(
        "rpi: buzzer=GPIO{} mq135=GPIO{} mq9=GPIO{} dht11=GPIO{}",
        config.buzzer_line, config.mq135_line, config.mq9_line, config.climate_line
    );
    Ok(LineHardware::new(config, buzzer, mq135, mq9, dht))
}

/// Bit-banged DHT11 driver.
pub struct Dht11 {
    pin: IoPin,
}

impl Dht11 {
    pub fn new(pin: IoPin) -> Self {
        Self { pin }
    }

    /// Busy-wait until the line reads `level`; returns the microseconds waited.
    fn wait_for(&self, level: Level, timeout_us: u32) -> Result<u32, SensorError> {
        let start = Instant::now();
        loop {
            let waited = start.elapsed().as_micros() as u32;
            if self.pin.read() == level {
                return Ok(waited);
            }
            if waited > timeout_us {
                return Err(SensorError::Timeout);
            }
        }
    }
}

impl ClimateSensor for Dht11 {
    fn read(&mut self) -> Result<ClimateSample, SensorError> {
        // Start pulse, then hand the line back to the pull-up.
        self.pin.set_mode(Mode::Output);
        self.pin.set_low();
        thread::sleep(Duration::from_millis(START_LOW_MS));
        self.pin.set_high();
        self.pin.set_mode(Mode::Input);

        // Response: low ~80 µs, high ~80 µs, then the first bit's low.
        self.wait_for(Level::Low, RESPONSE_TIMEOUT_US)?;
        self.wait_for(Level::High, RESPONSE_TIMEOUT_US)?;
        self.wait_for(Level::Low, RESPONSE_TIMEOUT_US)?;

        let mut widths = [0u32; FRAME_BITS];
        for width in &mut widths {
            self.wait_for(Level::High, BIT_TIMEOUT_US)?;
            *width = self.wait_for(Level::Low, BIT_TIMEOUT_US)?;
        }

        decode_frame(frame_from_pulses(&widths))
    }
}
