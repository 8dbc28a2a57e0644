//! MQ-series gas sensor digital outputs.
//!
//! The MQ135 and MQ9 breakout boards compare the heater-cell voltage
//! against a trim-pot threshold and pull D0 **LOW** when gas is present.
//! The inversion is handled here and nowhere else.

use core::fmt;

use embedded_hal::digital::PinState;

/// Which of the two fixed gas inputs a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasSensor {
    /// Air quality (NH3, NOx, benzene, smoke, CO2).
    Mq135,
    /// Carbon monoxide and combustible gases.
    Mq9,
}

impl GasSensor {
    /// Label used on the dashboard and in logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mq135 => "MQ135",
            Self::Mq9 => "MQ9",
        }
    }
}

impl fmt::Display for GasSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detection state of one gas line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasLine {
    Present,
    Absent,
}

impl GasLine {
    /// Inverted logic: a low line means gas.
    pub fn from_level(level: PinState) -> Self {
        match level {
            PinState::Low => Self::Present,
            PinState::High => Self::Absent,
        }
    }

    /// Raw line value as read from a character device (`0` or `1`).
    /// Anything other than `0` counts as high.
    pub fn from_raw(raw: u8) -> Self {
        Self::from_level(PinState::from(raw != 0))
    }

    pub fn is_present(self) -> bool {
        self == Self::Present
    }
}
