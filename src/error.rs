//! Unified error types for the gas dashboard.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! control loop's error handling uniform.  All variants are `Copy` so they
//! can ride inside a [`Reading`](crate::sensors::Reading) without allocation.
//!
//! The loop only ever asks one question of an error: can we carry on at
//! the next tick, or must we release the hardware and stop?  That answer
//! is [`Error::kind`].

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor or input line could not be read.
    Sensor(SensorError),
    /// An output line could not be driven.
    Actuator(ActuatorError),
    /// Peripheral acquisition failed at start-up.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

/// Recoverability of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Sensor noise: skip this cycle's reading, try again next tick.
    TransientRead,
    /// Anything else: release hardware and terminate.
    Fatal,
}

impl Error {
    /// Classify this error for the control loop.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Sensor(e) if e.is_transient() => ErrorKind::TransientRead,
            _ => ErrorKind::Fatal,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::TransientRead
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransientRead => write!(f, "transient read error"),
            Self::Fatal => write!(f, "fatal fault"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// DHT frame arrived but its checksum byte did not match.
    ChecksumMismatch,
    /// The sensor did not answer within its timing window.
    Timeout,
    /// GPIO read returned an error.
    GpioReadFailed,
    /// The line was used after the hardware was released.
    LineReleased,
    /// The line id does not name an input this adapter owns.
    UnknownLine(u8),
    /// The climate sensor was never initialised.
    NotInitialised,
}

impl SensorError {
    /// Checksum and timing failures are routine on single-wire sensors.
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::ChecksumMismatch | Self::Timeout)
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChecksumMismatch => write!(f, "checksum did not validate"),
            Self::Timeout => write!(f, "sensor response timed out"),
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::LineReleased => write!(f, "line already released"),
            Self::UnknownLine(id) => write!(f, "unknown input line {id}"),
            Self::NotInitialised => write!(f, "sensor not initialised"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO set failed.
    GpioWriteFailed,
    /// The line was used after the hardware was released.
    LineReleased,
    /// The line id does not name an output this adapter owns.
    UnknownLine(u8),
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::LineReleased => write!(f, "line already released"),
            Self::UnknownLine(id) => write!(f, "unknown output line {id}"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
