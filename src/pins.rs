//! GPIO pin assignments for the dashboard board (BCM numbering).
//!
//! Single source of truth for the wiring.  [`SystemConfig`] copies these
//! as its defaults; nothing else hard-codes a pin number.
//!
//! [`SystemConfig`]: crate::config::SystemConfig

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Active buzzer driver transistor.  HIGH = sounding.
pub const BUZZER_GPIO: u8 = 17;

// ---------------------------------------------------------------------------
// Gas sensors: digital comparator outputs (inverted logic)
// ---------------------------------------------------------------------------

/// MQ135 air-quality module D0.  LOW = gas above the pot threshold.
pub const MQ135_GPIO: u8 = 27;
/// MQ9 CO / combustible gas module D0.  LOW = gas above the pot threshold.
pub const MQ9_GPIO: u8 = 22;

// ---------------------------------------------------------------------------
// Climate sensor
// ---------------------------------------------------------------------------

/// DHT11 single-wire data line (external 10 kΩ pull-up).
pub const DHT11_GPIO: u8 = 18;
