//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (GPIO lines, climate sensor, display, event log, clock)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! and [`Scheduler`](crate::scheduler::Scheduler) consume them via
//! generics, so the domain core never touches hardware directly.

use embedded_hal::digital::PinState;

use crate::dashboard::DashboardView;
use crate::error::{Result, SensorError};
use crate::sensors::climate::ClimateSample;

/// Numeric GPIO line id (BCM numbering on the Pi).
pub type LineId = u8;

// ───────────────────────────────────────────────────────────────
// Hardware port (driven adapter: domain ↔ GPIO + climate sensor)
// ───────────────────────────────────────────────────────────────

/// Narrow read/write interface onto the board.
///
/// Implementations hold no decision logic.  [`SensorError`]s from
/// `read_climate` are classified by the caller: checksum and timing
/// failures are expected on single-wire sensors and only skip a cycle.
pub trait HardwarePort {
    /// Read temperature (°C) and relative humidity (%) from the climate sensor.
    fn read_climate(&mut self) -> core::result::Result<ClimateSample, SensorError>;

    /// Sample the level of an input line.
    fn read_line(&mut self, line: LineId) -> Result<PinState>;

    /// Drive an output line.
    fn write_line(&mut self, line: LineId, level: PinState) -> Result<()>;

    /// Release every acquired line and the climate sensor.
    ///
    /// Must be idempotent and must not fail: it runs on every exit path,
    /// including after a fatal fault.  Subsequent reads and writes fail.
    fn release(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display sink (driven adapter: domain → screen)
// ───────────────────────────────────────────────────────────────

/// Receives a fully formatted dashboard snapshot.  Layout, fonts and
/// widget handles live entirely on the adapter side.
pub trait DisplaySink {
    fn show(&mut self, view: &DashboardView);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock (driven adapter: scheduler ↔ monotonic time)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source plus the scheduler's only suspension point.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;

    /// Block the loop thread for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u64);
}
