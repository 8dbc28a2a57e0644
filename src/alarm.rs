//! Buzzer alarm controller.
//!
//! Owns the single [`BuzzerState`] for the process and arbitrates the
//! buzzer line between two masters:
//!
//! | Mode     | Selected by              | Buzzer follows                    |
//! |----------|--------------------------|-----------------------------------|
//! | `Auto`   | `manual_override == false` | gas on either line, every cycle |
//! | `Manual` | `manual_override == true`  | the user's last toggle          |
//!
//! ## Mode lifecycle
//!
//! 1. Power-on: `Auto`, buzzer off.
//! 2. A user toggle enters `Manual` and forces the buzzer **on**.
//! 3. Cycles are ignored while in `Manual`, whatever the gas lines say.
//! 4. The next toggle returns to `Auto` and forces the buzzer **off**;
//!    the following valid cycle re-asserts gas-driven control.
//!
//! Manual mode never times out.  While it is active, gas detection does
//! not reach the buzzer.

use embedded_hal::digital::PinState;
use log::debug;

use crate::app::ports::{HardwarePort, LineId};
use crate::error::Result;
use crate::sensors::Reading;

/// Buzzer ownership and physical level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuzzerState {
    /// User has taken manual control.
    pub manual_override: bool,
    /// Level last driven onto the buzzer line.
    pub physical_on: bool,
}

impl BuzzerState {
    pub fn mode(&self) -> AlarmMode {
        if self.manual_override {
            AlarmMode::Manual
        } else {
            AlarmMode::Auto
        }
    }
}

/// Who currently owns the buzzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmMode {
    Auto,
    Manual,
}

/// Alarm controller.
pub struct AlarmController {
    state: BuzzerState,
    buzzer_line: LineId,
}

impl AlarmController {
    pub fn new(buzzer_line: LineId) -> Self {
        Self {
            state: BuzzerState::default(),
            buzzer_line,
        }
    }

    /// Handle a press of the dashboard's buzzer button.
    ///
    /// Flips `manual_override` and forces the buzzer to match it, regardless
    /// of current gas readings.
    pub fn on_user_toggle(&mut self, hw: &mut impl HardwarePort) -> Result<BuzzerState> {
        let manual = !self.state.manual_override;
        self.drive(hw, manual)?;
        self.state = BuzzerState {
            manual_override: manual,
            physical_on: manual,
        };
        debug!("toggle: line {} driven {}", self.buzzer_line, if manual { "high" } else { "low" });
        Ok(self.state)
    }

    /// Apply one cycle's gas decision.
    ///
    /// Invalid readings and manual mode leave the buzzer untouched.  In
    /// auto mode the line is re-driven every cycle even when unchanged.
    pub fn on_cycle(&mut self, reading: &Reading, hw: &mut impl HardwarePort) -> Result<BuzzerState> {
        if !reading.valid || self.state.manual_override {
            return Ok(self.state);
        }

        let on = reading.any_gas();
        self.drive(hw, on)?;
        self.state.physical_on = on;
        Ok(self.state)
    }

    /// Current buzzer state (by value).
    pub fn state(&self) -> BuzzerState {
        self.state
    }

    pub fn mode(&self) -> AlarmMode {
        self.state.mode()
    }

    // ── Internal ──────────────────────────────────────────────────

    fn drive(&self, hw: &mut impl HardwarePort, on: bool) -> Result<()> {
        hw.write_line(self.buzzer_line, PinState::from(on))
    }
}
