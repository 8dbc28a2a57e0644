//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the sampler, the alarm controller and the dashboard
//! presenter.  It exposes one cycle ([`tick`](AppService::tick)) and the
//! inbound command handler.  All I/O flows through port traits injected
//! at call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  HardwarePort ──▶ ┌──────────────────────────────┐ ──▶ DisplaySink
//!                   │          AppService          │
//!  HardwarePort ◀── │ Sampler · Alarm · Presenter  │ ──▶ EventSink
//!                   └──────────────────────────────┘
//! ```

use log::info;

use crate::alarm::{AlarmController, AlarmMode, BuzzerState};
use crate::config::SystemConfig;
use crate::dashboard::{DashboardPresenter, DashboardView};
use crate::error::Result;
use crate::sensors::{Reading, SensorSampler};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{DisplaySink, EventSink, HardwarePort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    sampler: SensorSampler,
    alarm: AlarmController,
    presenter: DashboardPresenter,
    tick_count: u64,
    skipped_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            sampler: SensorSampler::new(config),
            alarm: AlarmController::new(config.buzzer_line),
            presenter: DashboardPresenter::new(),
            tick_count: 0,
            skipped_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Show the placeholder frame and announce the initial mode.
    pub fn start(&mut self, display: &mut impl DisplaySink, sink: &mut impl EventSink) {
        display.show(self.presenter.view());
        sink.emit(&AppEvent::Started(self.alarm.mode()));
        info!("AppService started in {:?} mode", self.alarm.mode());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full cycle: sample → alarm decision → render.
    ///
    /// A transient climate failure still renders (stale values plus a
    /// notice).  Fatal errors return before anything else is touched.
    pub fn tick(
        &mut self,
        hw: &mut impl HardwarePort,
        display: &mut impl DisplaySink,
        sink: &mut impl EventSink,
    ) -> Result<Reading> {
        self.tick_count += 1;

        // 1. Sample
        let reading = self.sampler.sample(hw)?;
        match reading.error {
            None => sink.emit(&AppEvent::ReadingTaken(reading)),
            Some(kind) => {
                self.skipped_count += 1;
                sink.emit(&AppEvent::ReadingSkipped(kind));
            }
        }

        // 2. Alarm decision
        let before = self.alarm.state();
        let after = self.alarm.on_cycle(&reading, hw)?;
        if after.physical_on != before.physical_on {
            sink.emit(&AppEvent::BuzzerChanged { from: before, to: after });
        }

        // 3. Render
        self.presenter.render(&reading, after, display);

        Ok(reading)
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an inbound user command.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl HardwarePort,
        display: &mut impl DisplaySink,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match cmd {
            AppCommand::ToggleBuzzer => {
                let before = self.alarm.state();
                let after = self.presenter.on_user_toggle(&mut self.alarm, hw, display)?;
                sink.emit(&AppEvent::ModeChanged {
                    from: before.mode(),
                    to: after.mode(),
                });
                if after.physical_on != before.physical_on {
                    sink.emit(&AppEvent::BuzzerChanged { from: before, to: after });
                }
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn buzzer(&self) -> BuzzerState {
        self.alarm.state()
    }

    pub fn mode(&self) -> AlarmMode {
        self.alarm.mode()
    }

    /// Last frame handed to the display.
    pub fn view(&self) -> &DashboardView {
        self.presenter.view()
    }

    /// Total cycles attempted since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Cycles whose climate read failed transiently.
    pub fn skipped_count(&self) -> u64 {
        self.skipped_count
    }
}
