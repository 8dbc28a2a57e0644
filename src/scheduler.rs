//! Cooperative sampling loop.
//!
//! One thread runs everything: the periodic cycle and the user's button
//! presses, interleaved at well-defined points.  Input threads only push
//! into the [`EventQueue`].
//!
//! ```text
//!         ┌───────────────────────────────────────────────┐
//!         │ top of loop: dispatch events, honour shutdown │◀──────┐
//!         └──────────────────────┬────────────────────────┘       │
//!                                ▼                                │
//!         ┌───────────────────────────────────────────────┐       │
//!         │ AppService::tick  (sample → alarm → render)   │       │
//!         └──────────────────────┬────────────────────────┘       │
//!                                ▼                                │
//!         ┌───────────────────────────────────────────────┐       │
//!         │ wait for period, dispatching toggles in slices│───────┘
//!         └───────────────────────────────────────────────┘
//!
//!   any exit (shutdown or fatal) ──▶ HardwarePort::release()
//! ```

use log::{debug, error, info};

use crate::app::commands::AppCommand;
use crate::app::events::AppEvent;
use crate::app::ports::{Clock, DisplaySink, EventSink, HardwarePort};
use crate::app::service::AppService;
use crate::config::SystemConfig;
use crate::error::Result;
use crate::events::{Event, EventQueue};

/// Fixed-period cooperative scheduler.
pub struct Scheduler {
    period_ms: u64,
    poll_ms: u64,
    shutdown_requested: bool,
    cycles: u64,
}

impl Scheduler {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            period_ms: u64::from(config.sample_interval_ms),
            poll_ms: u64::from(config.event_poll_interval_ms.max(1)),
            shutdown_requested: false,
            cycles: 0,
        }
    }

    /// Run cycles until a [`Event::Shutdown`] is received or a fatal
    /// fault occurs.
    ///
    /// Hardware is released on every exit path before this returns.  On
    /// shutdown the number of completed cycles is returned; a fatal fault
    /// is returned unchanged.
    pub fn run(
        &mut self,
        app: &mut AppService,
        hw: &mut impl HardwarePort,
        display: &mut impl DisplaySink,
        sink: &mut impl EventSink,
        clock: &mut impl Clock,
        events: &EventQueue,
    ) -> Result<u64> {
        info!("Scheduler: period={}ms poll={}ms", self.period_ms, self.poll_ms);
        app.start(display, sink);

        let result = self.run_loop(app, hw, display, sink, clock, events);

        hw.release();
        info!("Scheduler: hardware released");

        if let Err(e) = &result {
            error!("Fatal fault after {} cycles: {}", self.cycles, e);
            sink.emit(&AppEvent::Fault(*e));
        }
        sink.emit(&AppEvent::Stopped { cycles: self.cycles });
        result.map(|()| self.cycles)
    }

    // ── Internal ──────────────────────────────────────────────────

    fn run_loop(
        &mut self,
        app: &mut AppService,
        hw: &mut impl HardwarePort,
        display: &mut impl DisplaySink,
        sink: &mut impl EventSink,
        clock: &mut impl Clock,
        events: &EventQueue,
    ) -> Result<()> {
        loop {
            self.dispatch(app, hw, display, sink, events)?;
            if self.shutdown_requested {
                info!("Scheduler: shutdown requested");
                return Ok(());
            }

            let started = clock.now_ms();
            app.tick(hw, display, sink)?;
            self.cycles += 1;

            self.wait_until(started + self.period_ms, app, hw, display, sink, clock, events)?;
        }
    }

    /// Sleep in `poll_ms` slices until `deadline`, handling user input
    /// between slices.  Returns early once shutdown is requested.
    #[allow(clippy::too_many_arguments)]
    fn wait_until(
        &mut self,
        deadline: u64,
        app: &mut AppService,
        hw: &mut impl HardwarePort,
        display: &mut impl DisplaySink,
        sink: &mut impl EventSink,
        clock: &mut impl Clock,
        events: &EventQueue,
    ) -> Result<()> {
        loop {
            self.dispatch(app, hw, display, sink, events)?;
            if self.shutdown_requested {
                return Ok(());
            }
            let now = clock.now_ms();
            if now >= deadline {
                return Ok(());
            }
            clock.sleep_ms((deadline - now).min(self.poll_ms));
        }
    }

    fn dispatch(
        &mut self,
        app: &mut AppService,
        hw: &mut impl HardwarePort,
        display: &mut impl DisplaySink,
        sink: &mut impl EventSink,
        events: &EventQueue,
    ) -> Result<()> {
        while let Some(event) = events.pop() {
            debug!("Event: {:?}", event);
            match event {
                Event::ToggleBuzzer => {
                    app.handle_command(AppCommand::ToggleBuzzer, hw, display, sink)?;
                }
                Event::Shutdown => self.shutdown_requested = true,
            }
        }
        Ok(())
    }
}
