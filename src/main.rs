//! Gas dashboard: entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  LineHardware/Sim   TerminalDisplay   LogEventSink  SystemClock│
//! │  (HardwarePort)     (DisplaySink)     (EventSink)   (Clock)    │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Sampler · AlarmController · DashboardPresenter        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (fixed period) ◀── EventQueue ◀── stdin, Ctrl-C     │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use gasdash::adapters::log_sink::LogEventSink;
use gasdash::adapters::terminal::{TerminalDisplay, spawn_stdin_reader};
use gasdash::adapters::time::SystemClock;
use gasdash::app::ports::HardwarePort;
use gasdash::app::service::AppService;
use gasdash::config::{CONFIG_ENV_VAR, SystemConfig};
use gasdash::events::{Event, EventQueue};
use gasdash::scheduler::Scheduler;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("╔══════════════════════════════════════╗");
    info!("║  gasdash v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config from the environment (or defaults) ──────────
    let config = match SystemConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{} rejected ({}), using defaults", CONFIG_ENV_VAR, e);
            SystemConfig::default()
        }
    };
    info!(
        "Config: period={}ms buzzer=GPIO{} mq135=GPIO{} mq9=GPIO{} dht11=GPIO{}",
        config.sample_interval_ms,
        config.buzzer_line,
        config.mq135_line,
        config.mq9_line,
        config.climate_line
    );

    // ── 3. Input sources ──────────────────────────────────────
    let events = Arc::new(EventQueue::new());
    {
        let events = Arc::clone(&events);
        ctrlc::set_handler(move || {
            events.push(Event::Shutdown);
        })
        .context("installing Ctrl-C handler")?;
    }
    spawn_stdin_reader(Arc::clone(&events)).context("spawning stdin reader")?;

    // ── 4. Hardware ───────────────────────────────────────────
    #[cfg(feature = "rpi")]
    let mut hw = gasdash::adapters::rpi::acquire(&config).context("acquiring GPIO lines")?;
    #[cfg(not(feature = "rpi"))]
    let mut hw = {
        warn!("Built without `rpi`: using simulated sensors");
        gasdash::adapters::sim::SimHardware::new(&config)
            .with_drift()
            .with_noise(7)
    };

    run(&config, &mut hw, &events)
}

// ── Event loop ────────────────────────────────────────────────

fn run(config: &SystemConfig, hw: &mut impl HardwarePort, events: &EventQueue) -> Result<()> {
    let mut display = TerminalDisplay::stdout();
    let mut sink = LogEventSink::new();
    let mut clock = SystemClock::new();
    let mut app = AppService::new(config);
    let mut scheduler = Scheduler::new(config);

    info!("System ready. Entering sampling loop.");
    let cycles = scheduler
        .run(&mut app, hw, &mut display, &mut sink, &mut clock, events)
        .context("sampling loop aborted")?;

    info!(
        "Shut down cleanly after {} cycles ({} skipped)",
        cycles,
        app.skipped_count()
    );
    Ok(())
}
