//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (stderr via `env_logger` in the binary).

use log::{debug, error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::ReadingTaken(r) => {
                debug!(
                    "READ  | T={:.1}\u{00b0}C/{:.1}\u{00b0}F | RH={:.1}% | mq135={} mq9={}",
                    r.temperature_celsius,
                    r.temperature_fahrenheit,
                    r.humidity_percent,
                    if r.gas135_detected { "GAS" } else { "clear" },
                    if r.gas9_detected { "GAS" } else { "clear" },
                );
            }
            AppEvent::ReadingSkipped(kind) => {
                warn!("READ  | skipped ({})", kind);
            }
            AppEvent::BuzzerChanged { from, to } if to.physical_on && !to.manual_override => {
                warn!(
                    "BUZZ  | {} -> on (mode=Auto) gas detected",
                    if from.physical_on { "on" } else { "off" },
                );
            }
            AppEvent::BuzzerChanged { from, to } => {
                info!(
                    "BUZZ  | {} -> {} (mode={:?})",
                    if from.physical_on { "on" } else { "off" },
                    if to.physical_on { "on" } else { "off" },
                    to.mode(),
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE  | {:?} -> {:?}", from, to);
            }
            AppEvent::Fault(e) => {
                error!("FAULT | {}", e);
            }
            AppEvent::Started(mode) => {
                info!("START | mode={:?}", mode);
            }
            AppEvent::Stopped { cycles } => {
                info!("STOP  | cycles={}", cycles);
            }
        }
    }
}
