//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::alarm::{AlarmMode, BuzzerState};
use crate::error::{Error, ErrorKind};
use crate::sensors::Reading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries initial alarm mode).
    Started(AlarmMode),

    /// A valid reading was taken this cycle.
    ReadingTaken(Reading),

    /// The climate sensor hiccupped; this cycle's reading was skipped.
    ReadingSkipped(ErrorKind),

    /// The buzzer output changed level.
    BuzzerChanged { from: BuzzerState, to: BuzzerState },

    /// The user switched between automatic and manual buzzer control.
    ModeChanged { from: AlarmMode, to: AlarmMode },

    /// A fatal fault ended the loop.
    Fault(Error),

    /// The loop exited after `cycles` completed cycles.
    Stopped { cycles: u64 },
}
