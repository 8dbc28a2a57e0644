//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (dashboard
//! button, terminal input) that the [`AppService`](super::service::AppService)
//! interprets and acts upon.

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// The dashboard's buzzer button was pressed.
    ToggleBuzzer,
}
