//! Dashboard presenter.
//!
//! Projects a [`Reading`] and the current [`BuzzerState`] into a
//! [`DashboardView`] (every label's text and background colour) and
//! hands it to a [`DisplaySink`].  The presenter holds no buzzer logic;
//! a button press is forwarded verbatim to the [`AlarmController`].
//!
//! ```text
//!  ┌──────────────────────┬──────────────────────┐
//!  │ Temperature (C)      │ Humidity             │
//!  │ Temperature (F)      │                      │
//!  ├──────────────┬───────┴──────┬───────────────┤
//!  │ MQ135 status │ MQ9 status   │ [buzzer btn]  │
//!  └──────────────┴──────────────┴───────────────┘
//! ```

use crate::alarm::{AlarmController, BuzzerState};
use crate::app::ports::{DisplaySink, HardwarePort};
use crate::error::Result;
use crate::sensors::Reading;
use crate::sensors::gas::GasSensor;

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

/// A named colour.  The name is what a toolkit sink would use; the RGB
/// value is for sinks that paint pixels or escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    pub name: &'static str,
    pub rgb: Rgb,
}

pub const COLOUR_WINDOW: Colour = Colour { name: "lightgrey", rgb: (211, 211, 211) };
pub const COLOUR_TEMPERATURE: Colour = Colour { name: "lightblue", rgb: (173, 216, 230) };
pub const COLOUR_HUMIDITY: Colour = Colour { name: "lightgreen", rgb: (144, 238, 144) };
pub const COLOUR_MQ135_CLEAR: Colour = Colour { name: "lightcoral", rgb: (240, 128, 128) };
pub const COLOUR_MQ135_ALERT: Colour = Colour { name: "red", rgb: (255, 0, 0) };
pub const COLOUR_MQ9_CLEAR: Colour = Colour { name: "lightyellow", rgb: (255, 255, 224) };
pub const COLOUR_MQ9_ALERT: Colour = Colour { name: "orange", rgb: (255, 165, 0) };
pub const COLOUR_BUTTON: Colour = Colour { name: "orange", rgb: (255, 165, 0) };

pub const WINDOW_TITLE: &str = "Sensor Dashboard";
pub const BUTTON_TURN_ON: &str = "Turn Buzzer On";
pub const BUTTON_TURN_OFF: &str = "Turn Buzzer Off";
pub const NOTICE_SENSOR_UNAVAILABLE: &str = "Sensor unavailable, retrying";

/// One text region of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub background: Colour,
}

impl Label {
    fn new(text: impl Into<String>, background: Colour) -> Self {
        Self {
            text: text.into(),
            background,
        }
    }
}

/// Everything a display sink needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub title: &'static str,
    pub background: Colour,
    pub temperature_c: Label,
    pub temperature_f: Label,
    pub humidity: Label,
    pub mq135: Label,
    pub mq9: Label,
    pub button: Label,
    /// Shown while the last climate read failed.
    pub notice: Option<&'static str>,
}

impl Default for DashboardView {
    /// The frame shown before the first valid reading.
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            background: COLOUR_WINDOW,
            temperature_c: Label::new("Temperature (C): -- *C", COLOUR_TEMPERATURE),
            temperature_f: Label::new("Temperature (F): -- *F", COLOUR_TEMPERATURE),
            humidity: Label::new("Humidity: -- %", COLOUR_HUMIDITY),
            mq135: gas_label(GasSensor::Mq135, false),
            mq9: gas_label(GasSensor::Mq9, false),
            button: button_label(BuzzerState::default()),
            notice: None,
        }
    }
}

/// Status label for one gas sensor.
pub fn gas_label(sensor: GasSensor, detected: bool) -> Label {
    let (clear, alert) = match sensor {
        GasSensor::Mq135 => (COLOUR_MQ135_CLEAR, COLOUR_MQ135_ALERT),
        GasSensor::Mq9 => (COLOUR_MQ9_CLEAR, COLOUR_MQ9_ALERT),
    };
    if detected {
        Label::new(format!("{} Status: Gas Detected!", sensor.label()), alert)
    } else {
        Label::new(format!("{} Status: No Gas Detected", sensor.label()), clear)
    }
}

/// The button names the action a press would take.
pub fn button_label(buzzer: BuzzerState) -> Label {
    let text = if buzzer.manual_override {
        BUTTON_TURN_OFF
    } else {
        BUTTON_TURN_ON
    };
    Label::new(text, COLOUR_BUTTON)
}

/// Keeps the last rendered frame so stale values survive a failed read.
pub struct DashboardPresenter {
    view: DashboardView,
}

impl DashboardPresenter {
    pub fn new() -> Self {
        Self {
            view: DashboardView::default(),
        }
    }

    /// Project this cycle's state and push the frame to `sink`.
    pub fn render(&mut self, reading: &Reading, buzzer: BuzzerState, sink: &mut impl DisplaySink) {
        if reading.valid {
            self.view.temperature_c.text =
                format!("Temperature (C): {:.1} *C", reading.temperature_celsius);
            self.view.temperature_f.text =
                format!("Temperature (F): {:.1} *F", reading.temperature_fahrenheit);
            self.view.humidity.text = format!("Humidity: {:.1}%", reading.humidity_percent);
            self.view.mq135 = gas_label(GasSensor::Mq135, reading.gas135_detected);
            self.view.mq9 = gas_label(GasSensor::Mq9, reading.gas9_detected);
            self.view.notice = None;
        } else {
            self.view.notice = Some(NOTICE_SENSOR_UNAVAILABLE);
        }
        self.view.button = button_label(buzzer);
        sink.show(&self.view);
    }

    /// Forward a button press to the alarm controller, then refresh the
    /// button label immediately rather than waiting for the next cycle.
    pub fn on_user_toggle(
        &mut self,
        alarm: &mut AlarmController,
        hw: &mut impl HardwarePort,
        sink: &mut impl DisplaySink,
    ) -> Result<BuzzerState> {
        let buzzer = alarm.on_user_toggle(hw)?;
        self.view.button = button_label(buzzer);
        sink.show(&self.view);
        Ok(buzzer)
    }

    /// Last frame shown.
    pub fn view(&self) -> &DashboardView {
        &self.view
    }
}

impl Default for DashboardPresenter {
    fn default() -> Self {
        Self::new()
    }
}
