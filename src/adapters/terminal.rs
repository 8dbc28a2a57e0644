//! Terminal display and keyboard input.
//!
//! [`TerminalDisplay`] redraws the whole dashboard on every frame using
//! 24-bit ANSI background colours.  [`spawn_stdin_reader`] turns typed
//! lines into [`Event`]s on a helper thread.
//!
//! | Input          | Event           |
//! |----------------|-----------------|
//! | `t` / `b`      | `ToggleBuzzer`  |
//! | `q`            | `Shutdown`      |
//!
//! End of input (stdin closed or redirected from `/dev/null`, as under
//! systemd or cron) only stops the reader.  The loop keeps sampling until
//! `q`, Ctrl-C or SIGTERM.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use crate::app::ports::DisplaySink;
use crate::dashboard::{Colour, DashboardView, Label};
use crate::events::{Event, EventQueue};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";
const LABEL_WIDTH: usize = 36;

/// Draws [`DashboardView`]s onto any `Write` (stdout in the binary).
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, view: &DashboardView) -> io::Result<()> {
        write!(self.out, "{CLEAR_SCREEN}")?;
        writeln!(self.out, "{}", paint(view.title, view.background, LABEL_WIDTH * 2 + 1))?;
        writeln!(
            self.out,
            "{} {}",
            cell(&view.temperature_c),
            cell(&view.humidity)
        )?;
        writeln!(
            self.out,
            "{} {}",
            cell(&view.temperature_f),
            paint("", view.humidity.background, LABEL_WIDTH)
        )?;
        writeln!(self.out, "{} {}", cell(&view.mq135), cell(&view.mq9))?;
        writeln!(self.out, "[ {} ]  (t = toggle, q = quit)", cell(&view.button))?;
        if let Some(notice) = view.notice {
            writeln!(self.out, "! {notice}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show(&mut self, view: &DashboardView) {
        if let Err(e) = self.draw(view) {
            warn!("Display write failed: {}", e);
        }
    }
}

fn cell(label: &Label) -> String {
    paint(&label.text, label.background, LABEL_WIDTH)
}

fn paint(text: &str, colour: Colour, width: usize) -> String {
    let (r, g, b) = colour.rgb;
    format!("\x1b[48;2;{r};{g};{b}m\x1b[30m {text:<width$}{RESET}")
}

/// Map one typed line to an event.
pub fn parse_input(line: &str) -> Option<Event> {
    match line.trim().to_ascii_lowercase().as_str() {
        "t" | "b" | "toggle" => Some(Event::ToggleBuzzer),
        "q" | "quit" | "exit" => Some(Event::Shutdown),
        _ => None,
    }
}

/// Push an event for every recognised line until `q`, EOF or a read error.
pub fn read_commands(input: impl BufRead, queue: &EventQueue) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                info!("Input closed ({}), keyboard commands disabled", e);
                return;
            }
        };
        match parse_input(&line) {
            Some(event) => {
                if !queue.push(event) {
                    warn!("Input queue full, dropped {:?}", event);
                }
                if event == Event::Shutdown {
                    return;
                }
            }
            None => debug!("Ignoring input {:?}", line),
        }
    }
    info!("End of input, keyboard commands disabled");
}

/// Run [`read_commands`] over stdin on a helper thread.
pub fn spawn_stdin_reader(queue: Arc<EventQueue>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-input".into())
        .spawn(move || read_commands(io::stdin().lock(), &queue))
}
