//! TUI frontend using ratatui
//!
//! Owns the terminal: raw mode, alternate screen, optional mouse capture.
//! Events are polled synchronously with a bounded timeout and converted to
//! [`FrontendEvent`]s; drawing delegates to [`App::render`].

use crate::app::App;
use crate::frontend::FrontendEvent;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    mouse_captured: bool,
}

impl TuiFrontend {
    /// Initialize the terminal: raw mode, alternate screen, mouse capture.
    pub fn new(poll_timeout: Duration, capture_mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if capture_mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout,
            mouse_captured: capture_mouse,
        })
    }

    /// Convert a crossterm event to a FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key presses (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::Mouse {
                kind: mouse_event.kind,
                x: mouse_event.column,
                y: mouse_event.row,
            }),
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            _ => None,
        }
    }

    /// Poll for pending input events, blocking up to the poll timeout
    pub fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    /// Draw one frame from the current app state
    pub fn render(&mut self, app: &mut App) -> Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            app.render(area, f.buffer_mut());
        })?;
        Ok(())
    }

    /// Current terminal size in character cells
    pub fn size(&self) -> (u16, u16) {
        self.terminal
            .size()
            .map(|s| (s.width, s.height))
            .unwrap_or((80, 24))
    }

    /// Restore the terminal before exit
    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        if self.mouse_captured {
            execute!(self.terminal.backend_mut(), DisableMouseCapture)
                .context("Failed to disable mouse capture")?;
        }
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
