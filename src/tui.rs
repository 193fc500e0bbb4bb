//! Terminal lifecycle and event polling
//!
//! Wraps ratatui's `Terminal` so the rest of the app never touches
//! crossterm directly: `enter`/`exit` manage raw mode and the alternate
//! screen, and `next_event` folds the poll timeout into a `TuiEvent::Tick`.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

/// What the event loop sees each iteration
pub enum TuiEvent {
    /// A key press (release events are filtered out)
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// No input within the tick rate
    Tick,
}

/// Terminal wrapper owning setup, teardown, and event polling
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Enable raw mode and switch to the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal; also runs on Drop as a fallback
    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    /// Block for up to one tick and translate whatever arrives
    ///
    /// Key release and repeat events are dropped (Windows reports them);
    /// a quiet interval becomes `Tick` so time-based updates still run.
    pub fn next_event(&self) -> Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(TuiEvent::Key(key)),
            Event::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
            _ => Ok(TuiEvent::Tick),
        }
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
