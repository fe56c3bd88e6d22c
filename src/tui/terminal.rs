//! Full-screen terminal session for the game

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};

/// Raw mode, alternate screen and mouse capture, held until `restore`
/// is called or the value is dropped.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Switch the terminal into game mode.
    pub fn start() -> io::Result<Self> {
        let mut tui = Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
            active: true,
        };
        // From here on, Drop undoes whatever part of the setup succeeded
        enable_raw_mode()?;
        execute!(
            tui.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture
        )?;
        tui.terminal.hide_cursor()?;
        tui.terminal.clear()?;
        tracing::debug!("terminal session started");
        Ok(tui)
    }

    /// Put the terminal back the way the shell expects it. Every step is
    /// attempted; the first failure is returned.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let raw = disable_raw_mode();
        let screen = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let cursor = self.terminal.show_cursor();
        raw.and(screen).and(cursor)
    }

    /// Screen rectangle used for mouse hit testing.
    pub fn area(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(render).map(drop)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!("failed to restore terminal: {}", e);
        }
    }
}
