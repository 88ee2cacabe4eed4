use std::{
    io::{self, Stdout},
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{CompletedFrame, Frame, Terminal, backend::CrosstermBackend, layout::Rect};

type Backend = CrosstermBackend<Stdout>;

static RESTORE_ON_PANIC: Once = Once::new();

/// The terminal while the desk owns it: raw mode, alternate screen and
/// mouse reporting (wheel scrolling over the table). Everything is undone
/// on drop, and by a panic hook if the process panics first.
pub struct TerminalSession {
    terminal: Terminal<Backend>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            leave();
            return Err(err).context("failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                leave();
                return Err(err).context("failed to initialize terminal");
            }
        };
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave();
                previous(info);
            }));
        });
        Ok(Self { terminal })
    }

    /// Full screen area, used to size the table before drawing.
    pub fn viewport(&self) -> Result<Rect> {
        let size = self
            .terminal
            .size()
            .context("failed to read terminal size")?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    pub fn draw<F>(&mut self, render: F) -> Result<CompletedFrame<'_>>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).context("failed to draw frame")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        leave();
    }
}

fn leave() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
}
