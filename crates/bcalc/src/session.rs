#![forbid(unsafe_code)]

//! Terminal session: raw mode and the alternate screen, restored on drop.
//!
//! # Contract
//!
//! - Only one session exists at a time.
//! - Every mode that was successfully enabled is disabled again, in reverse
//!   order, when the session drops. That includes unwinding from a panic,
//!   and a panic hook covers `panic = "abort"` builds where `Drop` never
//!   runs.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::{cursor, event, execute, terminal};

use crate::runtime::Event;

#[derive(Debug, Default)]
pub struct TerminalSession {
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
    bracketed_paste: bool,
}

impl TerminalSession {
    /// Enter raw mode, switch to the alternate screen, hide the cursor,
    /// and enable bracketed paste.
    ///
    /// # Errors
    ///
    /// Returns the first terminal error; anything already enabled is
    /// restored before returning.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        let mut session = Self::default();
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        session.raw_mode = true;
        tracing::info!("terminal raw mode enabled");

        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All)
        )?;
        session.alternate_screen = true;

        execute!(stdout, cursor::Hide)?;
        session.cursor_hidden = true;

        execute!(stdout, event::EnableBracketedPaste)?;
        session.bracketed_paste = true;

        Ok(session)
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for one input event.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Event::from_crossterm(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        if self.bracketed_paste {
            let _ = execute!(stdout, event::DisableBracketedPaste);
            self.bracketed_paste = false;
        }
        if self.cursor_hidden {
            let _ = execute!(stdout, cursor::Show);
            self.cursor_hidden = false;
        }
        if self.alternate_screen {
            let _ = execute!(stdout, terminal::LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
            tracing::info!("terminal restored");
        }
        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

/// Restore the terminal without knowing what was enabled.
fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        event::DisableBracketedPaste,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}
