#![forbid(unsafe_code)]

//! Elm-style runtime for the calculator.
//!
//! A [`Model`] owns all state, turns messages into new state plus a
//! [`Cmd`], and renders itself into a [`Buffer`]. The [`Program`] drives
//! the loop: it polls terminal input, converts it into messages, schedules
//! frame ticks, and hands finished buffers to the [`Presenter`].
//!
//! # Ticks
//!
//! There is no free-running frame timer. A model that wants frames returns
//! [`Cmd::Tick`]; the program sleeps at most that long, then delivers one
//! [`Event::Tick`] carrying the time measured on the [`FrameClock`] since
//! the previous tick. A model that stops asking stops receiving frames.
//!
//! ```ignore
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Tick(dt) => { self.elapsed += dt; Cmd::tick(FRAME) }
//!             Msg::Quit => Cmd::quit(),
//!         }
//!     }
//!
//!     fn view(&self, buf: &mut Buffer) { /* draw */ }
//! }
//! ```

use std::io::{self, Write};
use std::time::Duration;

use bcalc_core::{FrameClock, MonotonicClock};
use bcalc_widgets::Buffer;
use crossterm::event::{Event as TermEvent, KeyEvent, KeyEventKind};

use crate::presenter::Presenter;
use crate::session::TerminalSession;

/// Poll timeout while no tick is scheduled.
pub const IDLE_POLL: Duration = Duration::from_millis(100);

/// Input the runtime delivers to a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    /// Time since the previous tick.
    Tick(Duration),
}

impl Event {
    /// Translate a terminal event; key releases and unhandled kinds yield `None`.
    pub fn from_crossterm(event: TermEvent) -> Option<Self> {
        match event {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            TermEvent::Paste(text) => Some(Self::Paste(text)),
            TermEvent::Resize(width, height) => Some(Self::Resize(width, height)),
            _ => None,
        }
    }
}

/// Application state and behavior.
pub trait Model {
    type Message: From<Event>;

    /// Commands to run once at startup.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the whole screen into `buf`.
    fn view(&self, buf: &mut Buffer);
}

/// Side effects requested by a model.
#[derive(Debug)]
pub enum Cmd<M> {
    None,
    Quit,
    Batch(Vec<Cmd<M>>),
    /// Feed a message straight back into `update`.
    Msg(M),
    /// Deliver one tick after this long.
    Tick(Duration),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[inline]
    pub fn tick(after: Duration) -> Self {
        Self::Tick(after)
    }

    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Self::Batch(cmds),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// The update/view loop around one model.
pub struct Program<M: Model, C: FrameClock = MonotonicClock> {
    model: M,
    clock: C,
    running: bool,
    dirty: bool,
    /// Clock time at which the pending tick fires.
    tick_at: Option<Duration>,
    last_tick: Duration,
    size: (u16, u16),
}

impl<M: Model, C: FrameClock> Program<M, C> {
    pub fn new(model: M, clock: C) -> Self {
        let now = clock.now();
        Self {
            model,
            clock,
            running: true,
            dirty: true,
            tick_at: None,
            last_tick: now,
            size: (80, 24),
        }
    }

    /// Run the model's `init` command.
    pub fn start(&mut self) {
        let cmd = self.model.init();
        self.execute(cmd);
    }

    /// Convert `event` into a message and apply it.
    pub fn dispatch(&mut self, event: Event) {
        if let Event::Resize(width, height) = event {
            self.size = (width, height);
        }
        let cmd = self.model.update(M::Message::from(event));
        self.dirty = true;
        self.execute(cmd);
    }

    fn execute(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                tracing::debug!("quit requested");
                self.running = false;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
            Cmd::Msg(msg) => {
                let cmd = self.model.update(msg);
                self.dirty = true;
                self.execute(cmd);
            }
            Cmd::Tick(after) => {
                let now = self.clock.now();
                let at = now.saturating_add(after);
                match self.tick_at {
                    Some(pending) => self.tick_at = Some(pending.min(at)),
                    None => {
                        // Idle until now: measure the first frame from here.
                        self.last_tick = now;
                        self.tick_at = Some(at);
                    }
                }
            }
        }
    }

    /// How long input polling may block before the next tick is due.
    pub fn poll_timeout(&self) -> Duration {
        match self.tick_at {
            Some(at) => at.saturating_sub(self.clock.now()),
            None => IDLE_POLL,
        }
    }

    /// Deliver the pending tick if it is due. Returns whether one fired.
    pub fn fire_due_tick(&mut self) -> bool {
        let now = self.clock.now();
        match self.tick_at {
            Some(at) if now >= at => {
                self.tick_at = None;
                let dt = now.saturating_sub(self.last_tick);
                self.last_tick = now;
                tracing::trace!(dt_us = dt.as_micros() as u64, "tick");
                self.dispatch(Event::Tick(dt));
                true
            }
            _ => false,
        }
    }

    /// Render the model if anything changed since the last render.
    pub fn render(&mut self) -> Option<Buffer> {
        if !self.dirty {
            return None;
        }
        let mut buf = Buffer::new(self.size.0, self.size.1);
        self.model.view(&mut buf);
        self.dirty = false;
        Some(buf)
    }

    /// Drive the loop until the model quits.
    pub fn run<W: Write>(
        &mut self,
        session: &TerminalSession,
        presenter: &mut Presenter<W>,
    ) -> io::Result<()> {
        self.size = session.size()?;
        tracing::info!(width = self.size.0, height = self.size.1, "program started");
        self.start();

        while self.running {
            if let Some(buf) = self.render() {
                presenter.present(&buf)?;
            }
            if let Some(event) = session.poll_event(self.poll_timeout())? {
                if matches!(event, Event::Resize(..)) {
                    presenter.invalidate();
                }
                self.dispatch(event);
            }
            self.fire_due_tick();
        }

        tracing::info!("program stopped");
        Ok(())
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_pending(&self) -> bool {
        self.tick_at.is_some()
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.dirty = true;
    }
}
