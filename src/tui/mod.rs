//! # Interactive Session
//!
//! The ratatui-specific layer: terminal setup/teardown, a synchronous
//! event loop, and a full redraw per input event. This is the only module
//! that knows about ratatui and crossterm.
//!
//! The loop is strictly single-threaded: one input event is processed to
//! completion (including any store round trip) before the next is read.
//! There is no polling and no background work — `event::read` blocks until
//! the user does something, and a resize simply falls through to the next
//! redraw.
//!
//! All state transitions live in [`App::handle_key`], a pure function over
//! the app state, so the whole state machine is unit-testable without a
//! terminal.

mod app;
mod render;

pub use app::{App, Mode};

use crossterm::event::{self, Event, KeyEventKind};

use crate::api::TodozApi;
use crate::error::Result;
use crate::store::TodoStore;

/// Run the interactive session until the user quits.
///
/// `ratatui::init` installs a panic hook that restores the terminal, so a
/// crash mid-session never leaves raw mode enabled.
pub fn run<S: TodoStore>(api: TodozApi<S>) -> Result<()> {
    let mut app = App::new(api);
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop<S: TodoStore>(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App<S>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render::draw(frame, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
