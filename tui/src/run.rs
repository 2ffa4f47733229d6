//! Terminal lifecycle and the event loop.
//!
//! # Design
//! The loop owns the terminal and never blocks on the store. Store calls run
//! on a tokio runtime; each finished call posts a [`StoreOutcome`] back over
//! an unbounded channel, and the loop drains that channel before every
//! frame. Input is polled with a short timeout so in-flight spinners keep
//! moving even when no key is pressed.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use todo_store::{NewTodo, TodoStore};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::debug;
use tui::backend::{Backend, CrosstermBackend};
use tui::Terminal;

use crate::app::{Action, App, Command, StoreOutcome};
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(store: TodoStore) -> Result<()> {
    // Runtime first: if it cannot come up, the terminal is still untouched.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // setup terminal; when a step fails, roll back the ones before it
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
            return Err(err.into());
        }
    };

    let res = run_app(&mut terminal, &runtime, store);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &tokio::runtime::Runtime,
    store: TodoStore,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new();

    // Kick off the initial load before the first frame.
    let command = app.begin_fetch();
    dispatch(runtime, &store, &tx, command);

    let mut last_tick = Instant::now();
    loop {
        while let Ok(outcome) = rx.try_recv() {
            app.apply(outcome);
        }

        terminal.draw(|f| ui::draw(f, &mut app))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key.code) {
                    Action::None => {}
                    Action::Quit => return Ok(()),
                    Action::Dispatch(command) => dispatch(runtime, &store, &tx, command),
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }
}

/// Run one store call on the runtime and post its outcome back to the loop.
fn dispatch(
    runtime: &tokio::runtime::Runtime,
    store: &TodoStore,
    tx: &UnboundedSender<StoreOutcome>,
    command: Command,
) {
    debug!(?command, "dispatching store call");
    let store = store.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let outcome = match command {
            Command::FetchAll => StoreOutcome::Fetched(store.list().await),
            Command::Create { title, description } => {
                StoreOutcome::Added(store.create(NewTodo { title, description }).await)
            }
            Command::Update { id, patch } => StoreOutcome::Updated {
                id,
                result: store.update(id, patch).await,
            },
            Command::Delete { id } => StoreOutcome::Removed {
                id,
                result: store.delete(id).await,
            },
        };
        // The loop may already be gone during shutdown.
        let _ = tx.send(outcome);
    });
}
