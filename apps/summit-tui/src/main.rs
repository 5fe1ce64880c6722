//! # summit-tui
//!
//! Terminal UI for the Summit goal tracker.
//!
//! A session-scoped goal board: the list is seeded with three example goals
//! on startup (or empty with `--empty`), and everything lives in memory
//! until the process exits. The board shows a progress gauge, filter tabs,
//! and the goal list; `a` opens the add-goal form, and completing a goal
//! plays a short celebration overlay.
//!
//! ## Usage
//!
//! ```text
//! summit            # start with the example goals
//! summit --empty    # start with an empty board
//! ```

mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use summit_goal::{GoalStore, SequentialIds, TracingSink};

use crate::app::App;

/// Poll interval for the event loop; also the celebration tick length.
const TICK_INTERVAL: Duration = Duration::from_millis(60);

/// Summit — a session-scoped goal board in the terminal.
#[derive(Parser)]
#[command(name = "summit", version, about)]
struct Cli {
    /// Start with an empty board instead of the example goals.
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they don't corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let ids = Box::new(SequentialIds::new());
    let mut store = if cli.empty {
        GoalStore::new(ids)
    } else {
        GoalStore::seeded(ids)
    };
    store.add_sink(Box::new(TracingSink));

    tracing::info!(goals = store.goals().len(), "starting goal board");

    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll with a timeout so the celebration overlay decays even when
        // the keyboard is idle.
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            app.on_tick();
        }
    }
    Ok(())
}
