//! Interactive terminal dashboard.
//!
//! The left sidebar holds the transaction type filter and the list of
//! sections; the main panel shows the selected section. Every filter change
//! runs a full render cycle through the table source.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::dashboard::DashboardOptions;
use crate::storage::TableSource;
use crate::tui::app::AppState;

const TICK: Duration = Duration::from_millis(100);

/// Loads the table, then hands the terminal to the dashboard until the user quits.
///
/// # Errors
/// Returns load failures and terminal I/O errors.
pub fn run<S: TableSource>(source: S, path: PathBuf, options: DashboardOptions) -> Result<()> {
    // Load before touching the terminal so failures print normally.
    let mut app = AppState::new(source, path, options)?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Dashboard closed");

    result
}

fn run_app<S: TableSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState<S>
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
