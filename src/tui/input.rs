//! Keyboard dispatch: global keys first, then keys of the focused panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::storage::TableSource;
use crate::tui::app::{AppState, Focus};

pub fn handle_key<S: TableSource>(app: &mut AppState<S>, key: KeyEvent) -> anyhow::Result<()> {
    // Windows reports both press and release.
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Filter => Focus::Sections,
                Focus::Sections => Focus::Filter
            };
            return Ok(());
        }
        KeyCode::Char('c') => {
            app.clear_selection()?;
            return Ok(());
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.move_section(true);
            return Ok(());
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.move_section(false);
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::Filter => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current()?,
            _ => {}
        },
        Focus::Sections => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.move_section(true),
            KeyCode::Up | KeyCode::Char('k') => app.move_section(false),
            _ => {}
        }
    }

    Ok(())
}
