pub mod app;
pub mod ui;

use std::io;
use anyhow::Result;
use chrono::NaiveDateTime;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use taskmgr_core::{MemoryTaskRepository, TaskService};

use crate::tui::app::{App, InputMode};

pub fn run(service: TaskService<MemoryTaskRepository>, clock: fn() -> NaiveDateTime) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service, clock);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    loop_result(res)
}

/// Called once the terminal is restored, so the error lands on a normal screen
/// and the process exits non-zero.
fn loop_result(res: io::Result<()>) -> Result<()> {
    if let Err(err) = &res {
        tracing::error!("tui loop failed: {:?}", err);
    }
    res?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.input_mode {
                    InputMode::Normal => {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Down | KeyCode::Char('j') => app.next(),
                            KeyCode::Up | KeyCode::Char('k') => app.previous(),
                            KeyCode::Char(' ') | KeyCode::Enter => app.complete_selected(),
                            KeyCode::Char('o') => app.toggle_overdue_filter(),
                            KeyCode::Char('a') => app.enter_add_mode(),
                            _ => {}
                        }
                    },
                    InputMode::Adding => {
                        match key.code {
                            KeyCode::Enter => app.submit_command(),
                            KeyCode::Esc => app.exit_input_mode(),
                            KeyCode::Char(c) => app.input_char(c),
                            KeyCode::Backspace => app.delete_char(),
                            KeyCode::Left => app.move_cursor_left(),
                            KeyCode::Right => app.move_cursor_right(),
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_error_is_propagated() {
        let err = loop_result(Err(io::Error::other("terminal gone"))).unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
        assert!(loop_result(Ok(())).is_ok());
    }
}
