mod app;
mod ui;

use crate::index::Mailbox;
use anyhow::Result;
use app::{App, Screen};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Runs `restore` when dropped, on the normal path and on any early return
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Run the interactive menu over an already loaded mailbox
pub fn run(mailbox: Mailbox, status_message: String, status_ok: bool, use_color: bool) -> Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(mailbox, status_message, status_ok, use_color);
    run_app(&mut terminal, &mut app)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        // Only handle key press events, not release or repeat
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers == KeyModifiers::CONTROL && matches!(key.code, KeyCode::Char('c' | 'q')) {
            return Ok(());
        }

        match app.screen {
            Screen::Menu => match key.code {
                KeyCode::Char(c @ ('0' | '1' | '2' | '3')) => app.choose(c),
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => app.menu_next(),
                KeyCode::Up | KeyCode::Char('k') => app.menu_prev(),
                KeyCode::Enter => app.choose_selected(),
                _ => {}
            },
            Screen::Prompt(_) => match key.code {
                KeyCode::Esc => app.back_to_menu(),
                KeyCode::Enter => app.submit_prompt(),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            },
            Screen::Results => match key.code {
                KeyCode::Esc => app.back_to_menu(),
                KeyCode::Enter => app.open(),
                KeyCode::Char(c) if c.is_ascii_digit() => app.push_id_digit(c),
                KeyCode::Backspace => {
                    app.id_input.pop();
                }
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                KeyCode::Home | KeyCode::Char('g') => app.select_first(),
                KeyCode::End | KeyCode::Char('G') => app.select_last(),
                _ => {}
            },
            Screen::Reader => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_reader(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup_then_fail(restores: &Cell<u32>) -> Result<()> {
        let _guard = TerminalGuard {
            restore: || restores.set(restores.get() + 1),
        };
        anyhow::bail!("terminal setup failed")
    }

    #[test]
    fn test_guard_restores_after_setup_error() {
        let restores = Cell::new(0);
        assert!(setup_then_fail(&restores).is_err());
        assert_eq!(restores.get(), 1);
    }

    #[test]
    fn test_guard_restores_once_on_normal_exit() {
        let restores = Cell::new(0);
        {
            let _guard = TerminalGuard {
                restore: || restores.set(restores.get() + 1),
            };
            assert_eq!(restores.get(), 0);
        }
        assert_eq!(restores.get(), 1);
    }
}
