//! Terminal view.
//!
//! A synchronous crossterm event loop: read a key, hand it to [`App`], redraw.

mod app;
mod input;
mod ui;

pub use app::App;
pub use ui::move_label;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

use crate::settings::Settings;

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting terminal game");

    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.show_indices());
    let res = run_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(final_status = %app.state().status(), "Terminal game finished");
    res
}

/// Runs a restore step when dropped, on every exit path of the owner.
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn set_up(fail_at: Option<u32>, restored: &Cell<u32>) -> Result<()> {
        let _restore = RestoreOnDrop::new(|| restored.set(restored.get() + 1));
        for step in 0..3 {
            if fail_at == Some(step) {
                anyhow::bail!("setup step {} failed", step);
            }
        }
        Ok(())
    }

    #[test]
    fn test_restore_runs_on_every_exit_path() {
        for fail_at in [None, Some(0), Some(2)] {
            let restored = Cell::new(0);
            let res = set_up(fail_at, &restored);
            assert_eq!(res.is_err(), fail_at.is_some());
            assert_eq!(restored.get(), 1, "fail_at {:?}", fail_at);
        }
    }
}
