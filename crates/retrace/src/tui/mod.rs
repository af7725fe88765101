//! Terminal UI for Retrace.

pub mod input;
pub mod ui;

use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::config::Theme;

/// Runs the interactive game until the player quits.
///
/// The terminal is restored before returning, whether the loop ended
/// cleanly, with an error, or by panicking.
#[instrument(skip_all)]
pub async fn run_tui(theme: Theme) -> Result<()> {
    info!("Starting Retrace TUI");

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), &theme).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Retrace TUI exited");
    res
}

/// Holds the terminal in raw mode on the alternate screen; restores it on
/// drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal();
    }
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the
/// cursor.
///
/// Every step is attempted even when an earlier one fails. Returns the
/// number of failed steps.
fn restore_terminal() -> usize {
    let mut stdout = io::stdout();
    let raw = disable_raw_mode();
    let screen = execute!(stdout, LeaveAlternateScreen);
    let mouse = execute!(stdout, DisableMouseCapture);
    let cursor = execute!(stdout, Show);
    log_failures([
        ("disable raw mode", raw),
        ("leave alternate screen", screen),
        ("disable mouse capture", mouse),
        ("show cursor", cursor),
    ])
}

fn log_failures<const N: usize>(steps: [(&'static str, io::Result<()>); N]) -> usize {
    steps
        .into_iter()
        .filter_map(|(step, result)| result.err().map(|err| (step, err)))
        .inspect(|(step, err)| error!(step, error = %err, "Terminal restore step failed"))
        .count()
}

/// Event loop: draw, wait for one event, apply at most one message.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    theme: &Theme,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        let mut layout = ui::ShellLayout::default();
        terminal.draw(|f| layout = ui::draw(f, &app, theme))?;

        if *app.should_quit() {
            return Ok(());
        }

        let Some(event) = events.next().await else {
            debug!("Terminal event stream closed");
            return Ok(());
        };
        let event = event?;

        if let Some(message) = input::map_event(&app, &layout, &event) {
            app.update(message);
        }
    }
}
