mod app;
mod commands;
mod config;
mod error;
mod store;
mod types;
mod validate;
mod views;
use crate::app::{App, AppState};
use crate::config::{get_log_file, Config};
use crate::error::Result;
use crate::views::home::render_home;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::{debug, info};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io::stdout};

/// Logs go to a file under the XDG state directory, since stderr is the
/// terminal being drawn on.
fn init_logging() -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_log_file()?)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(app: &mut App) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut next = AppState::Home;
    loop {
        match next {
            AppState::Home => next = render_home(&mut terminal, app)?,
            AppState::Exit => break,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    debug!("Loading config...");
    let config = Config::load()?;
    debug!("Loaded config: {config:?}");
    let mut app = App::new(config);

    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let result = run(&mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("Exiting with {} tasks.", app.store.count());
    result
}
