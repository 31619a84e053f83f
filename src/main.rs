//! user-cards binary entry point.
//!
//! Parses the command line, initializes the terminal in raw mode, runs the
//! TUI event loop, and restores the terminal state on exit.
//!
use crate::error::{Context, Result, simple_error};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::path::PathBuf;

mod api;
mod app;
mod error;
mod search;
mod ui;

/// Browse, like, and edit a remote user directory as cards.
#[derive(Parser, Debug)]
#[command(name = "user-cards", version, about)]
struct Cli {
    /// Directory endpoint returning a JSON array of users
    #[arg(long, env = "USER_CARDS_ENDPOINT", default_value = api::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Append diagnostics to this file (without it, nothing is logged)
    #[arg(long, env = "USER_CARDS_LOG")]
    log_file: Option<PathBuf>,
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Route tracing output into the requested file. The TUI owns stdout, so
/// without a file the subscriber stays uninitialized and events are dropped.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file =
        std::fs::File::create(path).with_ctx(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.endpoint.starts_with("http://") && !cli.endpoint.starts_with("https://") {
        return Err(simple_error(format!(
            "endpoint must be an http(s) URL: {}",
            cli.endpoint
        )));
    }
    init_tracing(cli.log_file.as_ref())?;

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, cli.endpoint);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
