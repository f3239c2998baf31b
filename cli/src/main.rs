//! Udyam CLI - binary entry point and terminal session management.
//!
//! Bridges [`udyam_engine`] (wizard state) and [`udyam_tui`] (rendering)
//! with RAII-based terminal cleanup. The event loop runs on a fixed
//! cadence: drain lookup completions, render a frame, handle input.

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use udyam_engine::{App, UdyamConfig};
use udyam_tui::{draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    // Log to a file only: stdout/stderr would corrupt the TUI.
    if let Some((path, file)) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(env_filter).init();
    }
}

fn open_log_file() -> Option<(PathBuf, std::fs::File)> {
    let path = dirs::data_dir()?.join("udyam").join("udyam.log");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
    Some((path, file))
}

/// RAII guard for raw mode and the alternate screen.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(out))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match UdyamConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "config load failed, using defaults");
            UdyamConfig::default()
        }
    };

    let mut session = TerminalSession::new()?;
    let mut app = App::new(config.lookup_config());

    loop {
        app.poll_lookups();
        session.terminal.draw(|frame| draw(frame, &app))?;
        if handle_events(&mut app)? {
            break;
        }
    }

    Ok(())
}
