//! fitdash - Daily Fitness Dashboard
//!
//! A TUI for tracking daily workouts, nutrition, and training stats.
//!
//! Features:
//! - Daily calories, protein, and water at a glance
//! - Exercise catalog and canned workout plans
//! - Rest timer between sets
//! - Today's meals and monthly training stats
//!
//! Usage: fitdash

mod api;
mod app;
mod config;
mod data;
mod timer;
mod types;
mod ui;

use anyhow::{Context, Result};
use api::DataEvent;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("fitdash {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // The terminal belongs to the TUI, so diagnostics go to a file
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Run the application
    let result = run_app();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"fitdash - Daily Fitness Dashboard

USAGE:
    fitdash [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    1-4              Switch tabs
    j/k              Navigate up/down
    Tab              Switch panel (Workouts tab)
    /                Filter exercises (Workouts tab)
    s                Start rest timer
    c                End rest timer
    q                Quit

TABS:
    [1] Home         Daily calories, water, protein, today's workout
    [2] Workouts     Exercise catalog, plans, rest timer
    [3] Nutrition    Today's meals and macros
    [4] Stats        Weight trend, monthly progress, records

CONFIG:
    ~/.config/fitdash/config.toml

LOG:
    ~/.cache/fitdash/fitdash.log
"#
    );
}

/// Route tracing output to a log file, filtered by RUST_LOG
fn init_logging() -> Result<()> {
    let log_dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("fitdash");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("fitdash.log");
    let file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fitdash=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_app() -> Result<()> {
    // Load configuration
    let config = config::Config::load().context("Failed to load configuration")?;

    info!("fitdash {} starting", env!("CARGO_PKG_VERSION"));
    info!("endpoint: {}", config.api.base_url);

    // Kick off both fetches before the first draw; results arrive
    // on the channel in whatever order the network decides
    let data_rx = api::spawn_loaders(&config.api);

    // Create application state
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app, &data_rx);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    data_rx: &Receiver<DataEvent>,
) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Advance the rest timer
        app.update(Instant::now());

        // Apply completed fetches in arrival order
        while let Ok(data_event) = data_rx.try_recv() {
            app.apply_data_event(data_event);
        }

        // Poll for events with timeout (for timer updates)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }
}
