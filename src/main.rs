// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

mod app;
mod cli;
mod logging;
mod ui;

use app::{App, AppState};
use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    logging::initialize_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze { query, markdown, compact }) => cli::run_analyze(&query, markdown, compact),
        Some(Commands::Guide) => {
            println!("{}", cli::format_help());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Tui) | None => {
            run_tui()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_tui() -> Result<()> {
    info!("Starting interactive interface.");
    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;

    let outcome = event_loop();

    // --- Restore Terminal --- (also when the loop failed)
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    outcome
}

fn event_loop() -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app)?;
        }
    }
    info!("Interactive interface closed.");
    Ok(())
}

fn handle_events(app: &mut App) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            if app.show_disclaimer {
                match key.code {
                    KeyCode::Enter => app.show_disclaimer = false,
                    KeyCode::Esc => app.quit(),
                    _ => {}
                }
                return Ok(());
            }
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code),
                AppState::Finished | AppState::Rejected(_) => handle_finished_input(app, key.code),
            }
        }
    }
    Ok(())
}

/// Typing mode. Every printable character goes into the query, so quitting uses Esc.
fn handle_idle_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => { app.input.pop(); },
        KeyCode::Enter => app.submit(),
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Left => app.scroll_logs_left(),
        KeyCode::Right => app.scroll_logs_right(),
        _ => {}
    }
}
