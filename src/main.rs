//! pageview - a terminal page browser

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use pageview::app::{exit_code, run_app, Config};
use pageview::engine::{LocalEngine, PageEngine};

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    // Non-interactive dump mode
    if let Some(ref term) = config.dump {
        return run_dump_mode(&config, term);
    }

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Resolve one term and print the page to stdout (non-interactive)
fn run_dump_mode(config: &Config, term: &str) -> ExitCode {
    let mut engine = LocalEngine::new(config.root.clone(), config.show_hidden);
    engine.navigate(term);
    for line in &engine.page().lines {
        println!("{}", line);
    }
    ExitCode::from(exit_code::SUCCESS as u8)
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    let mouse_enabled = config.mouse_enabled;

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config);

    // Restore terminal
    terminal::disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result.map(|app_result| app_result.exit_code)
}
