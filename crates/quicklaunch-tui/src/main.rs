//! quicklaunch - keyboard-driven application launcher for the terminal.
//!
//! Loads the config and the application catalog, then either runs the
//! interactive palette or answers a one-shot `list`/`query` command.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use quicklaunch_core::catalog::DesktopCatalogSource;
use quicklaunch_core::config::{Config, Directories};
use quicklaunch_core::{Catalog, CommandDispatcher, PageSize, Palette, ShellLauncher};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod app;
mod cli;
mod colors;
mod render;
mod terminal;

use app::App;
use cli::{Cli, Commands};
use terminal::TerminalGuard;

/// Set up logging with file output. The UI owns the terminal, so logs go to the cache dir.
fn setup_logging(debug_flag: bool, log_dir: &Path) -> Option<WorkerGuard> {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("Cannot create log directory {}: {e}", log_dir.display());
        return None;
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("quicklaunch-{timestamp}.log");

    let symlink_path = log_dir.join("quicklaunch.log");
    let _ = std::fs::remove_file(&symlink_path);
    #[cfg(unix)]
    let _ = std::os::unix::fs::symlink(log_dir.join(&log_filename), &symlink_path);

    let file_appender = tracing_appender::rolling::never(log_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let dirs = Directories::new().context("Cannot resolve the home directory")?;

    let _log_guard = setup_logging(cli.debug, &dirs.cache);

    let config_path = cli.config.clone().unwrap_or_else(|| dirs.config_file.clone());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let page_size = match cli.page_size {
        Some(raw) => PageSize::new(raw)?,
        None => config.page_size()?,
    };

    let source = DesktopCatalogSource::from_config(&config.catalog, &config.launcher);
    let catalog = Catalog::load(&source).context("Failed to load application catalog")?;

    let launcher = ShellLauncher::new(&config.launcher.shell, tokio::runtime::Handle::current());
    let palette = Palette::new(catalog, page_size, CommandDispatcher::new(Box::new(launcher)));

    match cli.command {
        Some(Commands::List) => list_catalog(&palette),
        Some(Commands::Query { text }) => print_query(palette, &text),
        Some(Commands::Tui) | None => {
            run_tui(App::new(palette, config.behavior.close_on_launch)).await?;
        }
    }

    Ok(())
}

fn list_catalog(palette: &Palette) {
    for item in palette.catalog().iter() {
        println!("{}\t{}", item.key, item.exec);
    }
}

fn print_query(mut palette: Palette, text: &str) {
    palette.set_query(text);
    let view = palette.page_view();

    if view.is_empty() {
        println!("No applications match {text:?}");
        return;
    }

    for (row, item) in view.items.iter().enumerate() {
        let marker = if view.selected == Some(row) { ">" } else { " " };
        println!("{marker} {}\t{}", item.key, item.exec);
    }
    println!(
        "page {}/{} ({} matches)",
        view.page_index + 1,
        view.page_count,
        view.total_matches
    );
}

async fn run_tui(mut app: App) -> Result<()> {
    let _guard = TerminalGuard::enter().context("Failed to set up the terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    event_loop(&mut terminal, &mut app).await
}

// One input handler for the whole session; each key is handled to completion before the next
async fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|f| render::render(f, app))?;

        let Some(event_result) = event_stream.next().await else {
            break;
        };

        let event = match event_result {
            Ok(e) => e,
            Err(e) => {
                tracing::error!("Event stream error: {}", e);
                continue;
            }
        };

        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => k,
            _ => continue,
        };

        app.handle_key(key.code, key.modifiers);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
