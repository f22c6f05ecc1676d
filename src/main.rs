use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::game::GameEngine;
use connect_four::headless;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Read commands from stdin instead of running the interactive UI
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("validating command-line overrides")?;

    init_logging(&config.logging, cli.headless)?;
    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let mut engine = GameEngine::new(config.board.width, config.board.height)
        .context("creating game engine")?;
    info!(
        width = engine.width(),
        height = engine.height(),
        headless = cli.headless,
        "starting game"
    );

    if cli.headless {
        headless::run(&mut engine, io::stdin().lock(), io::stdout().lock())
            .context("running headless game")
    } else {
        run_tui(App::new(engine, config.ui.start_column))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Without a log file the interactive UI stays silent, since writing to the
/// terminal would tear the screen.
fn init_logging(config: &LoggingConfig, headless: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (&config.file, headless) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (None, true) => builder.with_writer(io::stderr).try_init(),
        (None, false) => return Ok(()),
    }
    .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
