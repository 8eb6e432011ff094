use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_gomoku::config::{AppConfig, LogConfig};
use tui_gomoku::input::Keymap;
use tui_gomoku::ui::{App, TerminalGuard};

/// Two-player five-in-a-row in the terminal.
#[derive(Parser)]
#[command(name = "tui_gomoku", version, about = "Two-player five-in-a-row in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override the log file location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(path) = cli.log_file {
        config.log.file = path;
    }

    init_logging(&config.log);

    let keymap = Keymap::from_config(&config.keys, config.quit_on_escape)
        .context("building key bindings")?;

    // Restores the terminal when dropped, including on the error path
    let mut guard = TerminalGuard::enter().context("setting up terminal")?;
    let mut app = App::new(keymap);
    app.run(guard.terminal_mut()).context("running game")?;
    drop(guard);

    info!("exiting");
    Ok(())
}

/// Send tracing output to the configured file. The TUI owns stdout, so if the
/// file cannot be opened logging is simply left off.
fn init_logging(log: &LogConfig) {
    let file = match File::create(&log.file) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: cannot open log file '{}': {err}; logging disabled",
                log.file.display()
            );
            return;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    if let Err(err) = installed {
        eprintln!("Warning: cannot install logger: {err}; logging disabled");
    }
}
