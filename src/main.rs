//! Custom alert - demo host for the modal alert overlay

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use custom_alert::{AlertContent, App, ButtonLayout, Config};

const DEFAULT_TITLE: &str = "Error";
const DEFAULT_MESSAGE: &str = "Please confirm that you're still open to session requests then you will find the call from new user.";

/// Modal alert overlay demo
#[derive(Parser, Debug)]
#[command(name = "custom-alert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Stack the buttons vertically
    #[arg(long)]
    vertical: bool,

    /// Show the success alert instead of an error
    #[arg(long, conflicts_with_all = ["title", "message"])]
    success: bool,

    /// Title of the error alert
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Message of the error alert
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    message: String,

    /// Config file to load instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print the default config file path
    ConfigPath,
}

impl Cli {
    fn content(&self) -> AlertContent {
        if self.success {
            AlertContent::Success
        } else {
            AlertContent::error_with_message(self.title.clone(), self.message.clone())
        }
    }

    const fn layout(&self) -> ButtonLayout {
        ButtonLayout::from_vertical(self.vertical)
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {e}");
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::ConfigPath) => {
            println!("{}", Config::default_path().display());
            Ok(())
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            let app = App::new(config, cli.content(), cli.layout());
            tracing::info!(layout = ?app.layout, "Starting alert demo");
            custom_alert::tui::run(app)
        }
    }
}

// Log to <temp>/custom-alert.log - tail with: tail -f /tmp/custom-alert.log
// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let log_path = custom_alert::paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);
    let Some(level) = log_level(debug_level) else {
        return;
    };

    let dir = log_path
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let file_name = log_path
        .file_name()
        .map_or_else(|| "custom-alert.log".into(), ToOwned::to_owned);
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

const fn log_level(debug_level: u8) -> Option<tracing::Level> {
    match debug_level {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        _ => Some(tracing::Level::DEBUG),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    explicit.map_or_else(Config::load, Config::load_from)
}
