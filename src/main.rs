//! user-browser binary entry point.
//!
//! Parses the command line, initializes logging and the terminal in raw
//! mode, runs the TUI event loop, and restores the terminal state on exit.

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use user_browser::api::ApiClient;
use user_browser::app::query::PageSize;
use user_browser::app::{self, AppState, Theme};
use user_browser::error::{Result, simple_error};

/// Browse, search and filter users from a remote REST collection endpoint.
#[derive(Debug, Parser)]
#[command(name = "user-browser", version, about)]
struct Cli {
    /// Collection endpoint returning the paginated JSON array of users.
    #[arg(long, default_value = "https://gorest.co.in/public/v2/users")]
    base_url: String,

    /// API key sent in the x-api-key request header.
    #[arg(long, env = "USER_BROWSER_API_KEY", default_value = "reqres-free-v1")]
    api_key: String,

    /// Initial rows per page (5, 10 or 20).
    #[arg(long, default_value_t = 5)]
    per_page: u64,

    /// Theme configuration file; created with defaults when missing.
    #[arg(long, default_value = "theme.conf")]
    theme: String,

    /// Append tracing output to this file (the terminal belongs to the TUI).
    #[arg(long, env = "USER_BROWSER_LOG")]
    log_file: Option<std::path::PathBuf>,
}

/// Set up `tracing` writing to the requested file; without a file the
/// subscriber is skipped entirely and log calls are no-ops.
fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
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

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref()).map_err(|e| format!("init logging: {}", e))?;

    let per_page = PageSize::from_value(cli.per_page).ok_or_else(|| {
        simple_error(format!(
            "invalid --per-page {} (expected 5, 10 or 20)",
            cli.per_page
        ))
    })?;
    let theme = Theme::load_or_init(&cli.theme);
    let client = ApiClient::new(cli.base_url, cli.api_key);
    let app = AppState::new(per_page, theme);

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, client, app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
