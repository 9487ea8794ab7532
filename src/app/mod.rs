//! Application state types and entry glue.
//!
//! Defines the structs that model the TUI state, the fetch bookkeeping
//! (generation counter, loading/error flags) and helpers to construct
//! defaults and run the application loop (re-exported as `run`).

pub mod query;
pub mod update;

use std::time::Instant;

use ratatui::style::Color;

use crate::api::{FetchOutcome, UserRecord};
use query::{PageSize, QueryState};

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub accent: Color,
    pub error: Color,
}

impl Theme {
    /// Dark default theme.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            accent: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),      // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),     // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),     // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),    // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44), // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe), // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4), // text
            accent: Color::Rgb(0xf9, 0xe2, 0xaf),    // yellow
            error: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall
    /// back to `mocha`.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            if key.is_empty() || val.is_empty() {
                continue;
            }
            let Ok(color) = val.parse::<Color>() else {
                continue;
            };
            match key {
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "accent" => theme.accent = color,
                "error" => theme.error = color,
                _ => {}
            }
        }

        Some(theme)
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# user-browser theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB, a named color, or 'reset'\n\n");

        let mut kv = |k: &str, v: Color| {
            let _ = writeln!(&mut buf, "{} = {}", k, v);
        };
        kv("text", self.text);
        kv("muted", self.muted);
        kv("title", self.title);
        kv("border", self.border);
        kv("header_bg", self.header_bg);
        kv("header_fg", self.header_fg);
        kv("status_bg", self.status_bg);
        kv("status_fg", self.status_fg);
        kv("accent", self.accent);
        kv("error", self.error);

        std::fs::write(path, buf)
    }

    /// Ensure a config file exists; if missing, write one with the default
    /// theme and return it. If present, load from it; on parse errors,
    /// return `mocha`.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        let _ = t.write_file(path);
        t
    }
}

/// The most recently fetched page of users plus the derived total-page
/// count. Replaced wholesale on every successful fetch, never patched.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    pub users: Vec<UserRecord>,
    pub total_pages: u64,
}

pub struct AppState {
    pub query: QueryState,
    pub results: ResultSet,
    /// True from the moment a fetch is initiated until it resolves.
    pub loading: bool,
    /// Inline message from the last failed fetch; previous rows stay visible.
    pub error: Option<String>,
    pub input_mode: InputMode,
    /// Search text being typed; applied to the query on Enter.
    pub search_input: String,
    pub show_help: bool,
    pub theme: Theme,
    /// Generation of the most recently initiated fetch.
    pub generation: u64,
    /// Set when the query changed and a fetch must be started.
    pub dirty: bool,
    fetch_started: Option<Instant>,
    pub last_fetch_ms: Option<u128>,
}

impl AppState {
    pub fn new(per_page: PageSize, theme: Theme) -> Self {
        Self {
            query: QueryState::new(per_page),
            results: ResultSet::default(),
            loading: false,
            error: None,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            show_help: false,
            theme,
            generation: 0,
            // Fetch the first page on the first tick.
            dirty: true,
            fetch_started: None,
            last_fetch_ms: None,
        }
    }

    /// Mark the query as changed; the event loop starts a fetch on the next
    /// tick.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Begin a fetch for the current query: bump the generation, assert the
    /// loading flag and return the generation to tag the request with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.dirty = false;
        self.generation += 1;
        self.loading = true;
        self.fetch_started = Some(Instant::now());
        self.generation
    }

    /// Apply a resolved fetch to the state.
    ///
    /// Outcomes whose generation no longer matches the current one come from
    /// a superseded query and are dropped, so a late response can never
    /// overwrite newer results.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation {
            tracing::debug!(
                got = outcome.generation,
                current = self.generation,
                "discarding stale fetch outcome"
            );
            return;
        }
        self.loading = false;
        self.last_fetch_ms = self.fetch_started.take().map(|t| t.elapsed().as_millis());

        match outcome.result {
            Ok(page) => {
                if let Some(total) = page.total {
                    self.results.total_pages =
                        crate::api::total_pages(total, self.query.per_page.get());
                }
                self.results.users = page.users;
                self.error = None;
                // The remote list may have shrunk under us; pull the page
                // back into range and refetch.
                if self.results.total_pages > 0 && self.query.page > self.results.total_pages {
                    self.query.clamp_page(self.results.total_pages);
                    self.dirty = true;
                }
            }
            Err(err) => {
                // Keep the last-good rows; only the message changes.
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
