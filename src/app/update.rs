use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::api::{self, ApiClient};
use crate::app::{AppState, InputMode};
use crate::ui;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    client: ApiClient,
    mut app: AppState,
) -> Result<()> {
    let client = Arc::new(client);
    let (tx, rx) = mpsc::channel();

    loop {
        // One fetch per distinct query state; superseding changes bump the
        // generation so late responses get dropped in apply_fetch.
        if app.dirty {
            let generation = app.begin_fetch();
            api::spawn_fetch(Arc::clone(&client), app.query.clone(), generation, tx.clone());
        }

        terminal.draw(|f| {
            ui::render(f, &app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && !handle_key(&mut app, key.code, key.modifiers)
                {
                    break;
                }
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            app.apply_fetch(outcome);
        }
    }

    Ok(())
}

/// Handle one key press; returns `false` when the app should exit.
fn handle_key(app: &mut AppState, code: KeyCode, mods: KeyModifiers) -> bool {
    if app.show_help {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.show_help = false;
            }
            _ => {}
        }
        return true;
    }

    match app.input_mode {
        InputMode::Normal => match code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('/') => {
                app.search_input = app.query.search.clone();
                app.input_mode = InputMode::Search;
            }
            KeyCode::Char('g') => {
                app.query.set_gender(app.query.gender.cycle());
                app.mark_dirty();
            }
            KeyCode::Char('s') => {
                app.query.set_status(app.query.status.cycle());
                app.mark_dirty();
            }
            KeyCode::Char('p') => {
                app.query.set_page_size(app.query.per_page.cycle());
                app.mark_dirty();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if app.query.can_prev() {
                    app.query.prev_page();
                    app.mark_dirty();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if app.query.can_next(app.results.total_pages) {
                    app.query.next_page(app.results.total_pages);
                    app.mark_dirty();
                }
            }
            KeyCode::Char('r') if mods.contains(KeyModifiers::CONTROL) => {
                // Explicit reload clears a sticky error message.
                app.error = None;
                app.mark_dirty();
            }
            KeyCode::F(5) => {
                app.error = None;
                app.mark_dirty();
            }
            KeyCode::Char('r') => {
                app.query.reset();
                app.mark_dirty();
            }
            KeyCode::Char('?') => app.show_help = true,
            _ => {}
        },
        InputMode::Search => match code {
            KeyCode::Enter => {
                app.query.set_search(app.search_input.clone());
                app.input_mode = InputMode::Normal;
                app.mark_dirty();
            }
            KeyCode::Esc => {
                app.input_mode = InputMode::Normal;
                app.search_input.clear();
            }
            KeyCode::Backspace => {
                app.search_input.pop();
            }
            KeyCode::Char(c) => app.search_input.push(c),
            _ => {}
        },
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::app::query::{GenderFilter, PageSize, StatusFilter};

    fn mk_app() -> AppState {
        let mut app = AppState::new(PageSize::Five, Theme::dark());
        app.dirty = false;
        app.results.total_pages = 3;
        app
    }

    #[test]
    fn filter_keys_cycle_and_mark_dirty() {
        let mut app = mk_app();
        assert!(handle_key(&mut app, KeyCode::Char('g'), KeyModifiers::NONE));
        assert_eq!(app.query.gender, GenderFilter::Male);
        assert!(app.dirty);

        app.dirty = false;
        handle_key(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(app.query.status, StatusFilter::Active);
        assert!(app.dirty);

        app.dirty = false;
        handle_key(&mut app, KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(app.query.per_page, PageSize::Ten);
        assert!(app.dirty);
    }

    #[test]
    fn pagination_keys_respect_bounds() {
        let mut app = mk_app();
        // On page 1: Prev is a no-op and does not trigger a fetch.
        handle_key(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.query.page, 1);
        assert!(!app.dirty);

        handle_key(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.query.page, 2);
        assert!(app.dirty);

        app.dirty = false;
        app.query.page = 3;
        handle_key(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.query.page, 3);
        assert!(!app.dirty);
    }

    #[test]
    fn search_applies_on_enter_and_cancels_on_esc() {
        let mut app = mk_app();
        handle_key(&mut app, KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Search);

        for c in "ann".chars() {
            handle_key(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.query.search, "ann");
        assert_eq!(app.query.page, 1);
        assert!(app.dirty);

        handle_key(&mut app, KeyCode::Char('/'), KeyModifiers::NONE);
        handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Normal);
        // The applied query is untouched by a cancelled edit.
        assert_eq!(app.query.search, "ann");
    }

    #[test]
    fn quit_only_from_normal_mode() {
        let mut app = mk_app();
        app.input_mode = InputMode::Search;
        assert!(handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE));
        app.input_mode = InputMode::Normal;
        assert!(!handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE));
    }

    #[test]
    fn reload_clears_error_and_refetches() {
        let mut app = mk_app();
        app.error = Some("unexpected status: 502 Bad Gateway".into());
        handle_key(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(app.error.is_none());
        assert!(app.dirty);
    }
}
