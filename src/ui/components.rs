//! Shared UI components: header, filter bar, pagination, status bar and the
//! help overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, InputMode};

/// Render the top bar with the application title and key hints.
pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let p = Paragraph::new(
        "/: search  g: gender  s: status  p: page size  \u{2190}/\u{2192}: page  r: reset  Ctrl+r: reload  ?: help  q: quit",
    )
    .block(
        Block::default()
            .title("user-browser")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(
        Style::default()
            .fg(app.theme.header_fg)
            .bg(app.theme.header_bg),
    );
    f.render_widget(p, area);
}

/// Render the search and filter values currently applied to the query.
pub fn render_filter_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let value_style = Style::default().fg(app.theme.accent);
    let label_style = Style::default().fg(app.theme.text);

    let mut spans = vec![Span::styled("search: ", label_style)];
    match app.input_mode {
        InputMode::Search => {
            // Live edit buffer with a block cursor.
            spans.push(Span::styled(
                format!("{}\u{2588}", app.search_input),
                value_style.add_modifier(Modifier::BOLD),
            ));
        }
        InputMode::Normal => {
            let shown = if app.query.search.is_empty() {
                "-"
            } else {
                app.query.search.as_str()
            };
            spans.push(Span::styled(shown.to_string(), value_style));
        }
    }
    spans.push(Span::styled("   gender: ", label_style));
    spans.push(Span::styled(app.query.gender.label(), value_style));
    spans.push(Span::styled("   status: ", label_style));
    spans.push(Span::styled(app.query.status.label(), value_style));

    if app.loading {
        spans.push(Span::styled(
            "   Loading\u{2026}",
            Style::default().fg(app.theme.muted).add_modifier(Modifier::ITALIC),
        ));
    }

    let title = match app.input_mode {
        InputMode::Search => "Filters (editing search: Enter apply, Esc cancel)",
        InputMode::Normal => "Filters",
    };
    let p = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}

/// Render the Prev/Next controls, the page label and the page-size selector.
///
/// A zero total-page count is shown as 1; the boundary rules still use the
/// raw count, so Next stays disabled until a total is known.
pub fn render_pagination(f: &mut Frame, area: Rect, app: &AppState) {
    let total = app.results.total_pages;
    let enabled = Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(app.theme.muted);

    let prev_style = if app.query.can_prev() { enabled } else { disabled };
    let next_style = if app.query.can_next(total) { enabled } else { disabled };

    let spans = vec![
        Span::styled("\u{25c0} Prev", prev_style),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", app.query.page, total.max(1)),
            Style::default().fg(app.theme.accent),
        ),
        Span::raw("   "),
        Span::styled("Next \u{25b6}", next_style),
        Span::raw("   "),
        Span::styled(
            format!("{} / page", app.query.per_page.get()),
            Style::default().fg(app.theme.text),
        ),
    ];

    let p = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Pages")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}

/// Render the bottom status bar: mode, row count, fetch timing and any
/// inline error from the last failed fetch.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    if let Some(err) = &app.error {
        let p = Paragraph::new(format!("fetch failed: {err}")).style(
            Style::default()
                .fg(app.theme.error)
                .bg(app.theme.status_bg)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(p, area);
        return;
    }

    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
    };
    let timing = match app.last_fetch_ms {
        Some(ms) => format!("  last fetch: {ms} ms"),
        None => String::new(),
    };
    let msg = format!(
        "mode: {mode}  rows: {}  per page: {}{timing}",
        app.results.users.len(),
        app.query.per_page.get()
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the help overlay listing every keybinding.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let width = 56u16.min(area.width.saturating_sub(4)).max(40);
    let height = 15u16.min(area.height.saturating_sub(4)).max(10);
    let rect = centered_rect(width, height, area);

    let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::ITALIC));
    let lines = vec![
        Line::from(Span::styled("Help", Style::default().add_modifier(Modifier::BOLD))),
        Line::raw(""),
        Line::from(vec![Span::raw("Search by name: "), key("/"), Span::raw(" then type; Enter applies, Esc cancels")]),
        Line::from(vec![Span::raw("Cycle gender filter: "), key("g")]),
        Line::from(vec![Span::raw("Cycle status filter: "), key("s")]),
        Line::from(vec![Span::raw("Cycle page size (5/10/20): "), key("p")]),
        Line::from(vec![Span::raw("Previous / next page: "), key("\u{2190} \u{2192} / h l")]),
        Line::from(vec![Span::raw("Reset filters: "), key("r")]),
        Line::from(vec![Span::raw("Reload: "), key("Ctrl+r / F5")]),
        Line::from(vec![Span::raw("Quit: "), key("q")]),
        Line::raw(""),
        Line::from(vec![Span::raw("Close help: "), key("Esc / Enter")]),
    ];

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
