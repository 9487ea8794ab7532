use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::AppState;

/// Text of the single row shown when a fetch settled on an empty page.
pub const EMPTY_PLACEHOLDER: &str = "No users found.";

/// Whether the table should show the empty placeholder instead of data rows.
///
/// Suppressed while a fetch is in flight and while an error message is up,
/// so a slow or failed request does not flash "no users" over stale rows.
pub fn show_placeholder(app: &AppState) -> bool {
    !app.loading && app.error.is_none() && app.results.users.is_empty()
}

/// Render the users table with its fixed columns, one row per record.
pub fn render_users_table(f: &mut Frame, area: Rect, app: &AppState) {
    let rows: Vec<Row> = if show_placeholder(app) {
        vec![
            Row::new(vec![Cell::from(""), Cell::from(EMPTY_PLACEHOLDER)])
                .style(Style::default().fg(app.theme.muted)),
        ]
    } else {
        app.results
            .users
            .iter()
            .map(|u| {
                Row::new(vec![
                    Cell::from(u.id.to_string()),
                    Cell::from(u.name.clone()),
                    Cell::from(u.email.clone()),
                    Cell::from(u.gender.to_string()),
                    Cell::from(u.status.to_string()),
                ])
                .style(Style::default().fg(app.theme.text))
            })
            .collect()
    };

    let widths = [
        Constraint::Length(9),
        Constraint::Percentage(30),
        Constraint::Percentage(45),
        Constraint::Length(8),
        Constraint::Length(10),
    ];

    let header = Row::new(vec!["ID", "Name", "Email", "Gender", "Status"])
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Users")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
