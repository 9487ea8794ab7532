pub mod components;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::AppState;

/// Render the whole screen from the current state. Pure projection: no
/// state is mutated here.
pub fn render(f: &mut Frame, app: &AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    components::render_header(f, root[0], app);
    components::render_filter_bar(f, root[1], app);
    users::render_users_table(f, root[2], app);
    components::render_pagination(f, root[3], app);
    components::render_status_bar(f, root[4], app);

    if app.show_help {
        components::render_help_modal(f, f.area(), app);
    }
}
