pub mod cards;
pub mod components;
pub mod editor;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, LoadState};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    let summary = match &app.load {
        LoadState::Loading => "loading".to_string(),
        LoadState::Loaded => format!("{} users", app.users_all.len()),
        LoadState::Failed(_) => "load failed".to_string(),
    };
    let prompt = match app.input_mode {
        crate::app::InputMode::Search => format!("  Search: {}", app.search_query),
        _ => String::new(),
    };
    let p = Paragraph::new(format!(
        "user-cards  {}  [{summary}]{prompt}  — /: search; Space: like; Enter: edit; d: delete; ?: help; q: quit",
        app.endpoint
    ))
    .block(
        Block::default()
            .title("user-cards")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, root[0]);

    match app.load.clone() {
        LoadState::Loading => components::render_loading(f, root[1], app),
        LoadState::Failed(message) => components::render_load_error(f, root[1], app, &message),
        LoadState::Loaded => {
            if app.users_all.is_empty() {
                components::render_empty_directory(f, root[1], app);
            } else {
                cards::render_card_grid(f, root[1], app);
            }
        }
    }

    components::render_status_bar(f, root[2], app);

    if app.editor.is_some() {
        editor::render_edit_modal(f, f.area(), app);
    }
    if app.show_help {
        components::render_help_modal(f, f.area(), app);
    }
}
