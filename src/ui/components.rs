//! Shared UI components (status bar, body panels, modal helpers).
//!
//! Contains small building blocks reused by the card grid and the modals.
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;

/// Render the bottom status bar with mode and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        crate::app::InputMode::Normal => "NORMAL",
        crate::app::InputMode::Search => "SEARCH",
        crate::app::InputMode::Modal => "EDIT",
    };
    let query = if app.search_query.is_empty() {
        String::new()
    } else {
        format!("  query:[{}]", app.search_query)
    };
    let msg = format!(
        "mode: {mode}  shown:{}/{}  liked:{}{}",
        app.users.len(),
        app.users_all.len(),
        app.liked_count(),
        query
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

/// Render the centered bounce animation while the fetch is in flight.
pub fn render_loading(f: &mut Frame, area: Rect, app: &AppState) {
    let rect = centered_rect(40, 5, area);
    let phase = ((app.started_at.elapsed().as_millis() / 200) % 3) as usize;
    let mut dots = String::new();
    for i in 0..3 {
        if i > 0 {
            dots.push(' ');
        }
        dots.push(if i == phase { '●' } else { '∙' });
    }
    let lines = vec![
        Line::from(Span::styled(dots, Style::default().fg(app.theme.title))),
        Line::raw(""),
        Line::from(Span::styled(
            "Loading user directory",
            Style::default().fg(app.theme.text),
        )),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(p, rect);
}

/// Render the fetch-failure panel. Shown instead of the card grid so a dead
/// endpoint never leaves the screen stuck on the spinner.
pub fn render_load_error(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let width = 60u16.min(area.width.saturating_sub(4)).max(40);
    let height = 7u16.min(area.height).max(5);
    let rect = centered_rect(width, height, area);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "The directory was not loaded. Press q to quit.",
            Style::default().fg(app.theme.muted),
        )),
    ];
    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Directory unavailable")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(p, rect);
}

/// Render the empty-directory panel: the fetch succeeded with zero users.
pub fn render_empty_directory(f: &mut Frame, area: Rect, app: &AppState) {
    let rect = centered_rect(48, 5, area);
    let lines = vec![
        Line::from(Span::styled(
            "The directory is empty",
            Style::default().fg(app.theme.text),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "The endpoint returned no users. Press q to quit.",
            Style::default().fg(app.theme.muted),
        )),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(p, rect);
}

/// Render the help modal with usage information and key tips.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let width = 64u16.min(area.width.saturating_sub(4)).max(50);
    let height = 17u16.min(area.height.saturating_sub(2)).max(12);
    let rect = centered_rect(width, height, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Help",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.push(Line::from(vec![
        Span::raw("Move between cards: "),
        Span::styled(
            "Arrow keys / h j k l",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Jump a page: "),
        Span::styled(
            "PageUp / PageDown",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Search: "),
        Span::styled("/", Style::default().add_modifier(Modifier::ITALIC)),
        Span::raw(" to start; type and Enter to apply; Esc to cancel"),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Like the selected user: "),
        Span::styled("Space", Style::default().add_modifier(Modifier::ITALIC)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Edit the selected user: "),
        Span::styled("Enter / e", Style::default().add_modifier(Modifier::ITALIC)),
        Span::raw(" (Tab between fields, Enter saves, Esc cancels)"),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Delete the selected user: "),
        Span::styled("d / Delete", Style::default().add_modifier(Modifier::ITALIC)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Open this help: "),
        Span::styled("?", Style::default().add_modifier(Modifier::ITALIC)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Quit: "),
        Span::styled("q", Style::default().add_modifier(Modifier::ITALIC)),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Likes, edits, and deletions live in this session only; nothing",
        Style::default().fg(app.theme.muted),
    )));
    lines.push(Line::from(Span::styled(
        "is ever sent back to the endpoint.",
        Style::default().fg(app.theme.muted),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("Close help: "),
        Span::styled(
            "Esc / Enter",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]));

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
