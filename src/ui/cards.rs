use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::User;
use crate::app::{AppState, Theme};

/// Terminal cells per card, the grid unit.
pub const CARD_WIDTH: u16 = 36;
pub const CARD_HEIGHT: u16 = 7;

pub fn render_card_grid(f: &mut Frame, area: Rect, app: &mut AppState) {
    let cols = (area.width / CARD_WIDTH).max(1) as usize;
    let rows = (area.height / CARD_HEIGHT).max(1) as usize;
    app.grid_cols = cols;
    app.rows_per_page = rows;

    if app.users.is_empty() {
        let hint = if app.search_query.is_empty() {
            "No users to show"
        } else {
            "No users match the current search"
        };
        let p = Paragraph::new(hint).style(Style::default().fg(app.theme.muted));
        f.render_widget(p, area);
        return;
    }

    if app.selected_index >= app.users.len() {
        app.selected_index = app.users.len() - 1;
    }

    // Snap the window to whole card rows so the selection stays on screen.
    let selected_row = app.selected_index / cols;
    let first_row = (selected_row / rows) * rows;
    let first_index = first_row * cols;

    let theme = app.theme;
    let selected = app.selected_index;
    for (slot, idx) in (first_index..app.users.len()).take(cols * rows).enumerate() {
        let col = (slot % cols) as u16;
        let row = (slot / cols) as u16;
        let x_off = col * CARD_WIDTH;
        let y_off = row * CARD_HEIGHT;
        let rect = Rect {
            x: area.x + x_off,
            y: area.y + y_off,
            width: CARD_WIDTH.min(area.width.saturating_sub(x_off)),
            height: CARD_HEIGHT.min(area.height.saturating_sub(y_off)),
        };
        if rect.width < 4 || rect.height < 3 {
            continue;
        }
        render_card(f, rect, &theme, &app.users[idx], idx == selected);
    }
}

fn render_card(f: &mut Frame, rect: Rect, theme: &Theme, user: &User, selected: bool) {
    let border_style = if selected {
        Style::default()
            .fg(theme.highlight_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .title(user.name.clone())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let heart = if user.liked {
        Span::styled("♥ liked", Style::default().fg(Color::Red))
    } else {
        Span::styled("♡ like", Style::default().fg(theme.muted))
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                monogram(&user.name),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(user.avatar_url(), Style::default().fg(theme.muted)),
        ]),
        Line::from(vec![
            Span::styled("✉ ", Style::default().fg(theme.title)),
            Span::styled(user.email.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("☎ ", Style::default().fg(theme.title)),
            Span::styled(user.phone.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("⌂ ", Style::default().fg(theme.title)),
            Span::styled(user.website.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            heart,
            Span::styled("   e edit · d delete", Style::default().fg(theme.muted)),
        ]),
    ];
    let p = Paragraph::new(lines);
    f.render_widget(p, inner);
}

/// Initials drawn next to the avatar URL, from the first two words of the
/// name.
pub fn monogram(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_uppercase()
}
