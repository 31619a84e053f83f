use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{AppState, EditField};
use crate::ui::components::centered_rect;

/// Render the edit modal over the current frame. A field failing the
/// required rule shows its error line once a save was attempted; the check
/// is recomputed from the live draft, so typing clears it.
pub fn render_edit_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(form) = &app.editor else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for field in EditField::ALL {
        let focused = field == form.focus;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(app.theme.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.title)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            label_style,
        )));
        let value = form.value(field);
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("    {value}{cursor}"),
            Style::default().fg(app.theme.text),
        )));
        if form.show_errors && value.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {} is required", field.label()),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        "Enter: save   Esc: cancel   Tab: next field",
        Style::default().fg(app.theme.muted),
    )));

    let width = 46u16.min(area.width.saturating_sub(4)).max(30);
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let rect = centered_rect(width, height, area);
    let p = Paragraph::new(lines).block(
        Block::default()
            .title("Edit User")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
