//! Field rendering utilities for the contact form

use crate::state::forms::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field box. An annotated field gets a red border whether or
/// not it is focused, so every problem stays visible after submit.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let content = match field.kind {
        FieldKind::Choice => {
            // Choice fields cycle with arrow keys instead of taking input
            let arrows = if is_active {
                format!("◂ {display_value} ▸")
            } else {
                display_value
            };
            Paragraph::new(Line::from(Span::styled(arrows, style)))
        }
        FieldKind::Multiline => {
            let cursor = if is_active { "▌" } else { "" };
            let mut lines: Vec<Line> = display_value
                .lines()
                .map(|l| Line::from(l.to_string()))
                .collect();
            if is_active {
                if let Some(last) = lines.last_mut() {
                    last.spans
                        .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
                } else {
                    lines.push(Line::from(Span::styled(
                        cursor,
                        Style::default().fg(Color::Cyan),
                    )));
                }
            }
            Paragraph::new(lines)
        }
        _ => {
            let cursor = if is_active { "▌" } else { "" };
            let display_str = if display_value.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                display_value
            };
            Paragraph::new(Line::from(vec![
                Span::styled(display_str, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]))
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the one-line error annotation under a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
