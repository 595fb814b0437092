//! Future technologies section with flip cards

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", content::TECHNOLOGY_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = content::TECHNOLOGIES
        .iter()
        .map(|_| Constraint::Length(6))
        .chain([Constraint::Length(1), Constraint::Min(0)])
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (i, technology) in content::TECHNOLOGIES.iter().enumerate() {
        let selected = app.state.selected_card == i;
        let flipped = app.state.flipped.get(i).copied().unwrap_or(false);
        draw_card(frame, chunks[i], technology, selected, flipped);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        "↑/↓: select  Enter: flip  r: reset all",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, chunks[content::TECHNOLOGIES.len()]);
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    technology: &content::Technology,
    selected: bool,
    flipped: bool,
) {
    let (title, body) = if flipped {
        (technology.value_title, technology.value)
    } else {
        (technology.title, technology.front)
    };

    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_color = if flipped { Color::Green } else { Color::Cyan };
    let side = if flipped { " value " } else { " tech " };

    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(body),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_bottom(Line::from(side).right_aligned()),
    );
    frame.render_widget(card, area);
}
