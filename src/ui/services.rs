//! Value proposition section

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let block = Block::default()
        .title(format!(" {} ", content::SERVICES_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 2x2 card grid
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(inner);

    for (row_index, row) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (col_index, column) in columns.iter().enumerate() {
            if let Some(prop) = content::VALUE_PROPS.get(row_index * 2 + col_index) {
                draw_card(frame, *column, prop);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, prop: &content::ValueProp) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {}", prop.icon, prop.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(prop.blurb),
    ])
    .alignment(Alignment::Left)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}
