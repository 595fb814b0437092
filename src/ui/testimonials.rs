//! Social proof section

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let block = Block::default()
        .title(format!(" {} ", content::TESTIMONIALS_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = content::TESTIMONIALS
        .iter()
        .map(|_| Constraint::Length(5))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (i, testimonial) in content::TESTIMONIALS.iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", testimonial.quote),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                format!("— {}, {}", testimonial.name, testimonial.company),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, chunks[i]);
    }
}
