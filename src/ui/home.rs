//! Hero section

use crate::app::App;
use crate::content;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let tagline = Paragraph::new(Line::from(Span::styled(
        content::HERO_TAGLINE,
        Style::default().fg(Color::Cyan),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[0]);

    let title = Paragraph::new(Line::from(Span::styled(
        content::HERO_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(title, chunks[2]);

    let description = Paragraph::new(content::HERO_DESCRIPTION)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[3]);

    // Two calls to action, mirroring the hero buttons
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(chunks[4]);
    render_button(
        frame,
        buttons[1],
        &format!("{} ⏎", content::HERO_CTA_PRIMARY),
        true,
        true,
    );
    render_button(
        frame,
        buttons[2],
        &format!("{} (c)", content::HERO_CTA_SECONDARY),
        false,
        true,
    );
}
