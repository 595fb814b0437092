//! About section with mission/team tabs

use crate::app::App;
use crate::content;
use crate::state::AboutTab;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", content::ABOUT_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .margin(1)
        .split(inner);

    draw_tab_bar(frame, chunks[0], app.state.about_tab);

    match app.state.about_tab {
        AboutTab::Mission => draw_mission(frame, chunks[2], app.state.scroll_offset),
        AboutTab::Team => draw_team(frame, chunks[2]),
    }
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, active: AboutTab) {
    let tab_span = |tab: AboutTab| {
        let style = if tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!("[ {} ]", tab.label()), style)
    };

    let line = Line::from(vec![
        tab_span(AboutTab::Mission),
        Span::raw("  "),
        tab_span(AboutTab::Team),
        Span::raw("   "),
        Span::styled("t: switch", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_mission(frame: &mut Frame, area: Rect, scroll_offset: usize) {
    let mut lines = Vec::new();
    for paragraph in content::ABOUT_MISSION {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }
    let mission = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .scroll((scroll_offset as u16, 0));
    frame.render_widget(mission, area);
}

fn draw_team(frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = content::TEAM
        .iter()
        .map(|_| Constraint::Length(20))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, member) in content::TEAM.iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("({})", member.initials),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                member.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(member.role, Style::default().fg(Color::Gray))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, columns[i]);
    }
}
