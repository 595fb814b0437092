//! Frame layout: nav bar, main area, status bar, and the menu overlay

use crate::app::App;
use crate::content;
use crate::state::MenuEntry;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Split the frame into nav bar, main content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the top navigation bar with the active section highlighted
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", content::COMPANY_NAME),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, entry) in MenuEntry::ALL.iter().enumerate() {
        let active = match entry {
            MenuEntry::Section(section) => {
                !app.state.contact_open && app.state.current_section == *section
            }
            MenuEntry::Contact => app.state.contact_open,
        };
        let style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{} {}", i + 1, entry.label()), style));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(bar, area);
}

/// Draw the collapsible navigation menu overlay
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let width = 24u16.min(area.width);
    let height = (MenuEntry::ALL.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: area.width.saturating_sub(width),
        y: area.y + 3,
        width,
        height,
    };

    frame.render_widget(Clear, menu_area);

    let lines: Vec<Line> = MenuEntry::ALL
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == app.state.menu_index;
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if selected { "▸ " } else { "  " };
            Line::from(Span::styled(format!("{marker}{}", entry.label()), style))
        })
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(menu, menu_area);
}

/// Draw the bottom status bar with context-sensitive key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.state.contact_open {
        "Tab: next field  ←/→: inquiry type  Ctrl+S: send  Esc: close"
    } else if app.state.menu_open {
        "↑/↓: move  Enter: open  Esc: close"
    } else {
        "1-6: sections  ←/→: browse  m: menu  c: contact  q: quit"
    };

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(content::CONTACT_EMAIL, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
