//! Contact form modal

use crate::app::App;
use crate::state::forms::{SubmissionState, SUBMIT_ROW};
use crate::state::NoticeKind;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::{draw_field, draw_field_error};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 30;

/// Draw the contact form as a centered overlay
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let modal_area = centered(area, MODAL_WIDTH, MODAL_HEIGHT);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let form = &app.state.contact_form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // inquiry type
            Constraint::Length(3), // name
            Constraint::Length(1), //   name error
            Constraint::Length(3), // email
            Constraint::Length(1), //   email error
            Constraint::Length(3), // subject
            Constraint::Length(5), // message
            Constraint::Length(1), //   message error
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // notice banner
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let active = form.active_field_index;

    draw_field(frame, chunks[0], &form.inquiry, active == 0, false);

    draw_field(
        frame,
        chunks[1],
        &form.name,
        active == 1,
        form.error_for("name").is_some(),
    );
    draw_field_error(frame, chunks[2], form.error_for("name"));

    draw_field(
        frame,
        chunks[3],
        &form.email,
        active == 2,
        form.error_for("email").is_some(),
    );
    draw_field_error(frame, chunks[4], form.error_for("email"));

    draw_field(frame, chunks[5], &form.subject, active == 3, false);

    draw_field(
        frame,
        chunks[6],
        &form.message,
        active == 4,
        form.error_for("message").is_some(),
    );
    draw_field_error(frame, chunks[7], form.error_for("message"));

    // Submit button reflects the submission lifecycle
    let sending = form.submission == SubmissionState::Sending;
    let label = if sending { "Sending..." } else { "Send Message" };
    let button_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[8]);
    render_button(
        frame,
        button_columns[1],
        label,
        active == SUBMIT_ROW,
        !sending,
    );

    if let Some(notice) = &app.state.notice {
        let (fg, bg) = match notice.kind {
            NoticeKind::Success => (Color::Black, Color::Green),
            NoticeKind::Error => (Color::White, Color::Red),
        };
        let banner = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", notice.text),
            Style::default().fg(fg).bg(bg),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[9]);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
