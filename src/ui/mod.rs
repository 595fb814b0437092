//! UI module for rendering the TUI

mod about;
mod contact;
pub mod components;
mod forms;
mod home;
mod layout;
mod services;
mod technology;
mod testimonials;

use crate::app::App;
use crate::state::Section;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (nav_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.current_section {
        Section::Home => home::draw(frame, main_area, app),
        Section::Services => services::draw(frame, main_area, app),
        Section::Testimonials => testimonials::draw(frame, main_area, app),
        Section::Technology => technology::draw(frame, main_area, app),
        Section::About => about::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays last so they sit above the section content
    if app.state.menu_open {
        layout::draw_menu(frame, area, app);
    }
    if app.state.contact_open {
        contact::draw(frame, area, app);
    }
}
