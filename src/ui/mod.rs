//! UI module for rendering the TUI

mod carousel;
mod components;
mod forms;
mod home;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let now = Instant::now();
    let (nav_area, main_area) = layout::create_layout(frame.area());

    layout::draw_navbar(frame, nav_area, app);

    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Admission | View::Contact | View::Enquiry => {
            forms::draw(frame, main_area, app, now)
        }
    }

    // Menu overlays the page content
    if app.state.navbar.is_menu_open() {
        layout::draw_menu(frame, main_area, app);
    }

    layout::draw_status_bar(frame, app);
}
