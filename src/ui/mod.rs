//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form_view;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, body_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    form_view::draw(frame, body_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(toast) = &app.toast {
        components::render_toast(frame, &toast.message);
    }
}
