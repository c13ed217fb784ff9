//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod import_prompt;
mod layout;
mod toast;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let content = layout::content_area(frame.area());

    match app.state.current_view {
        View::Form => form::draw(frame, content, app),
        View::ImportCsv => import_prompt::draw(frame, content, app),
    }

    layout::draw_status_bar(frame, app);
    toast::draw_toasts(frame, app);

    // Modal error dialog sits above everything else
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
