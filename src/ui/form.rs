//! Campaign form rendering

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{FieldId, ACTION_BUTTONS, IMPORT_BUTTON, SUBMIT_BUTTON};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the campaign form with its action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    draw_campaign_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields, each with a message row for validation errors
fn draw_campaign_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = !app.state.on_buttons_row();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Campaign ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    // One box plus one error row per field; the description gets the slack
    let mut constraints = Vec::with_capacity(FieldId::ALL.len() * 2);
    for field in FieldId::ALL {
        constraints.push(if field.is_multiline() {
            Constraint::Min(5)
        } else {
            Constraint::Length(3)
        });
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (i, field) in FieldId::ALL.into_iter().enumerate() {
        let error = app.state.validation.get(field);
        draw_field(
            frame,
            chunks[i * 2],
            field.label(),
            app.state.draft.field(field),
            app.state.active_field_id() == Some(field),
            field.is_multiline(),
            error,
        );
        draw_field_error(frame, chunks[i * 2 + 1], error);
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.on_buttons_row();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Import CSV
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        ACTION_BUTTONS[SUBMIT_BUTTON],
        is_focused && app.state.selected_button == SUBMIT_BUTTON,
        Color::Green,
    );

    render_action_button(
        frame,
        button_chunks[1],
        ACTION_BUTTONS[IMPORT_BUTTON],
        is_focused && app.state.selected_button == IMPORT_BUTTON,
        Color::Blue,
    );
}
