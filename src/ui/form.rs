//! Contact form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, BUTTONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form with its actions sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Actions panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_actions_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Name
            Constraint::Length(3),                        // Email
            Constraint::Min(app.config.message_rows()),   // Message
        ])
        .margin(1)
        .split(area);

    let form_focused = !form.is_actions_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (idx, field) in FieldId::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field.label(),
            form.data.get(field),
            form.active_field_index == idx,
            field.is_multiline(),
        );
    }
}

/// Draw the actions panel sidebar
fn draw_actions_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let is_focused = form.is_actions_row_active();

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
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Length(BUTTON_HEIGHT), // Quit
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    for (idx, label) in BUTTONS.iter().enumerate() {
        let accent = match idx {
            0 => Color::Green,
            1 => Color::Yellow,
            _ => Color::Gray,
        };
        render_button(
            frame,
            button_chunks[idx],
            label,
            is_focused && form.selected_button == idx,
            Some(accent),
        );
    }
}
