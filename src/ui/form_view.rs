//! The contact form: labeled inputs laid out in a two-column grid

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_checkbox_group, draw_radio_group, draw_select, draw_text_field};
use crate::app::App;
use crate::state::{FocusTarget, TextField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single-line input
const INPUT_HEIGHT: u16 = 3;

/// Height of the address input (three text rows)
const ADDRESS_HEIGHT: u16 = 5;

/// Height of the skills group (wraps onto a second row on narrow screens)
const SKILLS_HEIGHT: u16 = 4;

/// Draw the form inside `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),   // Name | Email
            Constraint::Length(INPUT_HEIGHT),   // Date of birth
            Constraint::Length(ADDRESS_HEIGHT), // Address
            Constraint::Length(INPUT_HEIGHT),   // Phone | Gender
            Constraint::Length(INPUT_HEIGHT),   // Education | Work experience
            Constraint::Length(SKILLS_HEIGHT),  // Skills
            Constraint::Length(BUTTON_HEIGHT),  // Submit
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let (name_area, email_area) = halves(rows[0]);
    text(frame, name_area, app, TextField::Name);
    text(frame, email_area, app, TextField::Email);

    let (dob_area, _) = halves(rows[1]);
    text(frame, dob_area, app, TextField::Dob);

    text(frame, rows[2], app, TextField::Address);

    let (phone_area, gender_area) = halves(rows[3]);
    text(frame, phone_area, app, TextField::PhoneNumber);
    draw_radio_group(
        frame,
        gender_area,
        app.form.gender,
        app.focus.is_focused(FocusTarget::Gender),
    );

    let (education_area, experience_area) = halves(rows[4]);
    draw_select(
        frame,
        education_area,
        app.form.values.educational_level,
        app.focus.is_focused(FocusTarget::Education),
    );
    text(frame, experience_area, app, TextField::WorkExperience);

    draw_checkbox_group(
        frame,
        rows[5],
        |skill| app.form.has_skill(skill),
        app.focus.skill_cursor(),
        app.focus.is_focused(FocusTarget::Skills),
    );

    let button_area = Rect {
        width: rows[6].width.min(14),
        ..rows[6]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        app.focus.is_focused(FocusTarget::Submit),
        Color::Blue,
    );
}

fn text(frame: &mut Frame, area: Rect, app: &App, field: TextField) {
    draw_text_field(
        frame,
        area,
        field,
        app.form.values.get(field),
        app.focus.is_focused(FocusTarget::Text(field)),
    );
}

/// Split a row into two equal columns
fn halves(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (cols[0], cols[1])
}
