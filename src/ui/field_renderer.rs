//! Field rendering utilities for forms

use crate::state::{EducationLevel, Gender, Skill, TextField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Draw a text input bound to a form value
pub fn draw_text_field(frame: &mut Frame, area: Rect, field: TextField, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if value.is_empty() {
        match field.placeholder() {
            Some(hint) if !is_active => vec![Line::from(Span::styled(hint, placeholder_style))],
            _ => vec![Line::default()],
        }
    } else if field.is_multiline() {
        // split('\n') keeps a trailing empty line so the cursor lands after a newline
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(value.to_string(), style))]
    };

    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(field_block(field.label(), is_active)),
        area,
    );
}

/// One selectable option, rendered as `marker label`
fn option_spans<'a>(marker: &'a str, label: &'a str, highlighted: bool) -> Vec<Span<'a>> {
    let style = if highlighted {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    vec![
        Span::styled(marker, style),
        Span::raw(" "),
        Span::styled(label, style),
        Span::raw("   "),
    ]
}

/// Draw the gender radio group
pub fn draw_radio_group(frame: &mut Frame, area: Rect, selected: Gender, is_active: bool) {
    let spans: Vec<Span> = Gender::ALL
        .iter()
        .flat_map(|g| {
            let checked = *g == selected;
            let marker = if checked { "(•)" } else { "( )" };
            option_spans(marker, g.label(), is_active && checked)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block("Gender", is_active)),
        area,
    );
}

/// Draw the education level select
pub fn draw_select(frame: &mut Frame, area: Rect, selected: EducationLevel, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let position = EducationLevel::ALL
        .iter()
        .position(|l| *l == selected)
        .map(|i| i + 1)
        .unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(if is_active { "◀ " } else { "  " }, style),
        Span::styled(selected.label(), style),
        Span::styled(if is_active { " ▶" } else { "" }, style),
        Span::styled(
            format!("  {position}/{}", EducationLevel::ALL.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(field_block("Education Level", is_active)),
        area,
    );
}

/// Draw the skills checkbox group
pub fn draw_checkbox_group(
    frame: &mut Frame,
    area: Rect,
    is_checked: impl Fn(Skill) -> bool,
    cursor: Skill,
    is_active: bool,
) {
    let spans: Vec<Span> = Skill::ALL
        .iter()
        .flat_map(|s| {
            let marker = if is_checked(*s) { "[x]" } else { "[ ]" };
            option_spans(marker, s.label(), is_active && *s == cursor)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(field_block("Skills", is_active)),
        area,
    );
}
