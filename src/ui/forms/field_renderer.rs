//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a single-line field
pub const FIELD_HEIGHT: u16 = 3;
/// Rows taken by a multiline field
pub const MULTILINE_FIELD_HEIGHT: u16 = 6;

pub fn field_height(field: &FormField) -> u16 {
    if field.spec.is_multiline() {
        MULTILINE_FIELD_HEIGHT
    } else {
        FIELD_HEIGHT
    }
}

/// Draw a form field. Fields flagged by the last failed validation get a
/// red border until the next submit.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if field.invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    // Selects change with arrows and take no text cursor
    let is_select = matches!(field.spec.kind, FieldKind::Select(_));
    let cursor = if is_active && !is_select { "▌" } else { "" };

    let content = if field.spec.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if display_value.ends_with('\n') || lines.is_empty() {
            lines.push(Line::default());
        }
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value.clone(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let marker = if field.spec.is_required() { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{marker} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
