//! Form rendering module
//!
//! - `field_renderer`: single field rendering
//! - `notification`: slide-in submission outcome

mod field_renderer;
mod notification;

use super::components::{render_submit_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{FormState, SubmitButton};
use field_renderer::{draw_field, field_height};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::ops::Range;
use std::time::Instant;

/// Draw the current view's form
pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let Some(form) = app.state.current_form() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", form.kind().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    draw_fields(frame, inner, form);

    if let Some(current) = form.notification.current() {
        notification::draw(frame, inner, current, now);
    }
}

/// Draw the window of fields around the active one, then the submit row
fn draw_fields(frame: &mut Frame, area: Rect, form: &FormState) {
    let inner = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };

    let mut heights: Vec<u16> = form.fields.iter().map(field_height).collect();
    heights.push(BUTTON_HEIGHT);
    let window = visible_window(&heights, form.active_field_index, inner.height);

    let mut y = inner.y;
    for idx in window {
        let height = heights[idx].min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let rect = Rect {
            y,
            height,
            ..inner
        };
        match form.fields.get(idx) {
            Some(field) => draw_field(frame, rect, field, idx == form.active_field_index),
            None => draw_submit_row(frame, rect, &form.button, form.is_submit_row_active()),
        }
        y += height;
    }
}

fn draw_submit_row(frame: &mut Frame, area: Rect, button: &SubmitButton, is_selected: bool) {
    render_submit_button(frame, area, button, is_selected);
}

/// Rows `[start, end)` that fit into `available` rows and include `active`.
///
/// Starts from the top and only scrolls once the active row would fall
/// below the bottom edge.
fn visible_window(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    let fits = |range: Range<usize>| {
        heights[range].iter().map(|h| u32::from(*h)).sum::<u32>() <= u32::from(available)
    };

    let active = active.min(heights.len().saturating_sub(1));
    let mut start = 0;
    while start < active && !fits(start..active + 1) {
        start += 1;
    }

    let mut end = active + 1;
    while end < heights.len() && fits(start..end + 1) {
        end += 1;
    }
    start..end.min(heights.len())
}
