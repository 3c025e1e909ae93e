//! Reusable UI widget helpers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that keeps the selected item visible.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Copy the rows of `page` starting at `scroll` into `area` of the frame.
///
/// Pages taller than the screen are drawn once into an offscreen buffer and
/// then windowed here, so widgets cut by the top edge clip cleanly.
pub fn blit_rows(frame: &mut Frame, area: Rect, page: &Buffer, scroll: u16) {
    let target = frame.buffer_mut();
    for row in 0..area.height {
        let Some(src_y) = scroll.checked_add(row) else {
            break;
        };
        if src_y >= page.area.bottom() {
            break;
        }
        for col in 0..area.width.min(page.area.width) {
            if let (Some(src), Some(dst)) = (
                page.cell((col, src_y)),
                target.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}
