//! Layout components (navbar, menu, status bar)

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::content::INSTITUTE;
use crate::state::{active_link, nav_links, PipelineState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Navbar height in rows (top border + links + bottom border)
pub const NAVBAR_HEIGHT: u16 = 3;

/// Split the screen into navbar and page content, reserving the last row
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT), // Navbar
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the navigation bar. It gains a heavy border once the home page is
/// scrolled past the sticky threshold.
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let scrolled = app.state.navbar.is_scrolled() && app.state.current_view == View::Home;
    let (border_type, border_style) = if scrolled {
        (BorderType::Thick, Style::default().fg(Color::Cyan))
    } else {
        (BorderType::Plain, Style::default().fg(Color::DarkGray))
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {INSTITUTE} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let links = nav_links();
    let active = active_link(&links, app.state.current_view.link().href);

    let line = if app.is_nav_collapsed() {
        let marker = if app.state.navbar.is_menu_open() {
            "✕"
        } else {
            "≡"
        };
        Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(Color::Cyan)),
            Span::styled("m:menu", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let mut spans = Vec::new();
        for (idx, link) in links.iter().enumerate() {
            let style = if Some(idx) == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(
                format!(" F{} ", idx + 1),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(link.label, style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the collapsed-navigation menu over the top of the content
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let links = nav_links();
    let active = active_link(&links, app.state.current_view.link().href);

    let items: Vec<ListItem> = links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let marker = if Some(idx) == active { "● " } else { "  " };
            ListItem::new(format!("{marker}{}", link.label))
        })
        .collect();

    let menu_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width.min(24),
        height: (links.len() as u16 + 2).min(area.height),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(Clear, menu_area);
    render_scrollable_list(frame, menu_area, list, app.state.menu_selection);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = if app.state.navbar.is_menu_open() {
        "j/k:nav  Enter:open  Esc:close"
    } else {
        get_view_hints(app.state.current_view)
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(form) = app.state.current_form() {
        if let PipelineState::Sending { attempt } = form.pipeline_state() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("sending (attempt {attempt})"),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Home => "j/k:scroll  h/l:slide  1-9:go to  a/c/f/t:jump  q:quit",
        View::Admission | View::Contact | View::Enquiry => {
            "Tab:next  ←/→:choose  Enter:submit  ^S:submit  Esc:home"
        }
    }
}
