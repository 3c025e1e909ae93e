//! Home page rendering: hero, content sections and testimonials

use super::carousel;
use super::widgets::blit_rows;
use crate::app::App;
use crate::content::{
    Card, CARD_HEIGHT, CAROUSEL_HEIGHT, HERO_HEIGHT, INSTITUTE, SECTIONS,
    SECTION_HEADER_HEIGHT, TAGLINE, TESTIMONIALS_ID,
};
use crate::state::HomeState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

const TESTIMONIALS_TITLE: &str = "What Our Students Say";

/// Draw the home page scrolled to the current offset
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let home = &app.state.home;
    let page = render_page(home, area.width);
    blit_rows(frame, area, &page, home.scroll_offset);
}

/// Render the whole page, top to bottom, into an offscreen buffer
fn render_page(home: &HomeState, width: u16) -> Buffer {
    let layout = &home.layout;
    let mut page = Buffer::empty(Rect::new(0, 0, width, layout.total_height));

    draw_hero(&mut page, Rect::new(0, 0, width, HERO_HEIGHT));

    for (id, row) in &layout.anchors {
        draw_heading(
            &mut page,
            Rect::new(0, *row, width, SECTION_HEADER_HEIGHT),
            section_title(id),
        );
    }

    for (idx, (card, span)) in layout.cards.iter().enumerate() {
        let rect = Rect::new(0, span.top.max(0) as u16, width, CARD_HEIGHT);
        draw_card(&mut page, rect, card, home.reveal.is_revealed(idx));
    }

    carousel::draw(
        &mut page,
        Rect::new(0, layout.carousel_top, width, CAROUSEL_HEIGHT),
        &home.carousel,
    );

    page
}

fn section_title(id: &str) -> &'static str {
    if id == TESTIMONIALS_ID {
        return TESTIMONIALS_TITLE;
    }
    SECTIONS
        .iter()
        .find(|section| section.id == id)
        .map(|section| section.title)
        .unwrap_or_default()
}

fn draw_hero(buf: &mut Buffer, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            INSTITUTE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        Line::default(),
        Line::from(Span::styled(
            "F2 Apply now   F3 Contact us",
            Style::default().fg(Color::Cyan),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
}

fn draw_heading(buf: &mut Buffer, area: Rect, title: &str) {
    Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}

/// Cards stay dimmed until they have been scrolled into view once
fn draw_card(buf: &mut Buffer, area: Rect, card: &Card, revealed: bool) {
    let (title_style, body_style, border_style) = if revealed {
        (
            Style::default().add_modifier(Modifier::BOLD),
            Style::default(),
            Style::default().fg(Color::Gray),
        )
    } else {
        let dim = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
        (dim, dim, dim)
    };

    // Inset cards from the page edges
    let inset = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    };

    Paragraph::new(Line::from(Span::styled(card.body, body_style)))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", card.title), title_style))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .render(inset, buf);
}
