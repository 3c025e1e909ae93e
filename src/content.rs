//! Static site content and the home page row layout

use crate::state::Span;

/// Rows taken by the hero banner
pub const HERO_HEIGHT: u16 = 7;
/// Rows taken by a section heading
pub const SECTION_HEADER_HEIGHT: u16 = 2;
/// Rows taken by a card
pub const CARD_HEIGHT: u16 = 5;
/// Rows taken by the testimonial carousel
pub const CAROUSEL_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub cards: &'static [Card],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const INSTITUTE: &str = "Amicus Institute of Law";
pub const TAGLINE: &str = "Shaping the advocates, judges and scholars of tomorrow";

pub const SECTIONS: &[Section] = &[
    Section {
        id: "about",
        title: "About Us",
        cards: &[
            Card {
                title: "Our Mission",
                body: "Rigorous legal education grounded in ethics, advocacy and public service.",
            },
            Card {
                title: "Faculty",
                body: "Practising advocates and senior academics teach every course.",
            },
        ],
    },
    Section {
        id: "courses",
        title: "Programmes",
        cards: &[
            Card {
                title: "BA LLB (5 Years)",
                body: "Integrated undergraduate programme combining humanities and law.",
            },
            Card {
                title: "LLB (3 Years)",
                body: "Professional law degree for graduates of any discipline.",
            },
            Card {
                title: "LLM (2 Years)",
                body: "Advanced study in constitutional, corporate and criminal law.",
            },
        ],
    },
    Section {
        id: "facilities",
        title: "Campus Facilities",
        cards: &[
            Card {
                title: "Moot Court",
                body: "A full courtroom for weekly moots and trial advocacy practice.",
            },
            Card {
                title: "Law Library",
                body: "Statutes, case reporters and online research databases.",
            },
        ],
    },
];

pub const TESTIMONIALS_ID: &str = "testimonials";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The moot court programme gave me the confidence to argue my first case.",
        author: "Sabina Thapa",
        role: "BA LLB, 2022",
    },
    Testimonial {
        quote: "Faculty who practise what they teach. Every lecture connected to real courtrooms.",
        author: "Rohan Shrestha",
        role: "LLB, 2021",
    },
    Testimonial {
        quote: "The library and research support made my LLM thesis possible.",
        author: "Anita Gurung",
        role: "LLM, 2023",
    },
];

/// Row positions of everything on the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    /// Anchor id and the row its heading starts on
    pub anchors: Vec<(&'static str, u16)>,
    /// Every card in page order
    pub cards: Vec<(Card, Span)>,
    pub carousel_top: u16,
    pub total_height: u16,
}

impl HomeLayout {
    pub fn compute() -> Self {
        let mut row = HERO_HEIGHT;
        let mut anchors = Vec::new();
        let mut cards = Vec::new();

        for section in SECTIONS {
            anchors.push((section.id, row));
            row += SECTION_HEADER_HEIGHT;
            for card in section.cards {
                cards.push((*card, Span::new(row as i32, CARD_HEIGHT as i32)));
                row += CARD_HEIGHT;
            }
        }

        anchors.push((TESTIMONIALS_ID, row));
        row += SECTION_HEADER_HEIGHT;
        let carousel_top = row;
        row += CAROUSEL_HEIGHT;

        Self {
            anchors,
            cards,
            carousel_top,
            total_height: row,
        }
    }

    pub fn anchor_row(&self, id: &str) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(anchor, _)| *anchor == id)
            .map(|(_, row)| *row)
    }

    pub fn card_spans(&self) -> Vec<Span> {
        self.cards.iter().map(|(_, span)| *span).collect()
    }

    /// Largest scroll offset that still fills a viewport of `height` rows
    pub fn max_scroll(&self, height: u16) -> u16 {
        self.total_height.saturating_sub(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_contiguous() {
        let layout = HomeLayout::compute();
        assert_eq!(layout.anchor_row("about"), Some(HERO_HEIGHT));
        let card_count: usize = SECTIONS.iter().map(|s| s.cards.len()).sum();
        assert_eq!(layout.cards.len(), card_count);
        assert_eq!(
            layout.total_height,
            layout.carousel_top + CAROUSEL_HEIGHT
        );
        assert_eq!(
            layout.anchor_row(TESTIMONIALS_ID),
            Some(layout.carousel_top - SECTION_HEADER_HEIGHT)
        );
    }

    #[test]
    fn test_unknown_anchor() {
        assert!(HomeLayout::compute().anchor_row("nowhere").is_none());
    }

    #[test]
    fn test_max_scroll() {
        let layout = HomeLayout::compute();
        assert_eq!(layout.max_scroll(layout.total_height + 10), 0);
        assert_eq!(layout.max_scroll(10), layout.total_height - 10);
    }
}
