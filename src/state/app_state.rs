//! Application state definitions

use super::carousel::{Carousel, CarouselError};
use super::forms::{presets, FormConfigError, FormKind, FormState};
use super::navigation::{page_from_path, NavLink, Navbar};
use super::viewport::{RevealTracker, SmoothScroll, Span};
use crate::config::KioskConfig;
use crate::content::{HomeLayout, Testimonial, TESTIMONIALS};
use std::time::Instant;
use thiserror::Error;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Admission,
    Contact,
    Enquiry,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Admission, View::Contact, View::Enquiry];

    pub fn link(&self) -> NavLink {
        match self {
            Self::Home => NavLink {
                label: "Home",
                href: "index.html",
            },
            Self::Admission => NavLink {
                label: "Admission",
                href: "admission.html",
            },
            Self::Contact => NavLink {
                label: "Contact",
                href: "contact.html",
            },
            Self::Enquiry => NavLink {
                label: "Enquiry",
                href: "enquiry.html",
            },
        }
    }

    pub fn form(&self) -> Option<FormKind> {
        match self {
            Self::Home => None,
            Self::Admission => Some(FormKind::Admission),
            Self::Contact => Some(FormKind::Contact),
            Self::Enquiry => Some(FormKind::Enquiry),
        }
    }

    /// View for a page path, if any link points at it
    pub fn from_path(path: &str) -> Option<Self> {
        let page = page_from_path(path);
        Self::ALL.into_iter().find(|view| view.link().href == page)
    }
}

/// Navigation links in display order
pub fn nav_links() -> Vec<NavLink> {
    View::ALL.iter().map(View::link).collect()
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    #[error(transparent)]
    Form(#[from] FormConfigError),
}

/// Home page scroll position, reveal state and carousel
#[derive(Debug)]
pub struct HomeState {
    pub layout: HomeLayout,
    pub scroll_offset: u16,
    pub smooth_scroll: Option<SmoothScroll>,
    pub reveal: RevealTracker,
    pub carousel: Carousel<Testimonial>,
}

impl HomeState {
    pub fn new(now: Instant) -> Result<Self, CarouselError> {
        let layout = HomeLayout::compute();
        let reveal = RevealTracker::new(layout.cards.len());
        Ok(Self {
            layout,
            scroll_offset: 0,
            smooth_scroll: None,
            reveal,
            carousel: Carousel::new(TESTIMONIALS.to_vec(), now)?,
        })
    }

    /// Reveal cards visible in a viewport of `height` rows
    pub fn observe(&mut self, height: u16) -> Vec<usize> {
        let viewport = Span::new(self.scroll_offset as i32, height as i32);
        let revealed = self.reveal.observe(&self.layout.card_spans(), viewport);
        if !revealed.is_empty() {
            tracing::trace!(?revealed, "cards revealed");
        }
        revealed
    }
}

/// Whole application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub navbar: Navbar,
    /// Highlighted entry of the open menu
    pub menu_selection: usize,
    pub home: HomeState,
    pub admission: FormState,
    pub contact: FormState,
    pub enquiry: FormState,
}

impl AppState {
    pub fn new(config: &KioskConfig, now: Instant) -> Result<Self, StateError> {
        Ok(Self {
            current_view: View::default(),
            navbar: Navbar::default(),
            menu_selection: 0,
            home: HomeState::new(now)?,
            admission: FormState::new(FormKind::Admission, presets::admission(config)?),
            contact: FormState::new(FormKind::Contact, presets::contact(config)?),
            enquiry: FormState::new(FormKind::Enquiry, presets::enquiry()?),
        })
    }

    pub fn form(&self, kind: FormKind) -> &FormState {
        match kind {
            FormKind::Admission => &self.admission,
            FormKind::Contact => &self.contact,
            FormKind::Enquiry => &self.enquiry,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut FormState {
        match kind {
            FormKind::Admission => &mut self.admission,
            FormKind::Contact => &mut self.contact,
            FormKind::Enquiry => &mut self.enquiry,
        }
    }

    pub fn current_form(&self) -> Option<&FormState> {
        self.current_view.form().map(|kind| self.form(kind))
    }

    pub fn forms_mut(&mut self) -> [&mut FormState; 3] {
        [&mut self.admission, &mut self.contact, &mut self.enquiry]
    }
}
