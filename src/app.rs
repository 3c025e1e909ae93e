//! Application state and core logic

use crate::config::KioskConfig;
use crate::content::SECTIONS;
use crate::mailer::{EmailJsClient, Mailer, SendError, SendReceipt};
use crate::state::{
    nav_links, resolve_anchor, AppState, CarouselEvent, Debouncer, Form, FormKind, SendRequest,
    SmoothScroll, SubmissionResult, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Terminal width below which the navigation collapses into a menu
pub const COLLAPSE_WIDTH: u16 = 80;
/// Rows reserved for the navigation bar and the status bar
const CHROME_HEIGHT: u16 = 4;
/// Quiet period before a resize is acted on
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Outcome of a spawned send
#[derive(Debug)]
pub struct SendCompletion {
    pub form: FormKind,
    pub attempt: u64,
    pub result: Result<SendReceipt, SendError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Delivery for submitted forms
    mailer: Arc<dyn Mailer>,
    completions_tx: mpsc::UnboundedSender<SendCompletion>,
    completions_rx: mpsc::UnboundedReceiver<SendCompletion>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    resize: Debouncer,
}

impl App {
    /// Create an App delivering through the configured email service
    pub fn new(config: &KioskConfig) -> Result<Self> {
        let mailer = Arc::new(EmailJsClient::new(&config.emailjs)?);
        Self::with_mailer(config, mailer)
    }

    pub fn with_mailer(config: &KioskConfig, mailer: Arc<dyn Mailer>) -> Result<Self> {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: AppState::new(config, Instant::now())?,
            mailer,
            completions_tx,
            completions_rx,
            quit: false,
            terminal_size: None,
            resize: Debouncer::new(RESIZE_DEBOUNCE),
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the navigation is collapsed behind the menu toggle
    pub fn is_nav_collapsed(&self) -> bool {
        self.terminal_size.map(|(_, w)| w).unwrap_or(COLLAPSE_WIDTH) < COLLAPSE_WIDTH
    }

    /// Rows available to page content
    pub fn content_height(&self) -> u16 {
        self.terminal_size
            .map(|(h, _)| h)
            .unwrap_or(24)
            .saturating_sub(CHROME_HEIGHT)
    }

    /// Open the page named by a path, e.g. `contact.html`
    pub fn open_page(&mut self, path: &str) {
        match View::from_path(path) {
            Some(view) => self.navigate(view),
            None => tracing::warn!(path, "no page for path, staying on home"),
        }
    }

    /// Switch views; following a link always collapses the menu
    pub fn navigate(&mut self, view: View) {
        self.state.navbar.close_menu();
        self.state.current_view = view;
        if view == View::Home {
            let height = self.content_height();
            self.state.home.observe(height);
        }
    }

    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.terminal_size = Some((height, width));
        self.resize.call(now);
    }

    /// Advance timers and collect finished sends
    pub fn tick(&mut self, now: Instant) {
        self.drive_carousel(CarouselEvent::Tick(now));

        for form in self.state.forms_mut() {
            form.tick(now);
        }

        if let Some(scroll) = &self.state.home.smooth_scroll {
            let offset = scroll.position(now);
            let finished = scroll.is_finished(now);
            self.set_scroll(offset);
            if finished {
                self.state.home.smooth_scroll = None;
            }
        }

        if self.resize.poll(now) {
            let max = self.state.home.layout.max_scroll(self.content_height());
            if self.state.home.scroll_offset > max {
                self.set_scroll(max);
            } else {
                let height = self.content_height();
                self.state.home.observe(height);
            }
        }

        while let Ok(completion) = self.completions_rx.try_recv() {
            self.complete(completion, now);
        }
    }

    fn drive_carousel(&mut self, event: CarouselEvent) {
        match self.state.home.carousel.handle(event) {
            Ok(Some(view)) => tracing::trace!(active = ?view.active_index(), "carousel moved"),
            Ok(None) => {}
            Err(err) => tracing::debug!(%err, ?event, "carousel event ignored"),
        }
    }

    fn set_scroll(&mut self, offset: u16) {
        let height = self.content_height();
        let home = &mut self.state.home;
        home.scroll_offset = offset.min(home.layout.max_scroll(height));
        self.state.navbar.on_scroll(home.scroll_offset);
        home.observe(height);
    }

    fn scroll_by(&mut self, delta: i32) {
        self.state.home.smooth_scroll = None;
        let offset = (self.state.home.scroll_offset as i32 + delta).max(0);
        self.set_scroll(u16::try_from(offset).unwrap_or(u16::MAX));
    }

    /// Smooth-scroll the home page to an in-page anchor
    pub fn follow_anchor(&mut self, href: &str, now: Instant) {
        let Some(id) = resolve_anchor(href) else {
            return;
        };
        let Some(row) = self.state.home.layout.anchor_row(id) else {
            tracing::debug!(href, "anchor target not found");
            return;
        };
        self.state.navbar.close_menu();
        if self.state.current_view != View::Home {
            self.navigate(View::Home);
        }
        let from = self.state.home.scroll_offset;
        self.state.home.smooth_scroll = Some(SmoothScroll::new(from, row, now));
    }

    /// Submit the form in `kind` and start its send, if the pipeline asks for one
    pub fn submit(&mut self, kind: FormKind, now: Instant) {
        if let Some(request) = self.state.form_mut(kind).submit(now) {
            self.dispatch_send(request);
        }
    }

    /// Run the send on its own task so the UI keeps running while it is in flight
    fn dispatch_send(&self, request: SendRequest) {
        let mailer = Arc::clone(&self.mailer);
        let tx = self.completions_tx.clone();
        tracing::info!(
            form = ?request.form,
            attempt = request.attempt,
            template_id = %request.template_id,
            "sending form"
        );
        tokio::spawn(async move {
            let result = mailer
                .send(&request.service_id, &request.template_id, &request.record)
                .await;
            let completion = SendCompletion {
                form: request.form,
                attempt: request.attempt,
                result,
            };
            if tx.send(completion).is_err() {
                tracing::warn!("app closed before send completed");
            }
        });
    }

    fn complete(&mut self, completion: SendCompletion, now: Instant) {
        let result = match completion.result {
            Ok(receipt) => {
                tracing::info!(
                    form = ?completion.form,
                    attempt = completion.attempt,
                    status = receipt.status,
                    text = %receipt.text,
                    "send succeeded"
                );
                SubmissionResult::Success
            }
            Err(err) => {
                tracing::error!(
                    form = ?completion.form,
                    attempt = completion.attempt,
                    error = %err,
                    "send failed"
                );
                SubmissionResult::Failure(err.to_string())
            }
        };
        self.state.form_mut(completion.form).resolve(result, now);
    }

    /// Wait for the next send to finish and apply it
    #[cfg(test)]
    async fn wait_for_send(&mut self) {
        if let Some(completion) = self.completions_rx.recv().await {
            self.complete(completion, Instant::now());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let now = Instant::now();

        // Page switching works from anywhere
        if let KeyCode::F(n) = key.code {
            if let Some(view) = View::ALL.get(usize::from(n).wrapping_sub(1)) {
                self.navigate(*view);
            }
            return Ok(());
        }

        if self.state.navbar.is_menu_open() {
            self.handle_menu_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key, now),
            View::Admission | View::Contact | View::Enquiry => self.handle_form_key(key, now),
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let count = nav_links().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.menu_selection = (self.state.menu_selection + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.menu_selection = (self.state.menu_selection + 1) % count;
            }
            KeyCode::Enter => {
                let view = View::ALL[self.state.menu_selection % count];
                self.navigate(view);
            }
            KeyCode::Esc | KeyCode::Char('m') => self.state.navbar.close_menu(),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) {
        let page = i32::from(self.content_height().max(1));
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') if self.is_nav_collapsed() => {
                self.state.menu_selection = 0;
                self.state.navbar.toggle_menu();
            }
            KeyCode::Left | KeyCode::Char('h') => self.drive_carousel(CarouselEvent::Previous),
            KeyCode::Right | KeyCode::Char('l') => self.drive_carousel(CarouselEvent::Next),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.drive_carousel(CarouselEvent::GoTo(index));
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_by(-i32::from(u16::MAX)),
            KeyCode::Char('t') => self.follow_anchor("#testimonials", now),
            KeyCode::Char(c) => {
                // Section shortcuts use the first letter of the anchor id
                if let Some(section) = SECTIONS.iter().find(|s| s.id.starts_with(c)) {
                    self.follow_anchor(&format!("#{}", section.id), now);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(kind) = self.state.current_view.form() else {
            return;
        };
        let on_submit_row = self.state.form(kind).is_submit_row_active();
        let multiline = self.state.form(kind).is_active_field_multiline();

        match key.code {
            KeyCode::Esc => self.navigate(View::Home),
            KeyCode::Tab | KeyCode::Down => self.state.form_mut(kind).next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form_mut(kind).prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(kind, now);
            }
            // Other chords are not text input
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Enter if on_submit_row => self.submit(kind, now),
            KeyCode::Enter if multiline => {
                if let Some(field) = self.state.form_mut(kind).active_field_mut() {
                    field.push_char('\n');
                }
            }
            KeyCode::Enter => self.state.form_mut(kind).next_field(),
            KeyCode::Left => {
                if let Some(field) = self.state.form_mut(kind).active_field_mut() {
                    field.select_prev();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form_mut(kind).active_field_mut() {
                    field.select_next();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form_mut(kind).active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form_mut(kind).active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }
}
