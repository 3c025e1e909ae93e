//! Prospectus TUI - terminal kiosk for an institute's prospectus
//!
//! Browses the home page with its testimonial carousel and submits the
//! admission, contact and enquiry forms through an email delivery service.

mod app;
mod config;
mod content;
mod mailer;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::KioskConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "prospectus-tui.log";

/// Log to a file under the data directory, since the terminal is in use
/// by the alternate screen. Falls back to stderr when no file can be opened.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "prospectus_tui=info".into());

    let log_file = KioskConfig::log_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        File::options()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = KioskConfig::load()?;
    let mut app = App::new(&config)?;
    if let Some(page) = std::env::args().nth(1) {
        app.open_page(&page);
    }
    tracing::info!(view = ?app.state.current_view, "starting kiosk");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "kiosk exited with an error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Whether anything on screen is animating and wants fast redraws
fn is_animating(app: &App) -> bool {
    app.state.home.smooth_scroll.is_some()
        || app
            .state
            .current_form()
            .is_some_and(|form| form.notification.current().is_some())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    app.on_resize(size.width, size.height, Instant::now());

    loop {
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll at ~60fps while animating, 100ms otherwise
        let poll_duration = if is_animating(app) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key)?;
                }
                Event::Resize(width, height) => {
                    app.on_resize(width, height, Instant::now());
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
