use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::config::LinksConfig;
use crate::link::{self, ResolvedLink};

/// Status messages clear after this long
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

type Opener = fn(&str) -> std::io::Result<()>;

fn open_in_browser(url: &str) -> std::io::Result<()> {
    open::that(url)
}

/// State of the terminal preview
pub struct App {
    pub links: Vec<ResolvedLink>,
    /// Entries in the links file that render nothing
    pub omitted: usize,
    pub selected: usize,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    pub should_quit: bool,
    opener: Opener,
}

impl App {
    pub fn new(config: &LinksConfig) -> Self {
        let links = link::resolve_all(&config.links, config.class.as_deref());
        let omitted = config.links.len() - links.len();

        Self {
            links,
            omitted,
            selected: 0,
            status_message: None,
            status_message_time: None,
            should_quit: false,
            opener: open_in_browser,
        }
    }

    pub fn selected_link(&self) -> Option<&ResolvedLink> {
        self.links.get(self.selected)
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            _ => {}
        }
    }

    fn move_down(&mut self) {
        if !self.links.is_empty() {
            self.selected = (self.selected + 1) % self.links.len();
        }
    }

    fn move_up(&mut self) {
        if !self.links.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.links.len() - 1);
        }
    }

    fn open_selected(&mut self) {
        let Some(href) = self.selected_link().map(|l| l.href.clone()) else {
            return;
        };

        match (self.opener)(&href) {
            Ok(()) => {
                tracing::info!(url = %href, "Opened link");
                self.set_status(format!("Opened {}", href));
            }
            Err(e) => {
                tracing::warn!(url = %href, "Failed to open link: {}", e);
                self.set_status(format!("Error: could not open {}: {}", href, e));
            }
        }
    }

    /// Clear expired status messages
    pub fn tick(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}
