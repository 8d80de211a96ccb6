//! Interactive control panel application
//!
//! Wires the favorites drawer, the recent-folders list and the preview
//! pane together with the event loop. All remote state flows through the
//! panel state machines; the recent list is read once on startup and
//! updated through the cache on every folder open.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;

use crate::config::Config;
use crate::panel::{FavoritesPanel, PreviewPanel};
use crate::recent::{FileStore, KvStore, RecentEntry, RecentFolders};
use crate::remote::{BoardClient, HttpBoardClient};

use super::app::App;
use super::event::Event;
use super::overlay::OverlayController;
use super::theme::init_theme;
use super::ui;

/// Label exposed through the drawer's dialog role.
pub const DRAWER_LABEL: &str = "Navigation drawer";

/// Control panel state.
pub struct PanelApp<S: KvStore> {
    pub(super) favorites: FavoritesPanel,
    pub(super) preview: PreviewPanel,
    recent: RecentFolders<S>,
    pub(super) recent_entries: Vec<RecentEntry>,
    pub(super) drawer: OverlayController,
    pub(super) drawer_open: bool,
    pub(super) drawer_selected: usize,
    pub(super) recent_selected: usize,
    /// Frame area from the last render, used for mouse hit testing.
    pub(super) last_frame: Rect,
    should_quit: bool,
}

impl<S: KvStore> PanelApp<S> {
    /// Create the app, issue the initial fetches and load the persisted
    /// recent-folders snapshot.
    pub fn new(client: Arc<dyn BoardClient>, recent: RecentFolders<S>) -> Self {
        let recent_entries = recent.load();
        Self {
            favorites: FavoritesPanel::new(Arc::clone(&client)),
            preview: PreviewPanel::new(client),
            recent,
            recent_entries,
            drawer: OverlayController::new(DRAWER_LABEL),
            drawer_open: false,
            drawer_selected: 0,
            recent_selected: 0,
            last_frame: Rect::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply completed fetches.
    pub fn on_tick(&mut self) {
        self.favorites.poll();
        self.preview.poll();
    }

    /// Record a folder open and refresh the in-memory snapshot.
    pub fn open_folder(&mut self, path: &str) {
        self.recent_entries = self.recent.add(path);
        self.recent_selected = 0;
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        // The drawer gets first refusal on every key (Escape dismissal)
        if self.drawer.on_key(self.drawer_open, key).is_some() {
            self.drawer_open = false;
            return;
        }

        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.drawer_open {
            self.handle_drawer_key(key.code);
        } else {
            self.handle_main_key(key.code);
        }
    }

    /// Handle a mouse event (backdrop clicks dismiss the drawer).
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let content = OverlayController::content_area(self.last_frame, self.drawer_open);
        if self
            .drawer
            .on_mouse(self.drawer_open, mouse, content)
            .is_some()
        {
            self.drawer_open = false;
        }
    }

    fn handle_drawer_key(&mut self, code: KeyCode) {
        let count = self.favorites.favorites().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.drawer_selected = self.drawer_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 && self.drawer_selected + 1 < count {
                    self.drawer_selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(favorite) = self.favorites.favorites().get(self.drawer_selected) {
                    let path = favorite.path.clone();
                    self.open_folder(&path);
                    self.drawer_open = false;
                }
            }
            _ => {}
        }
    }

    fn handle_main_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('f') | KeyCode::Tab => {
                self.drawer_open = true;
                self.drawer_selected = 0;
            }
            KeyCode::Char('e') => self.preview.toggle(),
            KeyCode::Char('r') => {
                self.favorites.refresh();
                self.preview.refresh();
            }
            KeyCode::Char('x') => {
                self.recent.clear();
                self.recent_entries.clear();
                self.recent_selected = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.recent_selected = self.recent_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.recent_entries.is_empty()
                    && self.recent_selected + 1 < self.recent_entries.len()
                {
                    self.recent_selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(entry) = self.recent_entries.get(self.recent_selected) {
                    let path = entry.path.clone();
                    self.open_folder(&path);
                }
            }
            _ => {}
        }
    }
}

/// Launch the interactive control panel.
pub fn run(config: &Config) -> Result<()> {
    init_theme(&config.ui.theme);

    let client: Arc<dyn BoardClient> = Arc::new(HttpBoardClient::new(
        &config.server.base_url,
        config.fetch_timeout(),
    )?);
    let recent = RecentFolders::new(FileStore::open_default()?);
    let mut panel = PanelApp::new(client, recent);

    let mut app = App::new(config.tick_rate())?;
    while !app.should_quit() {
        app.draw(|frame| ui::render(frame, &mut panel))?;

        match app.next_event()? {
            Event::Tick => panel.on_tick(),
            Event::Key(key) => panel.handle_key(&key),
            Event::Mouse(mouse) => panel.handle_mouse(&mouse),
            Event::Resize(_, _) => {}
            Event::Quit => app.quit(),
        }

        if panel.should_quit() {
            app.quit();
        }
    }

    Ok(())
}
