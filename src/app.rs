//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, HomeComponent, HomeRenderContext, NotificationsDialog,
    QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::model::Dataset;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::path::Path;

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// The in-memory dataset backing every panel
    pub dataset: Dataset,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current config (for the optional dataset path)
    pub config: Option<Config>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub notifications_dialog: NotificationsDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        let config = Config::load();
        let show_splash = config.as_ref().map(|c| c.show_splash).unwrap_or(true);

        let mut app = Self::with_dataset(Dataset::sample());
        app.mode = if show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };
        app.config = config;
        app.load_dataset();
        app
    }

    /// Create an App around a specific dataset (no config, no splash)
    pub fn with_dataset(dataset: Dataset) -> App {
        App {
            mode: AppMode::Running,
            dataset,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            config: None,
            splash: SplashComponent::new(),
            home: HomeComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            notifications_dialog: NotificationsDialog::default(),
        }
    }

    /// Load the dataset from the configured path, falling back to the
    /// built-in sample set
    fn load_dataset(&mut self) {
        let data_path = self
            .config
            .as_ref()
            .and_then(|c| c.data_path.clone());

        if let Some(path) = data_path {
            match Dataset::load(Path::new(&path)) {
                Ok(dataset) => {
                    self.dataset = dataset;
                    self.error = None;
                }
                Err(e) => {
                    self.dataset = Dataset::sample();
                    self.error = Some(format!("{:#}; using sample data", e));
                }
            }
        } else {
            self.dataset = Dataset::sample();
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top() {
                    self.handle_modal_key_event(modal, key)
                } else if self.home.search_mode {
                    self.handle_search_key_event(key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent or the open modal)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => {
                if self.modals.top() == Some(Modal::Notifications) {
                    self.notifications_dialog
                        .select_next(self.dataset.notifications.len());
                } else {
                    self.home.next(&self.dataset);
                }
            }
            Action::PrevItem => {
                if self.modals.top() == Some(Modal::Notifications) {
                    self.notifications_dialog.select_previous();
                } else {
                    self.home.previous(&self.dataset);
                }
            }
            Action::FirstItem => self.home.select_first(&self.dataset),
            Action::LastItem => self.home.select_last(&self.dataset),
            Action::NextTab => self.home.next_tab(),
            Action::PrevTab => self.home.previous_tab(),
            Action::SelectTab(tab) => self.home.select_tab(tab),

            // ─────────────────────────────────────────────────────────────────
            // Search (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.enter_search_mode(),
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::SearchInput(c) => self.home.search_input(c, &self.dataset),
            Action::SearchBackspace => self.home.search_backspace(&self.dataset),
            Action::ClearSearch => self.home.clear_search(&self.dataset),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenNotifications => {
                if self.modals.top() == Some(Modal::Notifications) {
                    self.modals.pop();
                } else {
                    self.notifications_dialog.selected_index = 0;
                    self.modals.push(Modal::Notifications);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Data
            // ─────────────────────────────────────────────────────────────────
            Action::ReloadData => {
                self.load_dataset();
                if self.error.is_none() {
                    self.status_message = Some("Dataset reloaded".to_string());
                }
                self.home.select_first(&self.dataset);
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = HomeRenderContext {
                    dataset: &self.dataset,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };

                draw_home_screen(frame, area, &mut self.home, &ctx)?;

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top() {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Notifications => self.notifications_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::Notifications => {
                self.notifications_dialog.draw_with_notifications(
                    frame,
                    area,
                    &self.dataset.notifications,
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ui::Tab;

    #[test]
    fn test_select_tab_action_updates_active_tab() {
        let mut app = App::with_dataset(Dataset::sample());
        app.update(Action::SelectTab(Tab::Progress)).unwrap();
        assert_eq!(app.home.active_tab, Tab::Progress);
    }

    #[test]
    fn test_force_quit_sets_flag() {
        let mut app = App::with_dataset(Dataset::sample());
        assert!(!app.should_quit);
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_notifications_modal_toggles() {
        let mut app = App::with_dataset(Dataset::sample());
        app.update(Action::OpenNotifications).unwrap();
        assert_eq!(app.modals.top(), Some(Modal::Notifications));
        app.update(Action::OpenNotifications).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_notification_selection_lives_on_dialog_and_resets_on_reopen() {
        let mut app = App::with_dataset(Dataset::sample());
        app.update(Action::OpenNotifications).unwrap();
        app.update(Action::NextItem).unwrap();
        assert_eq!(app.notifications_dialog.selected_index, 1);

        // Reopening starts from the top again
        app.update(Action::CloseModal).unwrap();
        app.update(Action::OpenNotifications).unwrap();
        assert_eq!(app.notifications_dialog.selected_index, 0);
    }

    #[test]
    fn test_search_actions_flow_through_home() {
        let mut app = App::with_dataset(Dataset::sample());
        app.update(Action::EnterSearchMode).unwrap();
        assert!(app.home.search_mode);
        assert_eq!(app.home.active_tab, Tab::Assignments);

        for c in "react".chars() {
            app.update(Action::SearchInput(c)).unwrap();
        }
        app.update(Action::ExitSearchMode).unwrap();
        assert!(!app.home.search_mode);

        let filtered = app.home.filtered_assignments(&app.dataset.assignments);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "React Hooks Implementation");
    }

    #[test]
    fn test_modal_keys_do_not_reach_home() {
        let mut app = App::with_dataset(Dataset::sample());
        app.update(Action::OpenQuitDialog).unwrap();

        // 'j' is a navigation key on the home screen but means nothing in
        // the quit dialog
        let key = KeyEvent::from(KeyCode::Char('j'));
        let action = app.handle_key_event(key).unwrap();
        assert_eq!(action, None);
    }
}
