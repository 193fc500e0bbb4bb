//! Component trait - the contract every screen and dialog implements
//!
//! A component turns key events into `Action`s, applies actions to its
//! own state, and draws itself. State flows one way: events become
//! actions, the root `App` routes actions, components mutate only
//! themselves.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// One-time setup that needs runtime information (the splash screen
    /// records its start time here)
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key event into an action without mutating state
    ///
    /// Components that don't take input (pure views) keep the default.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Apply an action, optionally returning a follow-up action for the
    /// event loop to process next
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`; must not change state
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
