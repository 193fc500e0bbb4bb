//! Modal stack for managing overlays
//!
//! Replaces multiple boolean flags (show_quit_confirm, show_help, etc.)
//! with an enum-based modal stack. The stack only records which overlay
//! is open; scroll and selection state live on the dialog components.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
    /// Notifications overlay
    Notifications,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get the top modal without removing it
    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        assert!(stack.top().is_some());

        stack.push(Modal::Help);

        let top = stack.pop();
        assert_eq!(top, Some(Modal::Help));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::QuitConfirm));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_only_top_modal_is_visible() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Notifications);
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(Modal::QuitConfirm));

        stack.pop();
        assert_eq!(stack.top(), Some(Modal::Notifications));
    }
}
