//! Notifications overlay component
//!
//! Lists every notification with its category tag and relative time.
//! The read flag is rendered as-is; nothing here mutates the data.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::student::Notification;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Notifications overlay
#[derive(Default)]
pub struct NotificationsDialog {
    pub selected_index: usize,
}

impl NotificationsDialog {
    /// Move selection down, clamped to the list length
    pub fn select_next(&mut self, count: usize) {
        let max = count.saturating_sub(1);
        if self.selected_index < max {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Draw the overlay with the given notifications
    pub fn draw_with_notifications(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        notifications: &[Notification],
    ) -> Result<()> {
        let popup_area = centered_popup(area, 70, 14);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = notifications
            .iter()
            .map(|n| {
                let marker = if n.read { "  " } else { "● " };
                let message_style = if n.read {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("[{:10}] ", n.kind.label()),
                        crate::components::style::notification_kind_style(n.kind),
                    ),
                    Span::styled(n.message.clone(), message_style),
                    Span::styled(format!("  {}", n.time), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let unread = notifications.iter().filter(|n| !n.read).count();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(format!(" Notifications ({} unread) ", unread))
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        if !notifications.is_empty() {
            self.selected_index = self.selected_index.min(notifications.len() - 1);
            list_state.select(Some(self.selected_index));
        }

        let inner_area = Rect {
            height: popup_area.height.saturating_sub(2),
            ..popup_area
        };
        frame.render_stateful_widget(list, inner_area, &mut list_state);

        // Help bar along the bottom edge of the popup
        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " j/k ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Move  "),
            Span::styled(
                " Esc/n ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]))
        .alignment(ratatui::layout::Alignment::Center);

        let help_area = Rect {
            y: popup_area.y + popup_area.height.saturating_sub(2),
            height: 1,
            ..popup_area
        };
        frame.render_widget(help, help_area);

        Ok(())
    }
}

impl Component for NotificationsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('n') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing happens through draw_with_notifications
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_at_bounds() {
        let mut dialog = NotificationsDialog::default();
        dialog.select_previous();
        assert_eq!(dialog.selected_index, 0);

        dialog.select_next(3);
        dialog.select_next(3);
        dialog.select_next(3);
        assert_eq!(dialog.selected_index, 2);
    }
}
