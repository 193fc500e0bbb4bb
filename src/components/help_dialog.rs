//! Help dialog component
//!
//! Scrollable overlay listing every keyboard shortcut, grouped by concern.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Shortcut reference: (section, [(key, description)])
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tabs",
        &[
            ("Tab", "Next tab"),
            ("Shift+Tab", "Previous tab"),
            ("1-5", "Jump to tab (Overview..Resources)"),
        ],
    ),
    (
        "Navigation",
        &[
            ("j / ↓", "Next item / scroll down"),
            ("k / ↑", "Previous item / scroll up"),
            ("g", "Jump to first item"),
            ("G", "Jump to last item"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Search assignments by title"),
            ("Enter", "Confirm search"),
            ("Esc", "Cancel search / clear query"),
        ],
    ),
    (
        "Dialogs",
        &[
            ("n", "Open notifications"),
            ("?", "Show this help"),
            ("q", "Quit / Close dialog"),
        ],
    ),
    ("Data", &[("R", "Reload dataset from configured source")]),
];

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (section, shortcuts) in SHORTCUTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", section),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(section.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));

        for (key, description) in *shortcuts {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:12}", key),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_appears_in_help_content() {
        let lines = build_help_content();
        let text: Vec<String> = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect();
        for (section, _) in SHORTCUTS {
            assert!(text.iter().any(|l| l.contains(section)));
        }
    }

    #[test]
    fn test_scroll_keys_move_offset() {
        let mut dialog = HelpDialog::default();
        dialog
            .handle_key_event(KeyEvent::from(KeyCode::Char('j')))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 1);
        dialog
            .handle_key_event(KeyEvent::from(KeyCode::Char('k')))
            .unwrap();
        dialog
            .handle_key_event(KeyEvent::from(KeyCode::Char('k')))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 0);
    }
}
