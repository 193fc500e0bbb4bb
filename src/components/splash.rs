//! Splash screen component
//!
//! Shows the mortarboard logo briefly before the dashboard appears.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const LOGO: [&str; 8] = [
    "                 @@@@@@@@@@@@@@@@@@@@@@                 ",
    "          @@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@           ",
    "    @@@@@@@@@@@@                        @@@@@@@@@@@@    ",
    "          @@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@           ",
    "                 @@@@@@@@@@@@@@@@@@@@@@                 ",
    "                    ==              ==                  ",
    "                    ==              ==                  ",
    "                    ==================                  ",
];

/// Splash screen shown at startup
pub struct SplashComponent {
    start_time: Option<Instant>,
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Whether the splash has been on screen long enough to auto-advance
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Color the raw logo row by character class
    fn style_logo_row(row: &'static str, bg: Color) -> Line<'static> {
        let spans: Vec<Span> = row
            .chars()
            .map(|c| {
                let fg = match c {
                    '@' => Color::Cyan,
                    '=' => Color::Yellow,
                    _ => bg,
                };
                Span::styled(c.to_string(), Style::default().fg(fg).bg(bg))
            })
            .collect();
        Line::from(spans)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key skips the splash; 'q' quits outright
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // True black keeps the look consistent across terminal themes
        let bg = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let mut lines: Vec<Line> = LOGO
            .iter()
            .map(|row| Self::style_logo_row(row, bg))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "learner",
                Style::default()
                    .fg(Color::Cyan)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "-tui",
                Style::default()
                    .fg(Color::White)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "Your coding education dashboard",
            Style::default().fg(Color::DarkGray).bg(bg),
        )));

        let content_height = lines.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(content_height) / 2),
                Constraint::Length(content_height),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );

        Ok(())
    }
}
