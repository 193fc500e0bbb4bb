//! Schedule tab - upcoming sessions with kind, instructor, and time

use crate::components::style::session_kind_style;
use crate::model::Dataset;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, dataset: &Dataset, scroll: u16) {
    let mut lines: Vec<Line> = Vec::new();

    for entry in &dataset.schedule {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{:8}] ", entry.kind.label()),
                session_kind_style(entry.kind),
            ),
            Span::styled(
                entry.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("           "),
            Span::styled(
                format!("{} {}", entry.date.format("%a %b %e"), entry.time),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  with {}", entry.instructor),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing scheduled",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Schedule ({}) ", dataset.schedule.len()))
                .title_style(Style::default().fg(Color::Cyan))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
