//! Overview tab - headline stat cards, charts, and recent notifications
//!
//! The terminal translation of the dashboard landing page: four stat
//! cards, the weekly performance trend, and the per-course score
//! distribution.

use crate::components::style::notification_kind_style;
use crate::model::Dataset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph, Sparkline},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(area);

    render_stat_cards(frame, chunks[0], dataset);
    render_charts(frame, chunks[1], dataset);
    render_notification_preview(frame, chunks[2], dataset);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let count = dataset.stat_cards.len().max(1) as u32;
    let constraints: Vec<Constraint> = dataset
        .stat_cards
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, card_area) in dataset.stat_cards.iter().zip(card_areas.iter()) {
        let content = vec![Line::from(vec![
            Span::styled(
                format!("{} ", card.value),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(card.caption.clone(), Style::default().fg(Color::DarkGray)),
        ])];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", card.title))
            .title_style(Style::default().fg(Color::Cyan))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {} ", card.badge),
                    Style::default().fg(Color::Yellow),
                ))
                .right_aligned(),
            );

        frame.render_widget(Paragraph::new(content).block(block), *card_area);
    }
}

fn render_charts(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Weekly performance trend
    let trend: Vec<u64> = dataset.performance_trend.iter().map(|p| p.value).collect();
    let trend_title = match (dataset.performance_trend.first(), dataset.performance_trend.last()) {
        (Some(first), Some(last)) => {
            format!(" Performance ({} - {}) ", first.label, last.label)
        }
        _ => " Performance ".to_string(),
    };

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(trend_title)
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .data(&trend)
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(sparkline, chunks[0]);

    // Per-course scores
    let bars: Vec<(&str, u64)> = dataset
        .grades
        .iter()
        .map(|g| (g.grade.as_str(), g.score as u64))
        .collect();

    let bar_chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Grades by Course ")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .data(&bars)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(bar_chart, chunks[1]);
}

fn render_notification_preview(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let lines: Vec<Line> = dataset
        .notifications
        .iter()
        .take(3)
        .map(|n| {
            let marker = if n.read { "  " } else { "● " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("[{}] ", n.kind.label()),
                    notification_kind_style(n.kind),
                ),
                Span::styled(n.message.clone(), Style::default().fg(Color::White)),
                Span::styled(format!("  {}", n.time), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let title = format!(" Notifications ({} unread) ", dataset.unread_count());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}
