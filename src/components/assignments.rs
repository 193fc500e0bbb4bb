//! Assignments tab - search bar plus the filtered assignment list

use crate::components::home::HomeComponent;
use crate::components::style::{priority_style, status_style};
use crate::model::Dataset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, home: &mut HomeComponent, dataset: &Dataset) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search_bar(frame, chunks[0], home);
    render_assignment_list(frame, chunks[1], home, dataset);
}

fn render_search_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let (content, border_color) = if home.search_mode {
        (
            Line::from(vec![
                Span::styled(home.search_query.clone(), Style::default().fg(Color::White)),
                Span::styled("_", Style::default().fg(Color::Cyan)),
            ]),
            Color::Cyan,
        )
    } else if home.search_query.is_empty() {
        (
            Line::from(Span::styled(
                "Press / to search by title",
                Style::default().fg(Color::DarkGray),
            )),
            Color::DarkGray,
        )
    } else {
        (
            Line::from(vec![
                Span::styled(home.search_query.clone(), Style::default().fg(Color::White)),
                Span::styled("  (Esc clears)", Style::default().fg(Color::DarkGray)),
            ]),
            Color::DarkGray,
        )
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search ")
            .title_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}

fn render_assignment_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    dataset: &Dataset,
) {
    let filtered = home.filtered_assignments(&dataset.assignments);

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|a| {
            let spans = vec![
                Span::styled(
                    format!("{:28}", a.title),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {:6}", a.priority.label()), priority_style(a.priority)),
                Span::styled(format!(" {:11}", a.status.label()), status_style(a.status)),
                Span::styled(format!("  due {:8}", a.due), Style::default().fg(Color::Yellow)),
                Span::styled(format!("  {}", a.course), Style::default().fg(Color::DarkGray)),
            ];
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if home.search_query.is_empty() {
        format!(" Assignments ({}) ", filtered.len())
    } else {
        format!(
            " Assignments ({}/{}) ",
            filtered.len(),
            dataset.assignments.len()
        )
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);
}
