//! Progress tab - module gauges, grades, and attendance summary
//!
//! Module progress and status are independent authored fields; the gauge
//! shows the percent and the badge shows the status, so a mismatched pair
//! stays visible instead of being repaired here.

use crate::components::style::{grade_style, module_status_style};
use crate::model::Dataset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let mut constraints: Vec<Constraint> = dataset
        .modules
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(6));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (module, module_area) in dataset.modules.iter().zip(chunks.iter()) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {} ", module.name))
                    .title_style(Style::default().fg(Color::White))
                    .title_bottom(
                        Line::from(Span::styled(
                            format!(" {} ", module.status.label()),
                            module_status_style(module.status),
                        ))
                        .right_aligned(),
                    ),
            )
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(u16::from(module.progress.min(100)))
            .label(format!("{}%", module.progress));

        frame.render_widget(gauge, *module_area);
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[dataset.modules.len()]);

    render_grades(frame, bottom[0], dataset);
    render_attendance(frame, bottom[1], dataset);
}

fn render_grades(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let lines: Vec<Line> = dataset
        .grades
        .iter()
        .map(|g| {
            Line::from(vec![
                Span::styled(
                    format!("{:2} ", g.grade),
                    grade_style(&g.grade).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:24}", g.course), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{}/{}", g.score, g.max_score),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Grades ")
            .title_style(Style::default().fg(Color::Cyan))
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

fn render_attendance(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let attendance = &dataset.attendance;

    // The headline percentage is the authored figure; the raw counts are
    // shown alongside it as given.
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}%", attendance.percentage),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" attendance", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} present", attendance.present),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("  {} absent", attendance.absent),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("  of {} sessions", attendance.total),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Attendance ")
            .title_style(Style::default().fg(Color::Cyan))
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
