//! Resources tab - downloadable course material as an aligned table

use crate::model::Dataset;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, dataset: &Dataset, scroll: u16) {
    let headers = ["Name", "Type", "Size", "Downloads"];
    let rows: Vec<[String; 4]> = dataset
        .resources
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.kind.clone(),
                r.size.clone(),
                r.downloads.to_string(),
            ]
        })
        .collect();

    let lines = build_table_lines(&headers, &rows);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Resources ({}) ", dataset.resources.len()))
                .title_style(Style::default().fg(Color::Cyan))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Build aligned table lines from headers and rows
fn build_table_lines(headers: &[&str; 4], rows: &[[String; 4]]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Calculate column widths from display width, not byte length
    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.width());
        }
    }

    let header_spans: Vec<Span> = headers
        .iter()
        .enumerate()
        .flat_map(|(i, h)| {
            vec![
                Span::styled(
                    format!("{:width$}", h, width = col_widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    let separator: String = col_widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    for row in rows {
        let row_spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                vec![
                    Span::styled(
                        format!("{:width$}", cell, width = col_widths[i]),
                        Style::default().fg(Color::White),
                    ),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lines_include_header_separator_and_rows() {
        let headers = ["Name", "Type", "Size", "Downloads"];
        let rows = vec![[
            "SQL Cheat Sheet".to_string(),
            "PDF".to_string(),
            "340 KB".to_string(),
            "215".to_string(),
        ]];
        let lines = build_table_lines(&headers, &rows);
        assert_eq!(lines.len(), 3);
    }
}
