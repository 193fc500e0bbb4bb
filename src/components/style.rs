//! Presentational style lookups
//!
//! Total mappings from a data enum (or authored grade letter) to a display
//! style. These carry no semantics beyond picking a visual treatment, and
//! unrecognized input degrades to a default style rather than failing.

use crate::model::student::{
    AssignmentStatus, ModuleStatus, NotificationKind, Priority, SessionKind,
};
use ratatui::style::{Color, Modifier, Style};

/// Default style for values nothing else matches
pub fn default_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Style for an assignment priority badge
pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    }
}

/// Style for an assignment status badge
pub fn status_style(status: AssignmentStatus) -> Style {
    match status {
        AssignmentStatus::Completed => Style::default().fg(Color::Green),
        AssignmentStatus::InProgress => Style::default().fg(Color::Cyan),
        AssignmentStatus::Pending => Style::default().fg(Color::Yellow),
        AssignmentStatus::NotStarted => Style::default().fg(Color::DarkGray),
    }
}

/// Style for a module status badge
pub fn module_status_style(status: ModuleStatus) -> Style {
    match status {
        ModuleStatus::Completed => Style::default().fg(Color::Green),
        ModuleStatus::InProgress => Style::default().fg(Color::Cyan),
        ModuleStatus::NotStarted => Style::default().fg(Color::DarkGray),
    }
}

/// Style for an authored letter grade
///
/// Grades are free strings in the data ("A", "B+", ...), so this keys off
/// the leading letter and falls back to the default style for anything else.
pub fn grade_style(grade: &str) -> Style {
    match grade.chars().next() {
        Some('A') => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Some('B') => Style::default().fg(Color::Cyan),
        Some('C') => Style::default().fg(Color::Yellow),
        Some('D') | Some('F') => Style::default().fg(Color::Red),
        _ => default_style(),
    }
}

/// Style for a schedule session kind badge
pub fn session_kind_style(kind: SessionKind) -> Style {
    match kind {
        SessionKind::Lecture => Style::default().fg(Color::Blue),
        SessionKind::Workshop => Style::default().fg(Color::Magenta),
        SessionKind::Meeting => Style::default().fg(Color::Yellow),
    }
}

/// Style for a notification category tag
pub fn notification_kind_style(kind: NotificationKind) -> Style {
    match kind {
        NotificationKind::Assignment => Style::default().fg(Color::Cyan),
        NotificationKind::Schedule => Style::default().fg(Color::Magenta),
        NotificationKind::Grade => Style::default().fg(Color::Green),
        NotificationKind::System => Style::default().fg(Color::DarkGray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_styles_are_distinct() {
        assert_ne!(priority_style(Priority::High), priority_style(Priority::Medium));
        assert_ne!(priority_style(Priority::Medium), priority_style(Priority::Low));
    }

    #[test]
    fn test_status_styles_are_distinct() {
        assert_ne!(
            status_style(AssignmentStatus::Completed),
            status_style(AssignmentStatus::Pending)
        );
        assert_ne!(
            status_style(AssignmentStatus::InProgress),
            status_style(AssignmentStatus::NotStarted)
        );
    }

    #[test]
    fn test_grade_style_falls_back_to_default() {
        assert_eq!(grade_style("Z"), default_style());
        assert_eq!(grade_style(""), default_style());
        assert_ne!(grade_style("A"), default_style());
    }

    #[test]
    fn test_grade_style_ignores_suffix() {
        assert_eq!(grade_style("B+"), grade_style("B-"));
        assert_eq!(grade_style("A"), grade_style("A-"));
    }
}
