//! The dashboard dataset - everything the UI renders
//!
//! All entities are read-only sample data for the session. A dataset can
//! optionally be loaded from a JSON file; otherwise the built-in sample
//! set is used.

use super::student::{
    Assignment, AssignmentStatus, AttendanceSummary, Grade, ModuleStatus, Notification,
    NotificationKind, Priority, ProgressModule, Resource, ScheduleEntry, SessionKind, StatCard,
    StudentProfile, TrendPoint,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The complete in-memory dataset backing the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub profile: StudentProfile,
    pub stat_cards: Vec<StatCard>,
    pub modules: Vec<ProgressModule>,
    pub assignments: Vec<Assignment>,
    pub schedule: Vec<ScheduleEntry>,
    pub attendance: AttendanceSummary,
    pub grades: Vec<Grade>,
    pub notifications: Vec<Notification>,
    pub resources: Vec<Resource>,
    pub performance_trend: Vec<TrendPoint>,
}

impl Dataset {
    /// Load a dataset from a JSON file
    pub fn load(path: &Path) -> Result<Dataset> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
        let dataset: Dataset = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse dataset file: {}", path.display()))?;
        Ok(dataset)
    }

    /// Number of unread notifications
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// The built-in sample dataset
    pub fn sample() -> Dataset {
        Dataset {
            profile: StudentProfile {
                id: "STU-2024-0117".to_string(),
                name: "Alex Johnson".to_string(),
                email: "alex.johnson@learners.dev".to_string(),
                course: "Full-Stack Web Development".to_string(),
                avatar: "AJ".to_string(),
                join_date: date(2024, 1, 15),
            },
            stat_cards: vec![
                StatCard {
                    title: "Total Assignments".to_string(),
                    badge: "12".to_string(),
                    value: "8".to_string(),
                    caption: "Completed".to_string(),
                },
                StatCard {
                    title: "Practice Problems".to_string(),
                    badge: "50+".to_string(),
                    value: "23".to_string(),
                    caption: "Solved".to_string(),
                },
                StatCard {
                    title: "Current Streak".to_string(),
                    badge: "🔥".to_string(),
                    value: "7".to_string(),
                    caption: "Days".to_string(),
                },
                StatCard {
                    title: "Performance".to_string(),
                    badge: "85%".to_string(),
                    value: "A".to_string(),
                    caption: "Grade".to_string(),
                },
            ],
            modules: vec![
                ProgressModule {
                    name: "HTML & CSS Fundamentals".to_string(),
                    progress: 100,
                    status: ModuleStatus::Completed,
                },
                ProgressModule {
                    name: "JavaScript Essentials".to_string(),
                    progress: 85,
                    status: ModuleStatus::InProgress,
                },
                ProgressModule {
                    name: "React Framework".to_string(),
                    progress: 60,
                    status: ModuleStatus::InProgress,
                },
                ProgressModule {
                    name: "Node.js & APIs".to_string(),
                    progress: 20,
                    status: ModuleStatus::NotStarted,
                },
            ],
            assignments: vec![
                Assignment {
                    id: 1,
                    title: "React Hooks Implementation".to_string(),
                    due: "2 days".to_string(),
                    status: AssignmentStatus::InProgress,
                    course: "Frontend Development".to_string(),
                    priority: Priority::High,
                },
                Assignment {
                    id: 2,
                    title: "Data Structures Quiz".to_string(),
                    due: "1 week".to_string(),
                    status: AssignmentStatus::Pending,
                    course: "Computer Science".to_string(),
                    priority: Priority::Medium,
                },
                Assignment {
                    id: 3,
                    title: "API Integration Project".to_string(),
                    due: "2 weeks".to_string(),
                    status: AssignmentStatus::NotStarted,
                    course: "Backend Development".to_string(),
                    priority: Priority::High,
                },
                Assignment {
                    id: 4,
                    title: "Database Design Exercise".to_string(),
                    due: "3 weeks".to_string(),
                    status: AssignmentStatus::Completed,
                    course: "Database Systems".to_string(),
                    priority: Priority::Low,
                },
            ],
            schedule: vec![
                ScheduleEntry {
                    id: 1,
                    title: "JavaScript Deep Dive".to_string(),
                    time: "10:00 AM".to_string(),
                    date: date(2024, 3, 18),
                    instructor: "Sarah Chen".to_string(),
                    kind: SessionKind::Lecture,
                },
                ScheduleEntry {
                    id: 2,
                    title: "React Patterns Workshop".to_string(),
                    time: "2:00 PM".to_string(),
                    date: date(2024, 3, 19),
                    instructor: "Mike Rodriguez".to_string(),
                    kind: SessionKind::Workshop,
                },
                ScheduleEntry {
                    id: 3,
                    title: "Mentor Check-in".to_string(),
                    time: "4:30 PM".to_string(),
                    date: date(2024, 3, 20),
                    instructor: "Priya Patel".to_string(),
                    kind: SessionKind::Meeting,
                },
            ],
            // Percentage is authored in the source data; 36/40 would give
            // 90.0, the stored value stays as given.
            attendance: AttendanceSummary {
                total: 40,
                present: 36,
                absent: 4,
                percentage: 92.0,
            },
            grades: vec![
                Grade {
                    course: "Frontend Development".to_string(),
                    grade: "A".to_string(),
                    score: 92,
                    max_score: 100,
                },
                Grade {
                    course: "Computer Science".to_string(),
                    grade: "B+".to_string(),
                    score: 87,
                    max_score: 100,
                },
                Grade {
                    course: "Backend Development".to_string(),
                    grade: "A-".to_string(),
                    score: 90,
                    max_score: 100,
                },
                Grade {
                    course: "Database Systems".to_string(),
                    grade: "B".to_string(),
                    score: 84,
                    max_score: 100,
                },
            ],
            notifications: vec![
                Notification {
                    id: 1,
                    message: "React Hooks Implementation is due in 2 days".to_string(),
                    time: "2 hours ago".to_string(),
                    kind: NotificationKind::Assignment,
                    read: false,
                },
                Notification {
                    id: 2,
                    message: "Grade posted for Database Design Exercise".to_string(),
                    time: "5 hours ago".to_string(),
                    kind: NotificationKind::Grade,
                    read: false,
                },
                Notification {
                    id: 3,
                    message: "React Patterns Workshop moved to Room 204".to_string(),
                    time: "1 day ago".to_string(),
                    kind: NotificationKind::Schedule,
                    read: true,
                },
                Notification {
                    id: 4,
                    message: "Platform maintenance scheduled for Sunday".to_string(),
                    time: "3 days ago".to_string(),
                    kind: NotificationKind::System,
                    read: true,
                },
            ],
            resources: vec![
                Resource {
                    id: 1,
                    name: "React Patterns Handbook".to_string(),
                    kind: "PDF".to_string(),
                    size: "2.4 MB".to_string(),
                    downloads: 132,
                },
                Resource {
                    id: 2,
                    name: "API Design Slides".to_string(),
                    kind: "Slides".to_string(),
                    size: "5.1 MB".to_string(),
                    downloads: 98,
                },
                Resource {
                    id: 3,
                    name: "SQL Cheat Sheet".to_string(),
                    kind: "PDF".to_string(),
                    size: "340 KB".to_string(),
                    downloads: 215,
                },
                Resource {
                    id: 4,
                    name: "Testing Starter Kit".to_string(),
                    kind: "ZIP".to_string(),
                    size: "12.8 MB".to_string(),
                    downloads: 64,
                },
            ],
            performance_trend: vec![
                TrendPoint {
                    label: "W1".to_string(),
                    value: 68,
                },
                TrendPoint {
                    label: "W2".to_string(),
                    value: 72,
                },
                TrendPoint {
                    label: "W3".to_string(),
                    value: 70,
                },
                TrendPoint {
                    label: "W4".to_string(),
                    value: 78,
                },
                TrendPoint {
                    label: "W5".to_string(),
                    value: 82,
                },
                TrendPoint {
                    label: "W6".to_string(),
                    value: 80,
                },
                TrendPoint {
                    label: "W7".to_string(),
                    value: 85,
                },
            ],
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // The sample dates are compile-time constants and always valid
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_four_assignments() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.assignments.len(), 4);
    }

    #[test]
    fn test_attendance_percentage_is_stored_not_derived() {
        let dataset = Dataset::sample();
        let derived =
            dataset.attendance.present as f64 / dataset.attendance.total as f64 * 100.0;
        // The authored value intentionally disagrees with the counts
        assert_eq!(dataset.attendance.percentage, 92.0);
        assert_ne!(dataset.attendance.percentage, derived);
    }

    #[test]
    fn test_unread_count() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.unread_count(), 2);
    }

    #[test]
    fn test_dataset_json_round_trip() {
        let dataset = Dataset::sample();
        let json = serde_json::to_string(&dataset).unwrap();
        let parsed: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.assignments.len(), dataset.assignments.len());
        assert_eq!(parsed.profile.name, dataset.profile.name);
        assert_eq!(parsed.attendance.percentage, dataset.attendance.percentage);
    }

    #[test]
    fn test_enum_wire_labels_are_kebab_case() {
        let json = serde_json::to_string(&AssignmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let json = serde_json::to_string(&ModuleStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = Dataset::load(Path::new("/nonexistent/dataset.json"));
        assert!(result.is_err());
    }
}
