//! Data models for the student dashboard (profile, coursework, activity)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The student whose dashboard is being displayed
///
/// Immutable for the session; nothing in the UI edits profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    /// Avatar initials shown as a badge (terminals have no image avatars)
    pub avatar: String,
    pub join_date: NaiveDate,
}

/// Authored status of a course module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ModuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::NotStarted => "not started",
            ModuleStatus::InProgress => "in progress",
            ModuleStatus::Completed => "completed",
        }
    }
}

/// A named unit of course content with its own progress percentage
///
/// `status` and `progress` are both authored fields from the source data;
/// neither is derived from the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressModule {
    pub name: String,
    /// Percent complete, 0-100
    pub progress: u8,
    pub status: ModuleStatus,
}

/// Assignment completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    Pending,
    InProgress,
    Completed,
    NotStarted,
}

impl AssignmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::InProgress => "in progress",
            AssignmentStatus::Completed => "completed",
            AssignmentStatus::NotStarted => "not started",
        }
    }
}

/// Assignment priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A coding assignment or project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u32,
    pub title: String,
    /// Relative due label as authored ("2 days", "1 week")
    pub due: String,
    pub status: AssignmentStatus,
    /// Course reference; a free string, not a foreign key
    pub course: String,
    pub priority: Priority,
}

/// Kind of scheduled session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionKind {
    Lecture,
    Workshop,
    Meeting,
}

impl SessionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Lecture => "lecture",
            SessionKind::Workshop => "workshop",
            SessionKind::Meeting => "meeting",
        }
    }
}

/// An upcoming session on the student's schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: u32,
    pub title: String,
    pub time: String,
    pub date: NaiveDate,
    pub instructor: String,
    pub kind: SessionKind,
}

/// Attendance counts with the authored percentage
///
/// `percentage` is precomputed in the source data and stored verbatim; it is
/// never recalculated from the counts here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: f64,
}

/// A per-course grade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub course: String,
    pub grade: String,
    pub score: u32,
    pub max_score: u32,
}

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Assignment,
    Schedule,
    Grade,
    System,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Assignment => "assignment",
            NotificationKind::Schedule => "schedule",
            NotificationKind::Grade => "grade",
            NotificationKind::System => "system",
        }
    }
}

/// A notification shown in the overlay; the read flag is display-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    /// Relative time label as authored ("2 hours ago")
    pub time: String,
    pub kind: NotificationKind,
    pub read: bool,
}

/// A downloadable course resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub kind: String,
    /// Size label as authored ("2.4 MB")
    pub size: String,
    pub downloads: u32,
}

/// One of the headline cards at the top of the overview tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub badge: String,
    pub value: String,
    pub caption: String,
}

/// One (label, value) point on the performance trend chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: u64,
}
