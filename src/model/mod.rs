//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Dataset` - The in-memory sample data backing the dashboard
//! - `student` - Entity types (profile, assignments, grades, ...)
//! - `ModalStack` - Modal overlay management
//! - `Tab` / `AppMode` - Presentation state enums

pub mod dataset;
pub mod modal;
pub mod student;
pub mod ui;

// Re-export commonly used types
pub use dataset::Dataset;
pub use student::{
    Assignment, AssignmentStatus, AttendanceSummary, Grade, ModuleStatus, Notification,
    NotificationKind, Priority, ProgressModule, Resource, ScheduleEntry, SessionKind, StatCard,
    StudentProfile, TrendPoint,
};
pub use ui::Tab;
