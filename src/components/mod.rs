//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod assignments;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod notifications_dialog;
pub mod overview;
pub mod progress;
pub mod quit_dialog;
pub mod resources;
pub mod schedule;
pub mod splash;
pub mod style;

pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use notifications_dialog::NotificationsDialog;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
