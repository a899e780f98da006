//! UI screens for the application.

pub mod log;
pub mod plans;
pub mod profile;
pub mod progress;
pub mod summary;

pub use log::{LogAction, LogScreen};
pub use plans::PlansScreen;
pub use profile::{ProfileAction, ProfileScreen};
pub use progress::{ProgressAction, ProgressScreen};
pub use summary::{SummaryAction, SummaryScreen};

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Workout logging form
    #[default]
    Log,
    /// Totals per category
    Summary,
    /// Charts and weekly goal
    Progress,
    /// User info with BMI/BMR
    Profile,
    /// Workout and diet plans
    Plans,
}

impl Screen {
    /// All screens in tab order.
    pub const ALL: [Screen; 5] = [
        Screen::Log,
        Screen::Summary,
        Screen::Progress,
        Screen::Profile,
        Screen::Plans,
    ];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Log => "Log Workouts",
            Screen::Summary => "Summary",
            Screen::Progress => "Progress Tracker",
            Screen::Profile => "User Info",
            Screen::Plans => "Plans & Diet",
        }
    }
}

/// One-line feedback shown under a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}
