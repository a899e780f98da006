//! UI theme definitions.

use crate::workouts::types::Category;
use egui::{Color32, Visuals};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Colour for success messages.
    pub fn success(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::SUCCESS,
            Theme::Light => LightTheme::SUCCESS,
        }
    }

    /// Colour for error messages.
    pub fn error(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::ERROR,
            Theme::Light => LightTheme::ERROR,
        }
    }

    /// Colour for a BMI value: success inside the 18.5 to 25 band, error outside.
    pub fn bmi_color(&self, bmi: f64) -> Color32 {
        if (18.5..25.0).contains(&bmi) {
            self.success()
        } else {
            self.error()
        }
    }
}

impl From<crate::storage::config::Theme> for Theme {
    fn from(theme: crate::storage::config::Theme) -> Self {
        match theme {
            crate::storage::config::Theme::Dark => Theme::Dark,
            crate::storage::config::Theme::Light => Theme::Light,
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 36);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 48);
    /// Window background
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(66, 133, 244);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(52, 168, 83);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(245, 245, 248);
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 40);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    pub const ACCENT: Color32 = Color32::from_rgb(26, 115, 232);
    pub const SUCCESS: Color32 = Color32::from_rgb(24, 128, 56);
    pub const ERROR: Color32 = Color32::from_rgb(200, 50, 40);
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Chart and badge colour for a category.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::WarmUp => Color32::from_rgb(255, 167, 38),
        Category::Workout => Color32::from_rgb(66, 133, 244),
        Category::CoolDown => Color32::from_rgb(102, 187, 106),
    }
}
