//! Main application state and egui integration.

use eframe::egui;

use aceest::reports::{self, ExportError};
use aceest::storage::config::{self, AppConfig};
use aceest::ui::screens::{
    LogAction, LogScreen, PlansScreen, ProfileAction, ProfileScreen, ProgressAction,
    ProgressScreen, Screen, StatusMessage, SummaryAction, SummaryScreen,
};
use aceest::ui::theme::Theme;
use aceest::AppContext;
use chrono::Local;

/// Main application state.
pub struct AceestApp {
    /// Workout log, profile and configuration
    context: AppContext,
    /// Current screen being displayed
    current_screen: Screen,
    /// Current theme
    theme: Theme,
    /// Log screen form state
    log_screen: LogScreen,
    /// Profile screen form state
    profile_screen: ProfileScreen,
    /// Status bar message
    status: String,
}

impl AceestApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        apply_font_scale(&cc.egui_ctx, config.ui.font_scale);

        tracing::info!(
            track_calories = config.tracking.track_calories,
            weekly_goal = config.tracking.weekly_calorie_goal,
            "Loaded configuration"
        );

        Self {
            context: AppContext::new(config),
            current_screen: Screen::default(),
            theme,
            log_screen: LogScreen::new(),
            profile_screen: ProfileScreen::new(),
            status: "Ready".to_string(),
        }
    }

    /// Navigate to a different screen.
    fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);
        self.current_screen = screen;
    }

    /// Toggle the theme between dark and light.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
    }

    fn handle_log_action(&mut self, action: LogAction) {
        match action {
            LogAction::Add(input) => match self.context.add_entry(&input) {
                Ok(entry) => {
                    let msg = format!(
                        "Added {} ({} min) to {}",
                        entry.exercise,
                        entry.duration_minutes,
                        input.category
                    );
                    self.status = msg.clone();
                    self.log_screen.set_status(StatusMessage::Success(msg));
                }
                Err(e) => self.log_screen.set_status(StatusMessage::Error(e.to_string())),
            },
        }
    }

    fn handle_profile_action(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::Save(input) => match self.context.save_profile(&input) {
                Ok(profile) => {
                    let msg = format!(
                        "Saved {} | BMI {:.1} | BMR {:.0} kcal/day",
                        profile.name,
                        profile.bmi_display(),
                        profile.bmr_display()
                    );
                    self.status = msg.clone();
                    self.profile_screen.set_status(StatusMessage::Success(msg));
                }
                Err(e) => self
                    .profile_screen
                    .set_status(StatusMessage::Error(e.to_string())),
            },
        }
    }

    fn export_csv(&mut self) {
        if self.context.log().is_empty() {
            self.status = ExportError::NoData.to_string();
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(reports::generate_csv_filename(Local::now()))
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        self.status = match reports::export_log_csv_to_file(self.context.log(), &path) {
            Ok(()) => format!("Exported log to {}", path.display()),
            Err(e) => {
                tracing::error!("CSV export failed: {}", e);
                format!("Export failed: {}", e)
            }
        };
    }

    fn export_summary_json(&mut self) {
        let file_name = format!("ACEest_Summary_{}.json", Local::now().format("%Y%m%d_%H%M%S"));
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        self.status = match reports::export_summary_json_to_file(self.context.log(), &path) {
            Ok(()) => format!("Exported summary to {}", path.display()),
            Err(e) => {
                tracing::error!("Summary export failed: {}", e);
                format!("Export failed: {}", e)
            }
        };
    }

    fn export_weekly_report(&mut self) {
        let today = Local::now().date_naive();
        let Some(profile) = self.context.profile() else {
            self.status = ExportError::NoProfile.to_string();
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(reports::generate_report_filename(profile, today))
            .add_filter("Text", &["txt"])
            .save_file()
        else {
            return;
        };

        let result = reports::export_weekly_report_to_file(
            self.context.profile(),
            self.context.log(),
            today,
            &path,
        );
        self.status = match result {
            Ok(()) => format!("Exported weekly report to {}", path.display()),
            Err(e) => {
                tracing::error!("Weekly report export failed: {}", e);
                format!("Export failed: {}", e)
            }
        };
    }
}

/// Multiply every text style size by `scale`.
fn apply_font_scale(ctx: &egui::Context, scale: f32) {
    if (scale - 1.0).abs() < f32::EPSILON {
        return;
    }
    let mut style = (*ctx.style()).clone();
    style.text_styles.iter_mut().for_each(|(_, font_id)| {
        font_id.size *= scale;
    });
    ctx.set_style(style);
}

impl eframe::App for AceestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel with navigation
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("ACEest Fitness & Gym");
                ui.separator();

                for screen in Screen::ALL {
                    if ui
                        .selectable_label(self.current_screen == screen, screen.title())
                        .clicked()
                    {
                        self.navigate(screen);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.theme {
                        Theme::Dark => "Light mode",
                        Theme::Light => "Dark mode",
                    };
                    if ui.button(theme_label).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                match self.context.profile() {
                    Some(profile) => ui.label(&profile.name),
                    None => ui.label("No profile"),
                };
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            Screen::Log => {
                if let Some(action) = self.log_screen.show(ui, self.context.log(), self.theme) {
                    self.handle_log_action(action);
                }
            }
            Screen::Summary => {
                let summary = self.context.summary();
                match SummaryScreen::show(ui, &summary) {
                    Some(SummaryAction::ExportCsv) => self.export_csv(),
                    Some(SummaryAction::ExportJson) => self.export_summary_json(),
                    None => {}
                }
            }
            Screen::Progress => {
                let totals = aceest::metrics::progress(self.context.log());
                let daily = aceest::metrics::daily_totals(self.context.log());
                let week = self.context.weekly_progress(Local::now().date_naive());
                if let Some(ProgressAction::ExportWeeklyReport) =
                    ProgressScreen::show(ui, &totals, &daily, &week)
                {
                    self.export_weekly_report();
                }
            }
            Screen::Profile => {
                if let Some(action) =
                    self.profile_screen
                        .show(ui, self.context.profile(), self.theme)
                {
                    self.handle_profile_action(action);
                }
            }
            Screen::Plans => PlansScreen::show(ui),
        });
    }
}
