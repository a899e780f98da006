//! Storage module for the user profile and configuration.

pub mod config;
pub mod profile;

pub use config::{AppConfig, ConfigError, Theme, TrackingSettings, UiSettings};
pub use profile::{get_profile, save_profile, Gender, ProfileInput, ProfileStore, UserProfile};
