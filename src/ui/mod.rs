//! UI module for the egui desktop front end.

pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
