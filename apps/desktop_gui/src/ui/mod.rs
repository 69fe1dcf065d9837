//! UI layer for the desktop GUI: app shell, form, scene cards, notifications.

pub mod app;

pub use app::StoryboardApp;
