//! Configuration module for video-note.
//!
//! Handles loading application settings from a JSON config file.

mod settings;

pub use settings::Settings;
