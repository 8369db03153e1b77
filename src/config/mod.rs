//! Configuration loading and persistence

mod settings;

pub use settings::{save_theme_config, Config};
