//! Terminal user interface

pub mod app;
pub mod audio;
pub mod clipboard;
pub mod components;
pub mod events;
pub mod theme;

pub use app::App;
