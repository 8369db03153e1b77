//! Reusable UI components

mod confetti;
mod snowfall;
mod status_bar;
mod text_input;

pub use confetti::Confetti;
pub use snowfall::Snowfield;
pub use status_bar::StatusBar;
pub use text_input::TextInputState;
