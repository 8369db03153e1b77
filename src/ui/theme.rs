//! Runtime-switchable color palette for the two card themes.
//!
//! Reads are frequent (every cell of every frame) and writes are rare
//! (user-initiated theme toggles), so the palette lives behind a global
//! `RwLock` with free accessor functions.

use std::sync::OnceLock;

use parking_lot::RwLock;
use ratatui::style::Color;

use crate::share::Theme;

/// Complete palette for one theme.
#[derive(Debug, Clone)]
pub struct Palette {
    pub is_light: bool,

    /// Main app background
    pub bg_base: Color,
    /// Panels and cards
    pub bg_surface: Color,

    /// Brightest text, for the title
    pub text_bright: Color,
    /// Main content text
    pub text_primary: Color,
    /// Labels and secondary info
    pub text_secondary: Color,
    /// Hints and placeholders
    pub text_muted: Color,

    /// Focus and primary actions
    pub accent_primary: Color,
    /// Success notices
    pub accent_success: Color,
    /// Over-limit counter
    pub accent_warning: Color,
    /// Failure notices
    pub accent_error: Color,

    /// Falling snow
    pub snow: Color,
    /// Confetti particle colors
    pub confetti: [Color; 5],
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            is_light: false,
            bg_base: Color::Rgb(11, 16, 32),
            bg_surface: Color::Rgb(19, 26, 48),
            text_bright: Color::Rgb(240, 244, 255),
            text_primary: Color::Rgb(214, 222, 240),
            text_secondary: Color::Rgb(158, 170, 200),
            text_muted: Color::Rgb(100, 110, 140),
            accent_primary: Color::Rgb(124, 196, 255),
            accent_success: Color::Rgb(147, 255, 138),
            accent_warning: Color::Rgb(255, 223, 110),
            accent_error: Color::Rgb(255, 110, 166),
            snow: Color::Rgb(235, 240, 250),
            confetti: [
                Color::Rgb(255, 223, 110),
                Color::Rgb(124, 240, 255),
                Color::Rgb(255, 110, 166),
                Color::Rgb(147, 255, 138),
                Color::Rgb(255, 255, 255),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            is_light: true,
            bg_base: Color::Rgb(244, 246, 252),
            bg_surface: Color::Rgb(255, 255, 255),
            text_bright: Color::Rgb(16, 20, 34),
            text_primary: Color::Rgb(34, 40, 60),
            text_secondary: Color::Rgb(90, 100, 130),
            text_muted: Color::Rgb(150, 158, 180),
            accent_primary: Color::Rgb(36, 110, 200),
            accent_success: Color::Rgb(30, 140, 60),
            accent_warning: Color::Rgb(180, 130, 20),
            accent_error: Color::Rgb(200, 50, 100),
            snow: Color::Rgb(150, 170, 210),
            confetti: [
                Color::Rgb(220, 170, 30),
                Color::Rgb(30, 160, 190),
                Color::Rgb(210, 60, 120),
                Color::Rgb(50, 160, 70),
                Color::Rgb(120, 130, 160),
            ],
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

static PALETTE: OnceLock<RwLock<Palette>> = OnceLock::new();

fn palette_lock() -> &'static RwLock<Palette> {
    PALETTE.get_or_init(|| RwLock::new(Palette::dark()))
}

/// Swap the active palette. Takes effect on the next render.
pub fn set_theme(theme: Theme) {
    *palette_lock().write() = Palette::for_theme(theme);
}

/// Read guard over the current palette.
pub fn current() -> parking_lot::RwLockReadGuard<'static, Palette> {
    palette_lock().read()
}

pub fn bg_base() -> Color {
    current().bg_base
}

pub fn bg_surface() -> Color {
    current().bg_surface
}

pub fn text_bright() -> Color {
    current().text_bright
}

pub fn text_primary() -> Color {
    current().text_primary
}

pub fn text_secondary() -> Color {
    current().text_secondary
}

pub fn text_muted() -> Color {
    current().text_muted
}

pub fn accent_primary() -> Color {
    current().accent_primary
}

pub fn accent_success() -> Color {
    current().accent_success
}

pub fn accent_warning() -> Color {
    current().accent_warning
}

pub fn accent_error() -> Color {
    current().accent_error
}

pub fn snow() -> Color {
    current().snow
}

/// Confetti color by particle index.
pub fn confetti(index: usize) -> Color {
    let palette = current();
    palette.confetti[index % palette.confetti.len()]
}
