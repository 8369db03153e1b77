//! Canonical shareable card state and the partial record produced by decode.

use std::fmt;
use std::str::FromStr;

/// Song id used when a token carries no (or an unusable) `song` field.
pub const DEFAULT_SONG: &str = "song1.mp3";

/// Color theme for the card. Only these two values are ever accepted from a
/// decoded token; anything else is treated as unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a share link carries: the card content plus presentation
/// choices. This is the single source of truth the codec reads and writes;
/// keeping it an explicit struct (instead of scattering reads across live UI
/// fields) is what makes the round-trip properties testable headlessly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareState {
    /// Recipient name
    pub to: String,
    /// Sender name
    pub from: String,
    /// Greeting body
    pub message: String,
    /// Color theme
    pub theme: Theme,
    /// Whether the snow animation is running
    pub snow_enabled: bool,
    /// Selected audio track id
    pub song: String,
}

impl Default for ShareState {
    fn default() -> Self {
        Self {
            to: String::new(),
            from: String::new(),
            message: String::new(),
            theme: Theme::Dark,
            snow_enabled: true,
            song: DEFAULT_SONG.to_string(),
        }
    }
}

/// Partial record extracted from a token. Every field is independently
/// optional: `None` means the token didn't carry the field, or carried it in
/// an unrecognized shape. Merging is a separate step so the fallback policy
/// lives in exactly one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareFields {
    pub to: Option<String>,
    pub from: Option<String>,
    pub message: Option<String>,
    pub theme: Option<Theme>,
    pub snow_enabled: Option<bool>,
    pub song: Option<String>,
}

impl ShareFields {
    /// True when the token carried nothing usable.
    pub fn is_empty(&self) -> bool {
        self.to.is_none()
            && self.from.is_none()
            && self.message.is_none()
            && self.theme.is_none()
            && self.snow_enabled.is_none()
            && self.song.is_none()
    }
}

impl ShareState {
    /// Fold a partial record into this state. Present fields overwrite
    /// unconditionally (an explicit empty string is a valid overwrite);
    /// absent or unrecognized fields leave the prior value untouched.
    pub fn merge(&mut self, fields: &ShareFields) {
        if let Some(to) = &fields.to {
            self.to = to.clone();
        }
        if let Some(from) = &fields.from {
            self.from = from.clone();
        }
        if let Some(message) = &fields.message {
            self.message = message.clone();
        }
        if let Some(theme) = fields.theme {
            self.theme = theme;
        }
        if let Some(snow) = fields.snow_enabled {
            self.snow_enabled = snow;
        }
        if let Some(song) = &fields.song {
            self.song = song.clone();
        }
    }

    /// Like [`merge`](Self::merge), but returns the result instead of
    /// mutating in place.
    pub fn merged(&self, fields: &ShareFields) -> ShareState {
        let mut next = self.clone();
        next.merge(fields);
        next
    }
}
