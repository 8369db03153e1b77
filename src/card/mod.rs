//! The live card: one coherent source of truth for everything the user edits,
//! bridged to the shareable URL after every mutation.

pub mod greeting;
pub mod songs;

use crate::share::{self, ShareFields, ShareState, Theme};

/// Canonical in-memory card state plus the session-only bits (music, reveal)
/// that never travel in a link.
///
/// Every state-affecting setter regenerates the share link eagerly; the
/// refresh is cheap and idempotent, so there is no batching or debouncing.
#[derive(Debug, Clone)]
pub struct Card {
    /// Recipient field, raw as typed
    to: String,
    /// Sender field, raw as typed
    from: String,
    /// Message field, raw as typed
    message: String,
    theme: Theme,
    snow_enabled: bool,
    song: String,
    /// Music toggle; session-only
    music_on: bool,
    /// One-shot reveal flag; session-only
    revealed: bool,
    base_url: String,
    share_link: String,
}

impl Card {
    pub fn new(base_url: impl Into<String>, theme: Theme) -> Self {
        let defaults = ShareState::default();
        let mut card = Self {
            to: defaults.to,
            from: defaults.from,
            message: defaults.message,
            theme,
            snow_enabled: defaults.snow_enabled,
            song: defaults.song,
            music_on: false,
            revealed: false,
            base_url: base_url.into(),
            share_link: String::new(),
        };
        card.refresh_link();
        card
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from_name(&self) -> &str {
        &self.from
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn snow_enabled(&self) -> bool {
        self.snow_enabled
    }

    pub fn song(&self) -> &str {
        &self.song
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// The always-current shareable URL.
    pub fn share_link(&self) -> &str {
        &self.share_link
    }

    /// Message length in characters, for the `n/limit` counter.
    pub fn message_chars(&self) -> usize {
        self.message.chars().count()
    }

    /// The composed greeting for the preview pane and the share action.
    pub fn greeting(&self) -> String {
        greeting::compose(&self.to, &self.from, &self.message)
    }

    /// Snapshot of the shareable fields, trimmed the way they are encoded.
    pub fn share_state(&self) -> ShareState {
        ShareState {
            to: self.to.trim().to_string(),
            from: self.from.trim().to_string(),
            message: self.message.trim().to_string(),
            theme: self.theme,
            snow_enabled: self.snow_enabled,
            song: self.song.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Mutations (each one refreshes the share link)
    // ------------------------------------------------------------------

    pub fn set_to(&mut self, value: &str) {
        self.to = value.to_string();
        self.refresh_link();
    }

    pub fn set_from(&mut self, value: &str) {
        self.from = value.to_string();
        self.refresh_link();
    }

    pub fn set_message(&mut self, value: &str) {
        self.message = value.to_string();
        self.refresh_link();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.refresh_link();
    }

    /// Flip the theme and return the new value (the caller persists it).
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn set_snow(&mut self, on: bool) {
        self.snow_enabled = on;
        self.refresh_link();
    }

    pub fn toggle_snow(&mut self) -> bool {
        self.set_snow(!self.snow_enabled);
        self.snow_enabled
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        self.music_on
    }

    /// Select a song by id. Ids outside the catalog are ignored.
    pub fn set_song(&mut self, id: &str) -> bool {
        if !songs::is_known(id) {
            tracing::debug!(song = %id, "Ignoring unknown song id");
            return false;
        }
        self.song = id.to_string();
        self.refresh_link();
        true
    }

    pub fn next_song(&mut self) {
        self.song = songs::next_after(&self.song).to_string();
        self.refresh_link();
    }

    /// One-shot reveal. Returns true the first time only.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Clear all editable fields, un-reveal, stop music, and regenerate the
    /// link from the now-default state (dropping any applied token).
    pub fn reset(&mut self) {
        self.to.clear();
        self.from.clear();
        self.message.clear();
        self.revealed = false;
        self.music_on = false;
        self.refresh_link();
    }

    /// Rebuild the share link from current state. Idempotent.
    pub fn refresh_link(&mut self) {
        self.share_link = share::share_url(&self.base_url, &self.share_state());
    }

    // ------------------------------------------------------------------
    // Applying a shared link
    // ------------------------------------------------------------------

    /// Reconstruct state from a shared URL (or bare token).
    ///
    /// A missing `d` parameter is the common fresh-visit case and a no-op. A
    /// malformed token is logged and leaves state untouched; the card stays
    /// fully interactive either way. Recognized fields are applied
    /// individually through the normal setters, so each one runs its usual
    /// side effects (including a link refresh per field, which is harmless).
    ///
    /// Returns the fields that were applied, so the caller can run
    /// out-of-card effects such as persisting the theme preference.
    pub fn apply_from_link(&mut self, url: &str) -> Option<ShareFields> {
        let token = share::extract_token(url)?;

        let fields = match share::decode(&token) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid share data in URL, ignoring");
                return None;
            }
        };
        if fields.is_empty() {
            tracing::debug!("Share token carried no recognized fields");
        }

        let mut applied = ShareFields::default();

        if let Some(to) = &fields.to {
            self.set_to(to);
            applied.to = Some(to.clone());
        }
        if let Some(from) = &fields.from {
            self.set_from(from);
            applied.from = Some(from.clone());
        }
        if let Some(message) = &fields.message {
            self.set_message(message);
            applied.message = Some(message.clone());
        }
        if let Some(theme) = fields.theme {
            self.set_theme(theme);
            applied.theme = Some(theme);
        }
        if let Some(snow) = fields.snow_enabled {
            self.set_snow(snow);
            applied.snow_enabled = Some(snow);
        }
        if let Some(song) = &fields.song {
            if self.set_song(song) {
                applied.song = Some(song.clone());
            }
        }

        Some(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::{decode, extract_token};

    fn card() -> Card {
        Card::new("https://cards.example/greet", Theme::Dark)
    }

    #[test]
    fn new_card_has_default_state_and_a_link() {
        let card = card();
        assert_eq!(card.share_state(), ShareState::default());
        assert!(card.share_link().starts_with("https://cards.example/greet?d="));

        // The default link, decoded, yields the default state again.
        let token = extract_token(card.share_link()).unwrap();
        let fields = decode(&token).unwrap();
        assert_eq!(ShareState::default().merged(&fields), ShareState::default());
    }

    #[test]
    fn every_mutation_refreshes_the_link() {
        let mut card = card();
        let mut seen = vec![card.share_link().to_string()];

        card.set_to("Sam");
        seen.push(card.share_link().to_string());
        card.toggle_theme();
        seen.push(card.share_link().to_string());
        card.toggle_snow();
        seen.push(card.share_link().to_string());
        card.next_song();
        seen.push(card.share_link().to_string());

        for pair in seen.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn link_encodes_trimmed_text() {
        let mut card = card();
        card.set_to("  Sam  ");
        let token = extract_token(card.share_link()).unwrap();
        let fields = decode(&token).unwrap();
        assert_eq!(fields.to.as_deref(), Some("Sam"));
        // The live field keeps what the user typed
        assert_eq!(card.to(), "  Sam  ");
    }

    #[test]
    fn apply_from_link_full_scenario() {
        let mut sender = card();
        sender.set_to("Sam");
        sender.set_from("Lee");
        sender.set_message("Happy holidays");
        sender.set_theme(Theme::Light);
        sender.set_snow(true);
        sender.set_song("song2.mp3");

        let mut receiver = card();
        let applied = receiver.apply_from_link(sender.share_link()).unwrap();

        assert_eq!(receiver.to(), "Sam");
        assert_eq!(receiver.from_name(), "Lee");
        assert_eq!(receiver.message(), "Happy holidays");
        assert_eq!(receiver.theme(), Theme::Light);
        assert!(receiver.snow_enabled());
        assert_eq!(receiver.song(), "song2.mp3");
        assert_eq!(applied.theme, Some(Theme::Light));

        // Regenerated link reproduces the identical record
        let token = extract_token(receiver.share_link()).unwrap();
        let fields = decode(&token).unwrap();
        assert_eq!(
            ShareState::default().merged(&fields),
            sender.share_state()
        );
    }

    #[test]
    fn apply_from_link_is_idempotent() {
        let mut sender = card();
        sender.set_to("Ana");
        sender.set_snow(false);
        let link = sender.share_link().to_string();

        let mut receiver = card();
        receiver.apply_from_link(&link);
        let once = receiver.share_state();
        receiver.apply_from_link(&link);
        assert_eq!(receiver.share_state(), once);
    }

    #[test]
    fn malformed_link_leaves_state_untouched() {
        let mut card = card();
        card.set_to("Keep");
        let before = card.share_state();

        assert!(card
            .apply_from_link("https://cards.example/greet?d=not-a-valid-token")
            .is_none());
        assert_eq!(card.share_state(), before);
    }

    #[test]
    fn link_without_parameter_is_a_no_op() {
        let mut card = card();
        card.set_to("Keep");
        let before = card.share_state();

        assert!(card.apply_from_link("https://cards.example/greet").is_none());
        assert_eq!(card.share_state(), before);
    }

    #[test]
    fn unknown_song_in_link_is_ignored() {
        let mut sender = card();
        sender.set_to("Sam");
        // Forge a token with an out-of-catalog song
        let mut forged = sender.share_state();
        forged.song = "elevator-jazz.mp3".to_string();
        let url = share::share_url("https://cards.example/greet", &forged);

        let mut receiver = card();
        let applied = receiver.apply_from_link(&url).unwrap();
        assert_eq!(receiver.song(), ShareState::default().song);
        assert!(applied.song.is_none());
        // The rest of the token still applied
        assert_eq!(receiver.to(), "Sam");
    }

    #[test]
    fn reveal_is_one_shot_until_reset() {
        let mut card = card();
        assert!(card.reveal());
        assert!(!card.reveal());
        card.reset();
        assert!(card.reveal());
    }

    #[test]
    fn reset_restores_default_share_state() {
        let mut card = card();
        card.set_to("Sam");
        card.set_message("hello");
        card.toggle_music();
        card.reveal();
        let link = card.share_link().to_string();
        card.apply_from_link(&link);

        card.reset();
        assert!(!card.music_on());
        assert!(!card.revealed());
        assert_eq!(card.share_state().to, "");
        assert_eq!(card.share_state().message, "");

        // Theme and snow are presentation, not content; reset keeps them.
        let token = extract_token(card.share_link()).unwrap();
        let fields = decode(&token).unwrap();
        assert_eq!(fields.to.as_deref(), Some(""));
    }
}
