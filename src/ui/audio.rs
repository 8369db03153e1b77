//! Music playback capability.
//!
//! Playback is a platform service the card never depends on: the music
//! toggle and song choice are real state, but whether sound actually comes
//! out is somebody else's problem. The default backend just records the
//! transitions in the log.

use crate::card::songs;

pub trait MusicBackend {
    fn start(&mut self, song_id: &str);
    fn stop(&mut self);
}

/// No-audio backend used when no platform player is wired up.
#[derive(Debug, Default)]
pub struct SilentBackend;

impl MusicBackend for SilentBackend {
    fn start(&mut self, song_id: &str) {
        tracing::info!(song = %song_id, title = %songs::title_for(song_id), "Music on");
    }

    fn stop(&mut self) {
        tracing::info!("Music off");
    }
}
