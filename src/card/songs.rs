//! The fixed catalog of background tracks.
//!
//! Song ids are opaque strings on the wire; only ids in this catalog are ever
//! applied from a shared link.

use crate::share::DEFAULT_SONG;

/// One selectable background track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Song {
    /// Wire id, as carried in the share token
    pub id: &'static str,
    /// Human-readable title shown in the song selector
    pub title: &'static str,
}

pub const CATALOG: [Song; 3] = [
    Song {
        id: "song1.mp3",
        title: "Silver Bells",
    },
    Song {
        id: "song2.mp3",
        title: "Carol of the Chimes",
    },
    Song {
        id: "song3.mp3",
        title: "Winter Waltz",
    },
];

/// Whether a decoded song id names a catalog entry.
pub fn is_known(id: &str) -> bool {
    CATALOG.iter().any(|song| song.id == id)
}

/// Display title for a song id, falling back to the id itself.
pub fn title_for(id: &str) -> &str {
    CATALOG
        .iter()
        .find(|song| song.id == id)
        .map(|song| song.title)
        .unwrap_or(id)
}

/// The catalog entry after `id`, wrapping around. Unknown ids restart at the
/// first track.
pub fn next_after(id: &str) -> &'static str {
    let position = CATALOG.iter().position(|song| song.id == id);
    match position {
        Some(i) => CATALOG[(i + 1) % CATALOG.len()].id,
        None => CATALOG[0].id,
    }
}
