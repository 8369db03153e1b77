//! Shareable-state encoding: the card state record, the URL-safe token codec,
//! and share-link composition/extraction.

pub mod codec;
pub mod link;
pub mod state;

pub use codec::{decode, encode, ShareError};
pub use link::{extract_token, share_url, QUERY_PARAM};
pub use state::{ShareFields, ShareState, Theme, DEFAULT_SONG};
