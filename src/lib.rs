pub mod card;
pub mod config;
pub mod share;
pub mod ui;
pub mod util;

pub use card::Card;
pub use config::Config;
pub use share::{decode, encode, extract_token, share_url, ShareError, ShareFields, ShareState, Theme};
pub use ui::App;
