//! Share-URL composition and token extraction.
//!
//! A share link is `<base_url>?d=<token>` with a single fixed query
//! parameter. Extraction accepts full URLs (the normal case), URLs with extra
//! parameters or fragments, and a bare token pasted without its URL.

use super::codec;
use super::state::ShareState;

/// The one query parameter a share link carries.
pub const QUERY_PARAM: &str = "d";

/// Compose the full shareable URL for the given state.
pub fn share_url(base_url: &str, state: &ShareState) -> String {
    let base = base_url.trim_end_matches(['?', '&']);
    format!("{base}?{QUERY_PARAM}={}", codec::encode(state))
}

/// Pull the `d` parameter out of a URL, or `None` when it isn't there.
///
/// Inputs without any query string are treated as a bare token when they
/// don't look like a URL or path (the token alphabet has no `/` or `:`).
pub fn extract_token(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let Some((_, rest)) = input.split_once('?') else {
        if input.contains('/') || input.contains(':') {
            return None;
        }
        return Some(input.to_string());
    };

    let query = rest.split('#').next().unwrap_or(rest);
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == QUERY_PARAM && !value.is_empty() {
            return Some(percent_decode(value));
        }
    }
    None
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded_bytes = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(h), Some(l)) = (from_hex(bytes[i + 1]), from_hex(bytes[i + 2])) {
                decoded_bytes.push(h * 16 + l);
                i += 3;
                continue;
            }
        }
        decoded_bytes.push(bytes[i]);
        i += 1;
    }
    // Use from_utf8_lossy to handle multi-byte UTF-8 sequences correctly
    String::from_utf8_lossy(&decoded_bytes).into_owned()
}

fn from_hex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::codec::decode;
    use crate::share::state::Theme;

    #[test]
    fn share_url_uses_single_d_parameter() {
        let state = ShareState {
            to: "Sam".into(),
            ..ShareState::default()
        };
        let url = share_url("https://cards.example/greet", &state);
        assert!(url.starts_with("https://cards.example/greet?d="));
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn share_url_round_trips_through_extraction() {
        let state = ShareState {
            to: "José".into(),
            from: "Zoë".into(),
            message: "🎄".into(),
            theme: Theme::Light,
            snow_enabled: false,
            song: "song3.mp3".into(),
        };
        let url = share_url("https://cards.example/greet", &state);
        let token = extract_token(&url).unwrap();
        let fields = decode(&token).unwrap();
        assert_eq!(ShareState::default().merged(&fields), state);
    }

    #[test]
    fn extraction_handles_extra_params_and_fragments() {
        assert_eq!(
            extract_token("https://x.example/?utm=1&d=abc&lang=en#top").as_deref(),
            Some("abc")
        );
        assert_eq!(
            extract_token("https://x.example/card?d=abc#d=nope").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn missing_or_empty_parameter_yields_none() {
        assert!(extract_token("https://x.example/card").is_none());
        assert!(extract_token("https://x.example/card?other=1").is_none());
        assert!(extract_token("https://x.example/card?d=").is_none());
        assert!(extract_token("").is_none());
        assert!(extract_token("   ").is_none());
    }

    #[test]
    fn bare_token_is_accepted() {
        assert_eq!(
            extract_token("eyJ0byI6IkFuYSJ9").as_deref(),
            Some("eyJ0byI6IkFuYSJ9")
        );
        // Path-like input without a query string is not a token
        assert!(extract_token("https://x.example/card/d").is_none());
    }

    #[test]
    fn percent_encoded_value_is_decoded() {
        assert_eq!(
            extract_token("https://x.example/?d=abc%2Ddef").as_deref(),
            Some("abc-def")
        );
    }

    #[test]
    fn trailing_separator_on_base_is_tolerated() {
        let url = share_url("https://x.example/card?", &ShareState::default());
        assert!(url.starts_with("https://x.example/card?d="));
    }
}
