//! Share token codec: JSON -> UTF-8 -> URL-safe base64.
//!
//! The token is the value of the `d` query parameter in a share link. It must
//! survive being pasted into chat apps and hand-edited URLs, so the alphabet
//! is URL-safe base64 without padding (no characters reserved in a query
//! value) and the decoder treats its input as hostile: a bad transport layer
//! fails with [`ShareError::MalformedToken`], while individually mis-shaped
//! fields are simply dropped from the resulting partial record.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;
use thiserror::Error;

use super::state::{ShareFields, ShareState};

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("malformed share token: {0}")]
    MalformedToken(String),
}

// Wire keys are fixed; the JSON object is the structured text layer and the
// base64 transform makes it a single opaque query-parameter value.
const KEY_TO: &str = "to";
const KEY_FROM: &str = "from";
const KEY_MESSAGE: &str = "msg";
const KEY_THEME: &str = "theme";
const KEY_SNOW: &str = "snow";
const KEY_SONG: &str = "song";

/// Sentinel integers for the snow toggle on the wire.
const SNOW_OFF: i64 = 0;
const SNOW_ON: i64 = 1;

/// Serialize a fully-populated state into an opaque URL-safe token.
///
/// `decode` followed by merging over a default state reproduces every field
/// exactly, including multi-byte text such as emoji or accented names.
pub fn encode(state: &ShareState) -> String {
    let mut doc = serde_json::Map::new();
    doc.insert(KEY_TO.into(), Value::String(state.to.clone()));
    doc.insert(KEY_FROM.into(), Value::String(state.from.clone()));
    doc.insert(KEY_MESSAGE.into(), Value::String(state.message.clone()));
    doc.insert(KEY_THEME.into(), Value::String(state.theme.as_str().into()));
    doc.insert(
        KEY_SNOW.into(),
        Value::from(if state.snow_enabled { SNOW_ON } else { SNOW_OFF }),
    );
    doc.insert(KEY_SONG.into(), Value::String(state.song.clone()));
    URL_SAFE_NO_PAD.encode(Value::Object(doc).to_string())
}

/// Parse an arbitrary (possibly attacker- or user-edited) token.
///
/// Returns a partial record: recognized fields are `Some`, everything the
/// token lacks or carries in an unexpected shape is `None`. Unknown keys are
/// ignored. Fails only when the token itself is not transformable into a JSON
/// object; never panics.
pub fn decode(token: &str) -> Result<ShareFields, ShareError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim().as_bytes())
        .map_err(|e| ShareError::MalformedToken(format!("base64: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ShareError::MalformedToken(format!("utf-8: {e}")))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| ShareError::MalformedToken(format!("json: {e}")))?;

    let Value::Object(map) = value else {
        return Err(ShareError::MalformedToken(
            "token is not a JSON object".to_string(),
        ));
    };

    Ok(ShareFields {
        to: map.get(KEY_TO).and_then(Value::as_str).map(str::to_owned),
        from: map.get(KEY_FROM).and_then(Value::as_str).map(str::to_owned),
        message: map
            .get(KEY_MESSAGE)
            .and_then(Value::as_str)
            .map(str::to_owned),
        theme: map
            .get(KEY_THEME)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok()),
        // Exact sentinel match only; `true`, `"1"` or `2` all count as
        // unrecognized and leave the field absent.
        snow_enabled: map
            .get(KEY_SNOW)
            .and_then(Value::as_i64)
            .and_then(|n| match n {
                SNOW_OFF => Some(false),
                SNOW_ON => Some(true),
                _ => None,
            }),
        song: map.get(KEY_SONG).and_then(Value::as_str).map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    use crate::share::state::Theme;

    fn sample() -> ShareState {
        ShareState {
            to: "Sam".into(),
            from: "Lee".into(),
            message: "Happy holidays".into(),
            theme: Theme::Light,
            snow_enabled: true,
            song: "song2.mp3".into(),
        }
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let state = sample();
        let fields = decode(&encode(&state)).unwrap();
        assert_eq!(ShareState::default().merged(&fields), state);
    }

    #[test]
    fn round_trip_preserves_multibyte_text() {
        let state = ShareState {
            to: "José".into(),
            from: "Zoë 🎅".into(),
            message: "Feliz Navidad! 🎄✨ — peace & joy".into(),
            theme: Theme::Dark,
            snow_enabled: false,
            ..ShareState::default()
        };
        let fields = decode(&encode(&state)).unwrap();
        assert_eq!(ShareState::default().merged(&fields), state);
    }

    #[test]
    fn default_state_round_trips() {
        let fields = decode(&encode(&ShareState::default())).unwrap();
        assert_eq!(ShareState::default().merged(&fields), ShareState::default());
    }

    #[test]
    fn token_contains_no_url_reserved_characters() {
        let token = encode(&ShareState {
            message: "a?b&c=d#e/f+g ❄".into(),
            ..ShareState::default()
        });
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn garbage_fails_with_malformed_token() {
        assert!(matches!(
            decode("not-a-valid-token"),
            Err(ShareError::MalformedToken(_))
        ));
        assert!(matches!(decode("!!!"), Err(ShareError::MalformedToken(_))));
        // Valid base64 of something that isn't JSON
        let token = URL_SAFE_NO_PAD.encode("hello there");
        assert!(matches!(decode(&token), Err(ShareError::MalformedToken(_))));
        // Valid JSON, but not an object
        let token = URL_SAFE_NO_PAD.encode("[1,2,3]");
        assert!(matches!(decode(&token), Err(ShareError::MalformedToken(_))));
    }

    #[test]
    fn partial_token_leaves_other_fields_absent() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"to":"Ana"}"#);
        let fields = decode(&token).unwrap();
        assert_eq!(fields.to.as_deref(), Some("Ana"));
        assert!(fields.from.is_none());
        assert!(fields.message.is_none());
        assert!(fields.theme.is_none());
        assert!(fields.snow_enabled.is_none());
        assert!(fields.song.is_none());

        let state = ShareState::default().merged(&fields);
        assert_eq!(state.to, "Ana");
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.snow_enabled);
    }

    #[test]
    fn out_of_enum_theme_is_dropped_not_fatal() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"to":"Sam","theme":"purple"}"#);
        let fields = decode(&token).unwrap();
        assert_eq!(fields.to.as_deref(), Some("Sam"));
        assert!(fields.theme.is_none());
    }

    #[test]
    fn snow_requires_exact_sentinel() {
        for (raw, expected) in [
            (r#"{"snow":0}"#, Some(false)),
            (r#"{"snow":1}"#, Some(true)),
            (r#"{"snow":2}"#, None),
            (r#"{"snow":true}"#, None),
            (r#"{"snow":"1"}"#, None),
            (r#"{"snow":1.0}"#, None),
        ] {
            let fields = decode(&URL_SAFE_NO_PAD.encode(raw)).unwrap();
            assert_eq!(fields.snow_enabled, expected, "raw: {raw}");
        }
    }

    #[test]
    fn mis_shaped_fields_are_independent() {
        // A broken theme must not take the neighboring text fields with it.
        let token = URL_SAFE_NO_PAD.encode(r#"{"to":7,"from":"Lee","theme":[],"snow":"no"}"#);
        let fields = decode(&token).unwrap();
        assert!(fields.to.is_none());
        assert_eq!(fields.from.as_deref(), Some("Lee"));
        assert!(fields.theme.is_none());
        assert!(fields.snow_enabled.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"to":"Ana","glitter":9000}"#);
        let fields = decode(&token).unwrap();
        assert_eq!(fields.to.as_deref(), Some("Ana"));
    }

    #[test]
    fn example_scenario_token_applies_all_fields() {
        let token = URL_SAFE_NO_PAD.encode(
            r#"{"to":"Sam","from":"Lee","msg":"Happy holidays","theme":"light","snow":1,"song":"song2.mp3"}"#,
        );
        let fields = decode(&token).unwrap();
        let state = ShareState::default().merged(&fields);
        assert_eq!(state, sample());

        // Regenerating the link from the applied state reproduces the record.
        let again = decode(&encode(&state)).unwrap();
        assert_eq!(ShareState::default().merged(&again), state);
    }
}
