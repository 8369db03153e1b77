//! Greeting text composition for the live preview and the share action.

/// Body used when the message field is empty.
pub const DEFAULT_MESSAGE: &str = "Wishing you peace, joy, and blessings this season. 🎄✨";

const CLOSING_LINE: &str = "Merry Christmas and Happy New Year! 🥳🎆";

/// Compose the full greeting from the editable fields.
///
/// Recipient and sender lines appear only when non-blank; a blank message
/// falls back to [`DEFAULT_MESSAGE`].
pub fn compose(to: &str, from: &str, message: &str) -> String {
    let to = to.trim();
    let from = from.trim();
    let message = message.trim();

    let body = if message.is_empty() {
        DEFAULT_MESSAGE
    } else {
        message
    };

    let mut out = String::new();
    if !to.is_empty() {
        out.push_str(&format!("Hi {to}!\n\n"));
    }
    out.push_str(body);
    out.push_str("\n\n");
    out.push_str(CLOSING_LINE);
    if !from.is_empty() {
        out.push_str(&format!("\n\n— {from}"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_present() {
        let text = compose("Sam", "Lee", "Happy holidays");
        assert!(text.starts_with("Hi Sam!\n\n"));
        assert!(text.contains("Happy holidays\n\n"));
        assert!(text.ends_with("— Lee"));
    }

    #[test]
    fn blank_fields_are_omitted() {
        let text = compose("", "  ", "\t");
        assert!(!text.contains("Hi "));
        assert!(!text.contains('—'));
        assert!(text.starts_with(DEFAULT_MESSAGE));
        assert!(text.contains("Merry Christmas"));
    }

    #[test]
    fn fields_are_trimmed() {
        let text = compose("  Sam ", " Lee  ", "  hey  ");
        assert!(text.starts_with("Hi Sam!"));
        assert!(text.contains("\nhey\n") || text.contains("hey\n\n"));
        assert!(text.ends_with("— Lee"));
    }
}
