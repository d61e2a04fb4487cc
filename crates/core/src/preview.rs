//! Truncated previews of long-text fields for the admin list.

/// Maximum number of characters shown in an admin-list preview cell.
pub const PREVIEW_CHARS: usize = 50;

/// Produce a preview of a long-text field.
///
/// Returns `None` for empty input (clients render a placeholder dash).
/// Text longer than [`PREVIEW_CHARS`] characters is cut at a character
/// boundary and suffixed with `...`.
pub fn preview(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let mut chars = text.char_indices();
    match chars.nth(PREVIEW_CHARS) {
        Some((byte_idx, _)) => Some(format!("{}...", &text[..byte_idx])),
        None => Some(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_preview() {
        assert_eq!(preview(""), None);
    }

    #[test]
    fn short_text_is_returned_unchanged() {
        assert_eq!(preview("Keep away from mirrors."), Some("Keep away from mirrors.".to_string()));
    }

    #[test]
    fn text_of_exactly_fifty_chars_is_not_truncated() {
        let text = "a".repeat(50);
        assert_eq!(preview(&text), Some(text.clone()));
    }

    #[test]
    fn long_text_is_cut_at_fifty_chars_with_ellipsis() {
        let text = "b".repeat(51);
        let expected = format!("{}...", "b".repeat(50));
        assert_eq!(preview(&text), Some(expected));
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let text = "е".repeat(60); // Cyrillic, 2 bytes per char
        let got = preview(&text).unwrap();
        assert_eq!(got.chars().count(), 53); // 50 chars + "..."
        assert!(got.ends_with("..."));
    }
}
