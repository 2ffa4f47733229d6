//! Small presentation helpers.

use chrono::{DateTime, Utc};

/// Cut `text` down to `max` characters, appending an ellipsis when trimmed.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Fixed-width timestamp for list rows.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        assert_eq!(truncate("héllö wörld", 5), "héllö...");
    }

    #[test]
    fn timestamps_render_fixed_width() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-15 09:30");
    }
}
