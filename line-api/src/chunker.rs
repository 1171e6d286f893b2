//! Splitting oversized outbound texts into platform-sized chunks.

use std::time::Duration;

/// Maximum characters per outbound message. The platform hard cap is 4096;
/// 4000 leaves headroom for the continuation marker on pushed chunks.
pub const MAX_TEXT_CHARS: usize = 4000;

/// Prefix on every chunk after the first so readers can tell the message
/// continues an earlier one.
pub const CONTINUATION_MARKER: &str = "[cont] ";

/// Pause between successive pushes, required by the platform push-rate
/// limit.
pub const PUSH_DELAY: Duration = Duration::from_millis(500);

/// Splits `text` into slices of at most `max_chars` characters. The input
/// is counted in chars, not bytes, matching how the platform counts
/// message length. An empty input yields one empty chunk so callers always
/// have something to send.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = split_text("hello", 4000);
        assert_eq!(chunks, vec!["hello".to_string()]);
    }

    #[test]
    fn test_exact_limit_single_chunk() {
        let text = "a".repeat(4000);
        let chunks = split_text(&text, 4000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 4000);
    }

    #[test]
    fn test_9000_chars_three_chunks() {
        let text = "x".repeat(9000);
        let chunks = split_text(&text, 4000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 4000);
        assert_eq!(chunks[1].chars().count(), 4000);
        assert_eq!(chunks[2].chars().count(), 1000);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_multibyte_counted_as_chars() {
        let text = "あ".repeat(4001);
        let chunks = split_text(&text, 4000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 4000);
        assert_eq!(chunks[1].chars().count(), 1);
    }

    #[test]
    fn test_empty_text_single_empty_chunk() {
        assert_eq!(split_text("", 4000), vec![String::new()]);
    }
}
