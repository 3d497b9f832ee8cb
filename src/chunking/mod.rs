//! Word-bounded transcript chunking.
//!
//! Splits transcripts into pieces small enough for a single summarization
//! request.

/// Split text into word-aligned chunks of at most `max_chars` bytes.
///
/// Words are joined with single spaces; a new chunk starts once appending the
/// next word would reach the character budget. A single word longer than the
/// budget becomes its own over-sized chunk. Empty input yields no chunks.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 >= max_chars {
            chunks.push(std::mem::take(&mut current));
        }

        if current.is_empty() {
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
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
    fn test_empty_input_yields_no_chunks() {
        assert!(split_into_chunks("", 3000).is_empty());
        assert!(split_into_chunks("   \n\t  ", 3000).is_empty());
    }

    #[test]
    fn test_short_input_is_one_chunk() {
        let chunks = split_into_chunks("hello world", 3000);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn test_tiny_budget_splits_per_word() {
        let chunks = split_into_chunks("a b c d", 3);
        assert_eq!(chunks, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_chunks_stay_within_budget() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(50);
        let max = 80;

        let chunks = split_into_chunks(&text, max);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.len() <= max, "chunk of {} bytes exceeds budget", chunk.len());
        }
    }

    #[test]
    fn test_rejoining_chunks_preserves_words() {
        let text = "  one   two\nthree\t four five  ";
        let chunks = split_into_chunks(text, 10);

        let rejoined = chunks.join(" ");
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, normalized);
    }

    #[test]
    fn test_oversized_word_gets_own_chunk() {
        let chunks = split_into_chunks("hi incomprehensibilities ok", 10);
        assert_eq!(chunks, vec!["hi", "incomprehensibilities", "ok"]);
    }
}
