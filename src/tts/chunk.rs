//! Splitting text into request-sized pieces.
//!
//! The `translate_tts` endpoint rejects long `q` values, so the advisory is
//! cut into pieces of at most [`MAX_CHUNK_CHARS`] characters.  Each line is
//! spoken on its own; an over-long line is cut after the last punctuation
//! mark inside the window, else after the last whitespace, else hard at the
//! limit.

/// Longest piece (in `char`s) sent in a single synthesis request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Characters a piece may end on.  `।` is the Devanagari full stop.
const BREAK_AFTER: &[char] = &['।', '.', ',', '!', '?', ';', ':'];

/// Clean `text` and split it into pieces of at most `max_chars` characters.
///
/// Lines are trimmed and blank lines dropped.  Returns an empty vector when
/// nothing speakable remains.
///
/// ```rust
/// use krishi_advisor::tts::split_for_tts;
///
/// let chunks = split_for_tts("  पहली पंक्ति।\n\n second line  ", 100);
/// assert_eq!(chunks, vec!["पहली पंक्ति।", "second line"]);
/// ```
pub fn split_for_tts(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut rest = line;
        while rest.chars().count() > max_chars {
            let (head, tail) = rest.split_at(cut_index(rest, max_chars));
            let head = head.trim();
            if !head.is_empty() {
                chunks.push(head.to_string());
            }
            rest = tail.trim_start();
        }
        if !rest.is_empty() {
            chunks.push(rest.to_string());
        }
    }

    chunks
}

/// Byte offset at which to cut `s`, always > 0 and on a char boundary.
fn cut_index(s: &str, max_chars: usize) -> usize {
    let window_end = s
        .char_indices()
        .nth(max_chars)
        .map_or(s.len(), |(i, _)| i);
    let window = &s[..window_end];

    let last_punct = window.char_indices().rev().find(|(_, c)| BREAK_AFTER.contains(c));
    let last_space = window.char_indices().rev().find(|(_, c)| c.is_whitespace());

    match last_punct.or(last_space) {
        Some((i, c)) => i + c.len_utf8(),
        None => window_end,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
