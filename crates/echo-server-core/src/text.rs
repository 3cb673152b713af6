//! The text operations behind the `echo` and `word_count` tools.
//!
//! Both are pure: no I/O, no shared state, safe to call from any thread.

/// Return `text` unchanged, or its full Unicode uppercase mapping when `upper` is set.
///
/// Uppercasing follows the Unicode case tables, so a single character may
/// expand (`ß` becomes `SS`). Characters without case pass through.
pub fn echo(text: &str, upper: bool) -> String {
    if upper {
        text.to_uppercase()
    } else {
        text.to_owned()
    }
}

/// Count the fragments left after splitting `text` on runs of whitespace.
///
/// Whitespace is the Unicode White_Space set plus the information separators
/// U+001C..=U+001F, the same set Python's `str.split` breaks on.
pub fn word_count(text: &str) -> usize {
    text.split(is_separator).filter(|fragment| !fragment.is_empty()).count()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
