//! Filter for comments containing banned words.

/// Words that must not appear in the text of a comment.
pub const BAD_WORDS: &[&str] = &["редиска", "негодяй"];

/// Warning that is shown next to the text field of a rejected comment.
pub const WARNING: &str = "Не ругайтесь!";

/// Checks if the text contains any of the [`BAD_WORDS`].
///
/// The words are matched as case-sensitive substrings without
/// any normalization.
pub fn contains_bad_words(text: &str) -> bool {
    BAD_WORDS.iter().any(|word| text.contains(word))
}
