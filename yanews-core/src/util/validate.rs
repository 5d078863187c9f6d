use thiserror::Error;

use crate::profanity;

pub const USERNAME_MAX_LEN: usize = 150;

pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    len > 0
        && len <= USERNAME_MAX_LEN
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

#[derive(Debug, Error)]
pub enum CommentInvalidation {
    #[error("Empty comment")]
    Empty,
    #[error("The comment contains bad words")]
    BadWords,
}

pub fn comment_text(text: &str) -> Result<(), CommentInvalidation> {
    if text.trim().is_empty() {
        return Err(CommentInvalidation::Empty);
    }
    if profanity::contains_bad_words(text) {
        return Err(CommentInvalidation::BadWords);
    }
    Ok(())
}
