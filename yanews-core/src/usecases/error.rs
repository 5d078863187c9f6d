use crate::{repositories, util::validate::CommentInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("Invalid username")]
    Username,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Empty comment")]
    EmptyComment,
    #[error("The comment contains bad words")]
    BadWords,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<yanews_entities::password::ParseError> for Error {
    fn from(_: yanews_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<CommentInvalidation> for Error {
    fn from(err: CommentInvalidation) -> Self {
        match err {
            CommentInvalidation::Empty => Self::EmptyComment,
            CommentInvalidation::BadWords => Self::BadWords,
        }
    }
}
