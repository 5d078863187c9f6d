// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait NewsRepo {
    fn create_news(&self, news: &News) -> Result<()>;

    fn get_news(&self, id: &str) -> Result<News>;

    // Ordered by publication date, most recent first
    fn recent_news(&self, pagination: &Pagination) -> Result<Vec<News>>;

    fn count_news(&self) -> Result<usize>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: &Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // Ordered by creation time, oldest first
    fn load_comments_of_news(&self, news_id: &str) -> Result<Vec<Comment>>;

    fn update_comment_text(&self, id: &str, text: &str) -> Result<()>;

    fn delete_comment(&self, id: &str) -> Result<()>;

    fn count_comments(&self) -> Result<usize>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user_by_username(&self, username: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
}
