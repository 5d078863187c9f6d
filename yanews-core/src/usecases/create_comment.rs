use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub news_id: String,
    pub author: String,
    pub text: String,
}

pub fn create_new_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: NewsRepo + CommentRepository + UserRepo,
{
    let NewComment {
        news_id,
        author,
        text,
    } = new_comment;
    let news = repo.get_news(&news_id)?;
    if repo.try_get_user_by_username(&author)?.is_none() {
        return Err(Error::Unauthorized);
    }
    validate::comment_text(&text)?;
    let comment = Comment {
        id: Id::new(),
        news_id: news.id,
        author,
        created_at: TimestampMs::now(),
        text: text.trim().to_owned(),
    };
    log::debug!(
        "Creating comment {} of '{}' for news {}",
        comment.id,
        comment.author,
        comment.news_id
    );
    repo.create_comment(&comment)?;
    Ok(comment)
}
