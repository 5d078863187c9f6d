use super::{authorize_comment_author, prelude::*};
use crate::util::validate;

#[derive(Debug, Clone, Copy)]
pub struct UpdateComment<'a> {
    pub id: &'a str,
    /// Username of the user who requested the update
    pub author: &'a str,
    pub text: &'a str,
}

pub fn update_comment<R: CommentRepository>(repo: &R, update: UpdateComment) -> Result<Comment> {
    let UpdateComment { id, author, text } = update;
    let mut comment = authorize_comment_author(repo, id, author)?;
    validate::comment_text(text)?;
    let text = text.trim();
    repo.update_comment_text(comment.id.as_str(), text)?;
    comment.text = text.to_owned();
    Ok(comment)
}
