use super::{authorize_comment_author, prelude::*};

/// Deletes a comment of the given author and returns it.
pub fn delete_comment<R: CommentRepository>(repo: &R, id: &str, author: &str) -> Result<Comment> {
    let comment = authorize_comment_author(repo, id, author)?;
    repo.delete_comment(comment.id.as_str())?;
    log::debug!("Deleted comment {} of '{}'", comment.id, comment.author);
    Ok(comment)
}
