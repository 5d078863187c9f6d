use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Loads a comment on behalf of its author.
///
/// Comments of other users are reported as not found and
/// are indistinguishable from comments that do not exist.
pub fn authorize_comment_author<R>(repo: &R, comment_id: &str, username: &str) -> Result<Comment>
where
    R: CommentRepository,
{
    let comment = repo.load_comment(comment_id)?;
    if !comment.is_authored_by(username) {
        log::debug!("User '{username}' is not the author of comment {comment_id}");
        return Err(RepoError::NotFound.into());
    }
    Ok(comment)
}
