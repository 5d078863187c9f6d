use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_new_comment(conn, new_comment).map_err(|err| {
            info!("Comment rejected: {}", err);
            err
        })
    })?)
}
