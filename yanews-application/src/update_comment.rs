use super::*;

pub fn update_comment(
    connections: &sqlite::Connections,
    update: usecases::UpdateComment,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_comment(conn, update).map_err(|err| {
            info!("Failed to update comment {}: {}", update.id, err);
            err
        })
    })?)
}
