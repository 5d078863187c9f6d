use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_with_username(conn, credentials).map_err(|err| {
            warn!(
                "Failed to register user '{}': {}",
                credentials.username, err
            );
            err
        })
    })?)
}
