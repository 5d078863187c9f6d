use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn register_with_username<R: UserRepo>(repo: &R, credentials: &Credentials) -> Result<User> {
    let username = credentials.username.trim();
    if !validate::is_valid_username(username) {
        return Err(Error::Username);
    }
    if repo.try_get_user_by_username(username)?.is_some() {
        return Err(Error::UserExists);
    }
    let password = credentials.password.parse::<Password>()?;
    let new_user = User {
        username: username.to_owned(),
        password,
    };
    log::debug!("Creating new user: username = {}", new_user.username);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
