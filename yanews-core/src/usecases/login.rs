use super::{prelude::*, Credentials};

pub fn login_with_username<R: UserRepo>(repo: &R, login: &Credentials) -> Result<User> {
    match repo.try_get_user_by_username(login.username.trim())? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}
