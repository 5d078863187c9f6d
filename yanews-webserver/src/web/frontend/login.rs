use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{uri::Origin, Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{super::guards::*, view};

use crate::web::sqlite::Connections;
use yanews_core::{usecases, usecases::Error as ParameterError};

const INTERNAL_ERROR: &str =
    "We are so sorry! An internal server error has occurred. Please try again later.";

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub(crate) username: &'r str,
    pub(crate) password: &'r str,
    pub(crate) next: Option<&'r str>,
}

/// Only valid paths on this site are accepted as redirect targets.
fn local_path(next: Option<&str>) -> Option<&str> {
    next.filter(|next| {
        next.starts_with('/') && !next.starts_with("//") && Origin::parse(next).is_ok()
    })
}

pub(crate) fn login_path(next: Option<&str>) -> Origin<'static> {
    match local_path(next) {
        Some(next) => uri!(get_login(Some(next))),
        None => uri!(get_login(_)),
    }
}

#[allow(clippy::result_large_err)]
#[get("/auth/login?<next>")]
pub fn get_login(
    account: Option<Account>,
    flash: Option<FlashMessage>,
    next: Option<&str>,
) -> std::result::Result<Markup, Redirect> {
    if account.is_some() {
        Err(Redirect::to(uri!(super::get_index)))
    } else {
        Ok(view::login(flash, local_path(next)))
    }
}

#[allow(clippy::result_large_err)]
#[post("/auth/login", data = "<credentials>")]
pub fn post_login(
    db: Connections,
    credentials: Form<LoginCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let next = credentials.next;
    let Ok(db) = db.shared() else {
        return Err(Flash::error(Redirect::to(login_path(next)), INTERNAL_ERROR));
    };
    let login = usecases::Credentials {
        username: credentials.username,
        password: credentials.password,
    };
    match usecases::login_with_username(&db, &login) {
        Err(err) => {
            let msg = match err {
                ParameterError::Credentials => "Invalid username or password.",
                _ => {
                    error!("Failed to login user '{}': {}", login.username, err);
                    INTERNAL_ERROR
                }
            };
            Err(Flash::error(Redirect::to(login_path(next)), msg))
        }
        Ok(user) => {
            cookies.add_private(
                Cookie::build((COOKIE_USER_KEY, user.username))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            let target = local_path(next).unwrap_or("/").to_owned();
            Ok(Redirect::to(target))
        }
    }
}

#[get("/auth/logout")]
pub fn get_logout(cookies: &CookieJar<'_>) -> Markup {
    cookies.remove_private(COOKIE_USER_KEY);
    view::logged_out()
}

#[post("/auth/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_USER_KEY);
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}
