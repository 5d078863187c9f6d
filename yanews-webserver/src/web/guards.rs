use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use yanews_application::error::AppError;
use yanews_core::usecases::Error as ParameterError;

pub const COOKIE_USER_KEY: &str = "yanews-user";

type Result<T> = std::result::Result<T, AppError>;

/// The (optional) user of the current session.
#[derive(Debug)]
pub struct Auth {
    username: Option<String>,
}

impl Auth {
    pub fn username(&self) -> Result<&str> {
        self.username
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn username_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .map(|cookie| cookie.value().to_owned())
            .filter(|username| !username.is_empty())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let username = Self::username_from_cookie(request);
        Outcome::Success(Self { username })
    }
}

/// An authenticated user.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn username(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.username() {
            Ok(username) => Outcome::Success(Account(username.to_owned())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
