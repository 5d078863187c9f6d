use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::view;
use crate::web::sqlite::Connections;
use yanews_application::{
    error::{AppError, BError},
    prelude::register_user,
};
use yanews_core::{entities::Password, usecases, usecases::Error as ParameterError};

#[derive(FromForm)]
pub struct SignupForm<'r> {
    username: &'r str,
    password: &'r str,
    password_confirmation: &'r str,
}

fn signup_error_message(err: &AppError) -> String {
    match err {
        AppError::Business(BError::Parameter(err)) => match err {
            ParameterError::UserExists => "A user with this username already exists.".to_owned(),
            ParameterError::Username => {
                "Invalid username. Use up to 150 letters, digits and @/./+/-/_ only.".to_owned()
            }
            ParameterError::Password => format!(
                "The password must be at least {} characters long.",
                Password::min_len()
            ),
            _ => "We are so sorry, something went wrong :(".to_owned(),
        },
        _ => "We are so sorry, something went wrong :(".to_owned(),
    }
}

#[get("/auth/signup")]
pub fn get_signup(flash: Option<FlashMessage>) -> Markup {
    view::register(flash)
}

#[allow(clippy::result_large_err)]
#[post("/auth/signup", data = "<data>")]
pub fn post_signup(
    db: Connections,
    data: Form<SignupForm>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let SignupForm {
        username,
        password,
        password_confirmation,
    } = data.into_inner();
    if password != password_confirmation {
        return Err(Flash::error(
            Redirect::to(uri!(get_signup)),
            "The two password fields didn't match.",
        ));
    }
    let credentials = usecases::Credentials { username, password };
    match register_user(&db, &credentials) {
        Err(err) => Err(Flash::error(
            Redirect::to(uri!(get_signup)),
            signup_error_message(&err),
        )),
        Ok(user) => {
            info!("Registered new user '{}'", user.username);
            Ok(Flash::success(
                Redirect::to(uri!(super::login::get_login(_))),
                "Registered successfully. Please log in.",
            ))
        }
    }
}
