use maud::Markup;
use rocket::{
    self, catch, catchers, delete,
    form::Form,
    get,
    http::uri::Origin,
    post,
    request::FlashMessage,
    response::{content::RawCss, Redirect},
    routes, Catcher, FromForm, Responder, Route, State,
};

use crate::web::{error::Error, guards::*, sqlite, Cfg};
use yanews_application::{error::AppError, prelude as flows};
use yanews_core::{entities::*, profanity, usecases, usecases::Error as ParameterError};

mod login;
mod register;
mod view;

#[cfg(test)]
mod tests;

const MAIN_CSS: &str = include_str!("main.css");

const REQUIRED_FIELD: &str = "Обязательное поле.";

type Result<T> = std::result::Result<T, Error>;

#[derive(Responder)]
pub enum PageOrRedirect {
    Page(Markup),
    Redirect(Redirect),
}

#[derive(FromForm)]
pub struct CommentText<'r> {
    text: &'r str,
}

/// Redirects anonymous users to the login page and back.
fn redirect_to_login(origin: &Origin) -> Redirect {
    let next = origin.to_string();
    Redirect::found(login::login_path(Some(&next)))
}

fn redirect_to_comments(news_id: &Id) -> Redirect {
    Redirect::found(format!("/news/{news_id}#comments"))
}

/// The message that is shown next to the text field of a rejected comment.
fn invalid_comment_message(err: &AppError) -> Option<&'static str> {
    use yanews_application::error::BError;
    match err {
        AppError::Business(BError::Parameter(ParameterError::BadWords)) => {
            Some(profanity::WARNING)
        }
        AppError::Business(BError::Parameter(ParameterError::EmptyComment)) => {
            Some(REQUIRED_FIELD)
        }
        _ => None,
    }
}

#[get("/")]
pub fn get_index(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let news = usecases::list_recent_news(&db.shared()?, cfg.news_count_on_home_page)?;
    Ok(view::index(auth.username().ok(), flash, &news))
}

#[get("/news/<id>")]
pub fn get_news(db: sqlite::Connections, id: &str, auth: Auth) -> Result<Markup> {
    let (news, comments) = usecases::load_news_with_comments(&db.shared()?, id)?;
    Ok(view::news(
        auth.username().ok(),
        &news,
        &comments,
        view::CommentForm::default(),
    ))
}

#[post("/news/<id>", data = "<data>")]
pub fn post_comment(
    db: sqlite::Connections,
    id: &str,
    account: Option<Account>,
    origin: &Origin,
    data: Form<CommentText>,
) -> Result<PageOrRedirect> {
    let Some(account) = account else {
        return Ok(PageOrRedirect::Redirect(redirect_to_login(origin)));
    };
    let new_comment = usecases::NewComment {
        news_id: id.to_owned(),
        author: account.username().to_owned(),
        text: data.text.to_owned(),
    };
    match flows::create_comment(&db, new_comment) {
        Ok(comment) => Ok(PageOrRedirect::Redirect(redirect_to_comments(
            &comment.news_id,
        ))),
        Err(err) => {
            let Some(message) = invalid_comment_message(&err) else {
                return Err(err.into());
            };
            let (news, comments) = usecases::load_news_with_comments(&db.shared()?, id)?;
            Ok(PageOrRedirect::Page(view::news(
                Some(account.username()),
                &news,
                &comments,
                view::CommentForm::with_error(data.text, message),
            )))
        }
    }
}

#[get("/edit_comment/<id>")]
pub fn get_edit_comment(
    db: sqlite::Connections,
    id: &str,
    account: Option<Account>,
    origin: &Origin,
) -> Result<PageOrRedirect> {
    let Some(account) = account else {
        return Ok(PageOrRedirect::Redirect(redirect_to_login(origin)));
    };
    let comment = usecases::authorize_comment_author(&db.shared()?, id, account.username())?;
    let form = view::CommentForm {
        text: &comment.text,
        errors: vec![],
    };
    Ok(PageOrRedirect::Page(view::edit_comment(
        account.username(),
        &comment,
        form,
    )))
}

#[post("/edit_comment/<id>", data = "<data>")]
pub fn post_edit_comment(
    db: sqlite::Connections,
    id: &str,
    account: Option<Account>,
    origin: &Origin,
    data: Form<CommentText>,
) -> Result<PageOrRedirect> {
    let Some(account) = account else {
        return Ok(PageOrRedirect::Redirect(redirect_to_login(origin)));
    };
    let update = usecases::UpdateComment {
        id,
        author: account.username(),
        text: data.text,
    };
    match flows::update_comment(&db, update) {
        Ok(comment) => Ok(PageOrRedirect::Redirect(redirect_to_comments(
            &comment.news_id,
        ))),
        Err(err) => {
            let Some(message) = invalid_comment_message(&err) else {
                return Err(err.into());
            };
            let comment =
                usecases::authorize_comment_author(&db.shared()?, id, account.username())?;
            Ok(PageOrRedirect::Page(view::edit_comment(
                account.username(),
                &comment,
                view::CommentForm::with_error(data.text, message),
            )))
        }
    }
}

#[get("/delete_comment/<id>")]
pub fn get_delete_comment(
    db: sqlite::Connections,
    id: &str,
    account: Option<Account>,
    origin: &Origin,
) -> Result<PageOrRedirect> {
    let Some(account) = account else {
        return Ok(PageOrRedirect::Redirect(redirect_to_login(origin)));
    };
    let comment = usecases::authorize_comment_author(&db.shared()?, id, account.username())?;
    Ok(PageOrRedirect::Page(view::delete_comment(
        account.username(),
        &comment,
    )))
}

fn delete_comment(
    db: &sqlite::Connections,
    id: &str,
    account: Option<Account>,
    origin: &Origin,
) -> Result<Redirect> {
    let Some(account) = account else {
        return Ok(redirect_to_login(origin));
    };
    let comment = flows::delete_comment(db, id, account.username())?;
    Ok(redirect_to_comments(&comment.news_id))
}

#[post("/delete_comment/<id>")]
pub fn post_delete_comment(
    db: sqlite::Connections,
    id: &str,
    account: Option<Account>,
    origin: &Origin,
) -> Result<Redirect> {
    delete_comment(&db, id, account, origin)
}

#[delete("/delete_comment/<id>")]
pub fn delete_delete_comment(
    db: sqlite::Connections,
    id: &str,
    account: Option<Account>,
    origin: &Origin,
) -> Result<Redirect> {
    delete_comment(&db, id, account, origin)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[catch(404)]
pub fn not_found() -> Markup {
    view::not_found()
}

#[catch(500)]
pub fn internal_error() -> Markup {
    view::internal_error()
}

pub fn catchers() -> Vec<Catcher> {
    catchers![not_found, internal_error]
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_news,
        post_comment,
        get_edit_comment,
        post_edit_comment,
        get_delete_comment,
        post_delete_comment,
        delete_delete_comment,
        get_main_css,
        login::get_login,
        login::post_login,
        login::get_logout,
        login::post_logout,
        register::get_signup,
        register::post_signup,
    ]
}
