use maud::{html, Markup};

mod comment;
mod login;
mod news;
mod page;
mod register;

pub use comment::*;
pub use login::*;
pub use news::*;
use page::*;
pub use register::*;

pub fn not_found() -> Markup {
    page(
        "Not found",
        None,
        None,
        html! {
            h1 { "404" }
            p { "The requested page could not be found." }
            a href="/" { "Back to the news" }
        },
    )
}

pub fn internal_error() -> Markup {
    page(
        "Internal server error",
        None,
        None,
        html! {
            h1 { "500" }
            p { "We are so sorry! An internal server error has occurred. Please try again later." }
        },
    )
}
