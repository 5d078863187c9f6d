mod authorize;
mod create_comment;
mod create_news;
mod delete_comment;
mod error;
mod load_news;
mod login;
mod register;
mod update_comment;


pub use self::{
    authorize::*, create_comment::*, create_news::*, delete_comment::*, error::Error,
    load_news::*, login::*, register::*, update_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
