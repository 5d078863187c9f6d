#[macro_use]
extern crate log;

mod create_comment;
mod create_news;
mod delete_comment;
mod register_user;
mod update_comment;

pub mod prelude {
    pub use super::{
        create_comment::*, create_news::*, delete_comment::*, register_user::*,
        update_comment::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use yanews_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use yanews_db_sqlite::Connections;
}
