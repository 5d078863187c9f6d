use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use yanews_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;
mod news;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_access() -> repo::Error {
    anyhow!("Write access to a read-only database connection").into()
}

fn resolve_news_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::news::dsl;
    schema::news::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|err| {
            log::warn!("Failed to resolve news '{id}': {err}");
            from_diesel_err(err)
        })
}
