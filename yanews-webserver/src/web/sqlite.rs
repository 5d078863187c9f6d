use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};
use std::ops::Deref;

/// The managed connection pool as a request guard.
///
/// Read-only and exclusive access are provided by the
/// wrapped pool.
#[derive(Clone)]
pub struct Connections(yanews_db_sqlite::Connections);

impl From<yanews_db_sqlite::Connections> for Connections {
    fn from(pool: yanews_db_sqlite::Connections) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = yanews_db_sqlite::Connections;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let db = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(db.inner().clone())
    }
}
