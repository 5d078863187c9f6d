#[macro_use]
extern crate log;

use yanews_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg) {
    web::run(connections.into(), enable_cors, cfg).await;
}
