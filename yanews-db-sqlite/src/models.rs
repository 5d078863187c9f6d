// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds. Dates are
// stored as Julian day numbers.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = news)]
pub struct NewNews<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub text: &'a str,
    pub date: i32,
}

#[derive(Queryable)]
pub struct NewsEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub text: String,
    pub date: i32,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub news_rowid: i64,
    pub author: &'a str,
    pub created_at: i64,
    pub text: &'a str,
}

#[derive(Queryable)]
pub struct JoinedComment {
    pub id: String,
    pub news_id: String,
    pub author: String,
    pub created_at: i64,
    pub text: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub password: String,
}
