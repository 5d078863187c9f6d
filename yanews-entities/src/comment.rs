use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub news_id    : Id,
    /// Username of the author
    pub author     : String,
    pub created_at : TimestampMs,
    pub text       : String,
}

impl Comment {
    pub fn is_authored_by(&self, username: &str) -> bool {
        self.author == username
    }
}
