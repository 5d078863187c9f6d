use time::Date;

use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    pub id    : Id,
    pub title : String,
    pub text  : String,
    /// Publication date
    pub date  : Date,
}
