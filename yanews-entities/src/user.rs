use crate::password::Password;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username : String,
    pub password : Password,
}
