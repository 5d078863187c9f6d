pub mod entities {
    pub use yanews_entities::{comment::*, id::*, news::*, password::*, time::*, user::*};
}

pub mod profanity;
pub mod repositories;
pub mod usecases;
pub mod util;
