//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # yanews-entities
//!
//! Reusable, agnostic domain entities for yanews.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod id;
pub mod news;
pub mod password;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
