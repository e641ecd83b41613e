//! Domain entities and value objects of the member directory.

pub mod member;
pub mod search;
pub mod team;
pub mod types;
