//! Database models backing the member repository.

pub mod config;
pub mod member;
pub mod team;
