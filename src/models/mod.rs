//! Data models for BookHive entities

pub mod book;
pub mod rental;
pub mod user;
