//! Domain types and pure rules for the project portfolio service.

pub mod category;
pub mod error;
pub mod project;
pub mod slug;
pub mod types;
