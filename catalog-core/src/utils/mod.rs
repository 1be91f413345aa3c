//! Shared helpers

pub mod logger;
pub mod slug;
pub mod validation;

pub use slug::slugify;
