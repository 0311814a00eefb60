//! Value Object Module

pub mod book_description;
pub mod book_id;
pub mod book_title;
