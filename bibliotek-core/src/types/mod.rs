//! Core types for the Bibliotek data model

mod auth;
mod block;
mod book;
mod stats;

pub use auth::{AdminCredentials, StudentCredentials, StudentProfile};
pub use block::Block;
pub use book::{Book, BookSummary, DEFAULT_COVER};
pub use stats::{AdminStats, Feedback, PreBooking, StudentUsage};
