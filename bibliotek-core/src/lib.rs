//! Bibliotek Core Library
//!
//! This crate provides the domain logic for the Bibliotek digital-library
//! client: the book data model, the heuristic line classifier, the page
//! renderer, and the reader session state machine. The catalog service that
//! owns the books is reached through the [`catalog::CatalogService`] trait;
//! this crate performs no I/O of its own.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod render;
pub mod session;
pub mod types;

pub use catalog::CatalogService;
pub use classify::{classify_line, classify_page};
pub use error::{AuthError, BibliotekError, CatalogError, Result};
pub use render::PageRenderer;
pub use session::{PageView, ReaderSession};
pub use types::{
    AdminCredentials, AdminStats, Block, Book, BookSummary, Feedback, PreBooking,
    StudentCredentials, StudentProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_to_finish_walkthrough() {
        let book =
            Book::new("b-1", "Test Book").with_pages(vec!["one".into(), "two".into()]);
        let mut session = ReaderSession::new();
        session.open(book);

        assert!(matches!(session.view(), Some(PageView::Cover { .. })));
        session.next();
        session.next();
        session.next();
        assert!(matches!(session.view(), Some(PageView::Finished { .. })));
    }
}
