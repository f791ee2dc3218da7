//! The catalog service boundary
//!
//! The catalog is the external system of record for book metadata, full page
//! text, and authentication. The core only sees this trait; transports live
//! in `bibliotek-client`.

use crate::error::{AuthError, CatalogError};
use crate::types::{AdminCredentials, Book, BookSummary, StudentCredentials, StudentProfile};

/// Trait for the remote catalog service consumed by the reader.
///
/// All calls are synchronous with a bounded timeout; a failure leaves the
/// caller's state untouched.
pub trait CatalogService {
    /// List book summaries, without page text
    fn list_books(&self) -> Result<Vec<BookSummary>, CatalogError>;

    /// Fetch one book with its full page text
    fn get_book(&self, id: &str) -> Result<Book, CatalogError>;

    /// Log in as a student; the catalog echoes back the profile it recorded
    fn login_student(&self, creds: &StudentCredentials) -> Result<StudentProfile, AuthError>;

    /// Log in as an administrator
    fn login_admin(&self, creds: &AdminCredentials) -> Result<(), AuthError>;
}

/// A fixed in-memory catalog, useful for tests and offline demos
#[derive(Debug, Default)]
pub struct StaticCatalog {
    books: Vec<Book>,
}

impl StaticCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl CatalogService for StaticCatalog {
    fn list_books(&self) -> Result<Vec<BookSummary>, CatalogError> {
        Ok(self.books.iter().map(Book::summary).collect())
    }

    fn get_book(&self, id: &str) -> Result<Book, CatalogError> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::BookNotFound(id.to_string()))
    }

    fn login_student(&self, creds: &StudentCredentials) -> Result<StudentProfile, AuthError> {
        Ok(StudentProfile {
            name: creds.name.clone(),
            roll_no: Some(creds.roll_no.clone()),
            department: Some(creds.department.clone()),
            year: Some(creds.year.clone()),
            login_time: None,
        })
    }

    fn login_admin(&self, _creds: &AdminCredentials) -> Result<(), AuthError> {
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_lookup() {
        let catalog = StaticCatalog::new(vec![
            Book::new("1", "Python Programming").with_pages(vec!["Basics...".into()]),
            Book::new("2", "Java Basics"),
        ]);

        let summaries = catalog.list_books().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].title, "Python Programming");

        let book = catalog.get_book("1").unwrap();
        assert_eq!(book.pages.len(), 1);

        assert!(matches!(
            catalog.get_book("missing"),
            Err(CatalogError::BookNotFound(_))
        ));
    }
}
