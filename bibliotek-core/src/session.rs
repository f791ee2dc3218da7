//! Reader session state machine
//!
//! Tracks which book is open and which page is being viewed. The page index
//! walks a closed range: 0 is the cover, `1..=pages.len()` are content pages,
//! and `pages.len() + 1` is the completion screen. Navigation clamps at the
//! boundaries and never errors.

use crate::types::Book;
use serde::{Deserialize, Serialize};

/// The in-memory reader state: either closed, or one open book snapshot with
/// the active page index. An explicit value object, owned by a single view
/// and never shared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReaderSession {
    current: Option<OpenBook>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct OpenBook {
    book: Book,
    index: usize,
}

/// What the active page index maps to for display
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<'a> {
    /// Index 0: title, author, category, page count, call to action
    Cover { book: &'a Book },

    /// Index 1..=total: one raw content page, to be run through the
    /// classifier/renderer pipeline
    Content {
        /// 1-based page number
        number: usize,
        total: usize,
        text: &'a str,
    },

    /// The completion index: the book has been fully traversed
    Finished { book: &'a Book },
}

impl ReaderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a book, always landing on the cover regardless of prior state
    pub fn open(&mut self, book: Book) {
        self.current = Some(OpenBook { book, index: 0 });
    }

    /// Close the reader, discarding the snapshot
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The open book snapshot, if any
    pub fn book(&self) -> Option<&Book> {
        self.current.as_ref().map(|open| &open.book)
    }

    /// The active page index, if a book is open
    pub fn page_index(&self) -> Option<usize> {
        self.current.as_ref().map(|open| open.index)
    }

    /// Advance one page. The index may step onto the completion screen at
    /// `pages.len() + 1`, but no further.
    pub fn next(&mut self) {
        if let Some(open) = self.current.as_mut() {
            if open.index <= open.book.pages.len() {
                open.index += 1;
            }
        }
    }

    /// Go back one page; no-op on the cover
    pub fn prev(&mut self) {
        if let Some(open) = self.current.as_mut() {
            if open.index > 0 {
                open.index -= 1;
            }
        }
    }

    /// Jump to a page index, clamped to the cover/content range
    /// `[0, pages.len()]`. The completion screen is only reachable by
    /// walking past the last page with [`ReaderSession::next`].
    pub fn jump_to(&mut self, index: i64) {
        if let Some(open) = self.current.as_mut() {
            let last = open.book.pages.len() as i64;
            open.index = index.clamp(0, last) as usize;
        }
    }

    /// Fraction of the book read, as a rounded percentage.
    ///
    /// Matches the catalog frontend exactly: `round(index / max(pages, 1) *
    /// 100)`, deliberately unclamped, so the completion index reads slightly
    /// above 100.
    pub fn percent_read(&self) -> Option<u32> {
        self.current.as_ref().map(|open| {
            let total = open.book.pages.len().max(1);
            ((open.index as f64 / total as f64) * 100.0).round() as u32
        })
    }

    /// What the current index should display
    pub fn view(&self) -> Option<PageView<'_>> {
        let open = self.current.as_ref()?;
        let total = open.book.pages.len();
        Some(match open.index {
            0 => PageView::Cover { book: &open.book },
            i if i <= total => PageView::Content {
                number: i,
                total,
                text: &open.book.pages[i - 1],
            },
            _ => PageView::Finished { book: &open.book },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_page_book() -> Book {
        Book::new("b-1", "Sample").with_pages(vec![
            "Page one".into(),
            "Page two".into(),
            "Page three".into(),
        ])
    }

    #[test]
    fn test_open_resets_to_cover() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());
        session.next();
        session.next();
        assert_eq!(session.page_index(), Some(2));

        // Reopening always lands on the cover
        session.open(three_page_book());
        assert_eq!(session.page_index(), Some(0));
    }

    #[test]
    fn test_next_caps_at_completion_index() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());
        for _ in 0..10 {
            session.next();
        }
        assert_eq!(session.page_index(), Some(4));
        assert!(matches!(session.view(), Some(PageView::Finished { .. })));
    }

    #[test]
    fn test_next_from_last_page_reaches_completion() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());
        session.jump_to(3);
        session.next();
        assert_eq!(session.page_index(), Some(4));
        session.next();
        assert_eq!(session.page_index(), Some(4));
    }

    #[test]
    fn test_prev_floors_at_cover() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());
        session.prev();
        assert_eq!(session.page_index(), Some(0));
    }

    #[test]
    fn test_jump_clamps_both_ends() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());

        session.jump_to(-5);
        assert_eq!(session.page_index(), Some(0));

        session.jump_to(102);
        assert_eq!(session.page_index(), Some(3));
    }

    #[test]
    fn test_navigation_on_closed_session_is_noop() {
        let mut session = ReaderSession::new();
        session.next();
        session.prev();
        session.jump_to(7);
        assert!(!session.is_open());
        assert_eq!(session.view(), None);
        assert_eq!(session.percent_read(), None);
    }

    #[test]
    fn test_close_clears_state() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());
        session.close();
        assert!(!session.is_open());
        assert_eq!(session.book(), None);
    }

    #[test]
    fn test_view_mapping() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());

        assert!(matches!(session.view(), Some(PageView::Cover { .. })));

        session.next();
        match session.view() {
            Some(PageView::Content { number, total, text }) => {
                assert_eq!(number, 1);
                assert_eq!(total, 3);
                assert_eq!(text, "Page one");
            }
            other => panic!("expected content view, got {:?}", other),
        }
    }

    #[test]
    fn test_percent_read_unclamped_at_completion() {
        let mut session = ReaderSession::new();
        session.open(three_page_book());
        assert_eq!(session.percent_read(), Some(0));

        session.jump_to(3);
        assert_eq!(session.percent_read(), Some(100));

        // Completion index: 4/3 rounds to 133, deliberately over 100
        session.next();
        assert_eq!(session.percent_read(), Some(133));
    }

    #[test]
    fn test_percent_read_with_no_pages() {
        let mut session = ReaderSession::new();
        session.open(Book::new("b-0", "Empty"));
        // max(pages, 1) guards the division
        assert_eq!(session.percent_read(), Some(0));
        session.next();
        assert_eq!(session.percent_read(), Some(100));
    }
}
