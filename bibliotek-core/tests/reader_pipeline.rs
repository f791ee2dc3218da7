//! Integration tests for the reader pipeline
//!
//! These exercise the full path a user action takes: the session state
//! machine selects a page, the classifier turns its raw text into blocks,
//! and the renderer produces the displayed fragment.

use bibliotek_core::{
    classify_line, classify_page, Block, Book, PageRenderer, PageView, ReaderSession,
};
use proptest::prelude::*;

fn physics_book() -> Book {
    Book::new("phys-1", "Engineering Mechanics").with_pages(vec![
        "CHAPTER ONE\n\nForce equation:\nF = ma\n\n• Apply Newton's law".to_string(),
    ])
}

#[test]
fn reading_the_first_page_end_to_end() {
    let mut session = ReaderSession::new();
    session.open(physics_book());
    session.next();

    let text = match session.view() {
        Some(PageView::Content { number, total, text }) => {
            assert_eq!(number, 1);
            assert_eq!(total, 1);
            text
        }
        other => panic!("expected content page, got {:?}", other),
    };

    let blocks = classify_page(text);
    assert_eq!(
        blocks,
        vec![
            Block::Heading1("CHAPTER ONE".into()),
            Block::Spacer,
            Block::Paragraph("Force equation:".into()),
            Block::Formula("F = ma".into()),
            Block::Spacer,
            Block::Bullet("Apply Newton's law".into()),
        ]
    );

    let html = PageRenderer::new().render_blocks(&blocks);
    assert_eq!(html.lines().count(), blocks.len());
}

#[test]
fn finishing_the_book_shows_completion_view() {
    let mut session = ReaderSession::new();
    session.open(physics_book());
    session.next();
    session.next();

    match session.view() {
        Some(PageView::Finished { book }) => assert_eq!(book.title, "Engineering Mechanics"),
        other => panic!("expected finished view, got {:?}", other),
    }
    // 2/1 at the completion index, unclamped
    assert_eq!(session.percent_read(), Some(200));
}

#[test]
fn missing_page_text_renders_as_empty_page_marker() {
    let mut session = ReaderSession::new();
    session.open(Book::new("b-2", "Blank").with_pages(vec![String::new()]));
    session.next();

    let text = match session.view() {
        Some(PageView::Content { text, .. }) => text,
        other => panic!("expected content page, got {:?}", other),
    };
    assert_eq!(
        PageRenderer::new().render_page(text),
        "<p><em>Empty page</em></p>\n"
    );
}

proptest! {
    /// Classification is total: every string maps to exactly one block
    /// without panicking.
    #[test]
    fn classify_line_is_total(line in "\\PC*") {
        let _ = classify_line(&line);
    }

    /// One block per input line, always.
    #[test]
    fn classify_page_preserves_line_count(text in "\\PC*") {
        let blocks = classify_page(&text);
        prop_assert_eq!(blocks.len(), text.split('\n').count());
    }

    /// Rendering never drops a block.
    #[test]
    fn rendered_element_count_matches_block_count(text in "[a-zA-Z0-9 =•\\-*→\\n]{0,200}") {
        let blocks = classify_page(&text);
        let html = PageRenderer::new().render_blocks(&blocks);
        prop_assert_eq!(html.lines().count(), blocks.len());
    }

    /// Navigation keeps the index inside the closed range
    /// `[0, pages.len() + 1]` no matter the action sequence.
    #[test]
    fn page_index_stays_in_bounds(
        page_count in 0usize..5,
        actions in proptest::collection::vec(0u8..4, 0..40),
    ) {
        let pages = (0..page_count).map(|i| format!("page {i}")).collect();
        let mut session = ReaderSession::new();
        session.open(Book::new("b", "Bounds").with_pages(pages));

        for action in actions {
            match action {
                0 => session.next(),
                1 => session.prev(),
                2 => session.jump_to(-3),
                _ => session.jump_to(page_count as i64 + 99),
            }
            let index = session.page_index().unwrap();
            prop_assert!(index <= page_count + 1);
        }
    }
}
