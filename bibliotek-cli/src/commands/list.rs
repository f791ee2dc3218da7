//! List command implementation

use anyhow::{Context, Result};
use bibliotek_client::CatalogClient;
use bibliotek_core::CatalogService;

/// List catalog books, optionally filtered by category
pub fn list(client: &CatalogClient, category: Option<&str>, json: bool) -> Result<()> {
    let mut books = client
        .list_books()
        .context("Failed to load the book list from the catalog")?;

    if let Some(wanted) = category {
        books.retain(|b| {
            b.category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(wanted))
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    for book in &books {
        let mut line = format!("{} [{}] {}", book.cover_glyph(), book.id, book.title);
        if let Some(author) = &book.author {
            line.push_str(&format!(" — {}", author));
        }
        if let Some(category) = &book.category {
            line.push_str(&format!(" · {}", category));
        }
        line.push_str(&format!(" · {} pages", book.page_count));
        if let Some(avg) = book.average_rating() {
            line.push_str(&format!(" · ★{:.1}", avg));
        }
        if book.is_ebook {
            line.push_str(" · e-book");
        }
        println!("{}", line);
    }
    println!("{} book(s)", books.len());

    Ok(())
}
