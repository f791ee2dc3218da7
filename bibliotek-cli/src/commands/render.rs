//! Render command implementation

use anyhow::{bail, Context, Result};
use bibliotek_client::CatalogClient;
use bibliotek_core::{CatalogService, PageRenderer};
use std::fs;

/// Render a single page of a book to an HTML fragment
pub fn render(client: &CatalogClient, id: &str, page: usize, output: Option<&str>) -> Result<()> {
    let book = client
        .get_book(id)
        .with_context(|| format!("Failed to fetch book '{}'", id))?;

    if page == 0 {
        bail!("Page numbers start at 1");
    }
    let Some(text) = book.pages.get(page - 1) else {
        bail!(
            "Book '{}' has {} pages, no page {}",
            id,
            book.pages.len(),
            page
        );
    };

    let html = PageRenderer::new().render_page(text);

    match output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {}", path))?;
            println!("Wrote {}", path);
        }
        None => print!("{}", html),
    }

    Ok(())
}
