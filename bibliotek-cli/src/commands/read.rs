//! Interactive read command
//!
//! Drives a `ReaderSession` over stdin: `n`/`p` page through the book,
//! `j <n>` jumps, `q` closes the reader.

use anyhow::{Context, Result};
use bibliotek_client::CatalogClient;
use bibliotek_core::{CatalogService, PageRenderer, PageView, ReaderSession};
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 46;

pub fn read(client: &CatalogClient, id: &str, page: Option<i64>) -> Result<()> {
    let book = client
        .get_book(id)
        .with_context(|| format!("Failed to fetch book '{}'", id))?;

    let mut session = ReaderSession::new();
    session.open(book);
    if let Some(p) = page {
        session.jump_to(p);
    }

    let renderer = PageRenderer::new();
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print_view(&session, &renderer);

        print!("[n]ext · [p]rev · [j N] jump · [q]uit > ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "" => {}
            "n" | "next" => session.next(),
            "p" | "prev" => session.prev(),
            "q" | "quit" => {
                session.close();
                break;
            }
            other => {
                let jump = other
                    .strip_prefix('j')
                    .and_then(|rest| rest.trim().parse::<i64>().ok());
                match jump {
                    Some(n) => session.jump_to(n),
                    None => println!("Unknown command '{}'", other),
                }
            }
        }
    }

    Ok(())
}

fn print_view(session: &ReaderSession, renderer: &PageRenderer) {
    let Some(view) = session.view() else {
        return;
    };
    let percent = session.percent_read().unwrap_or(0);

    match view {
        PageView::Cover { book } => {
            println!();
            println!("{} {}", book.cover_glyph(), book.title);
            if let Some(author) = &book.author {
                println!("by {}", author);
            }
            if let Some(category) = &book.category {
                println!("{}", category);
            }
            println!(
                "{} pages available — press 'n' to begin reading",
                book.pages.len()
            );
        }

        PageView::Content {
            number,
            total,
            text,
        } => {
            println!();
            println!("Page {} of {} · {}% read", number, total, percent);
            println!("{}", "─".repeat(RULE_WIDTH));
            print!("{}", renderer.render_page(text));
            println!("{}", "─".repeat(RULE_WIDTH));
        }

        PageView::Finished { book } => {
            println!();
            println!("🎉 You finished \"{}\"!", book.title);
        }
    }
}
