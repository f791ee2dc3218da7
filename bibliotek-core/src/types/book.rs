//! Book types - catalog summaries and full reading snapshots

use serde::{Deserialize, Serialize};

/// Glyph shown when a book carries no cover of its own
pub const DEFAULT_COVER: &str = "📖";

/// A catalog listing entry: everything about a book except its page text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    /// Catalog identifier (the backend mixes numeric and slug-style ids,
    /// so this is always carried as a string)
    #[serde(deserialize_with = "de_string_or_number")]
    pub id: String,

    /// Book title
    pub title: String,

    /// Author, when the catalog knows it
    #[serde(default)]
    pub author: Option<String>,

    /// Subject category
    #[serde(default)]
    pub category: Option<String>,

    /// Cover glyph (emoji)
    #[serde(default)]
    pub cover: Option<String>,

    /// Whether the full text can be read in-app
    #[serde(default)]
    pub is_ebook: bool,

    /// Page count as reported by the catalog
    #[serde(default)]
    pub page_count: u32,

    /// Star ratings submitted by readers
    #[serde(default)]
    pub ratings: Vec<f64>,
}

/// A fully fetched book: summary fields plus the ordered page texts.
/// The reader holds this as a read-only snapshot once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(deserialize_with = "de_string_or_number")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub cover: Option<String>,

    #[serde(default)]
    pub is_ebook: bool,

    #[serde(default)]
    pub page_count: u32,

    /// Raw page texts, 1-indexed conceptually (page 1 is `pages[0]`)
    #[serde(default)]
    pub pages: Vec<String>,

    #[serde(default)]
    pub ratings: Vec<f64>,
}

impl BookSummary {
    /// Mean of the submitted ratings, if any exist
    pub fn average_rating(&self) -> Option<f64> {
        average(&self.ratings)
    }

    /// Cover glyph, falling back to the placeholder
    pub fn cover_glyph(&self) -> &str {
        self.cover.as_deref().unwrap_or(DEFAULT_COVER)
    }
}

impl Book {
    /// Create a book with the given identifier and title; the remaining
    /// fields start empty and can be filled in struct-update style.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            category: None,
            cover: None,
            is_ebook: false,
            page_count: 0,
            pages: Vec::new(),
            ratings: Vec::new(),
        }
    }

    /// Attach page texts, keeping `page_count` in sync
    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.page_count = pages.len() as u32;
        self.pages = pages;
        self
    }

    /// Mean of the submitted ratings, if any exist
    pub fn average_rating(&self) -> Option<f64> {
        average(&self.ratings)
    }

    /// Cover glyph, falling back to the placeholder
    pub fn cover_glyph(&self) -> &str {
        self.cover.as_deref().unwrap_or(DEFAULT_COVER)
    }

    /// The summary view of this book, without page text
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            cover: self.cover.clone(),
            is_ebook: self.is_ebook,
            page_count: self.page_count,
            ratings: self.ratings.clone(),
        }
    }
}

fn average(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}

/// The backend serves ids both as JSON numbers and as strings
fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}
