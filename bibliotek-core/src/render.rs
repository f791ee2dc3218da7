//! Page renderer: classified blocks to a styled document fragment

use crate::classify::classify_page;
use crate::types::Block;

/// Marker fragment emitted for a page with no text at all
const EMPTY_PAGE: &str = "<p><em>Empty page</em></p>\n";

/// Renders one page of classified blocks to an HTML fragment.
///
/// Each block maps to exactly one element, in input order; nothing is merged,
/// reordered, or dropped. The renderer performs no I/O and knows nothing
/// about the reader session.
pub struct PageRenderer;

impl PageRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the raw text of one page.
    ///
    /// An empty page yields the explicit empty-page marker rather than an
    /// empty fragment; missing content is not an error.
    pub fn render_page(&self, text: &str) -> String {
        if text.is_empty() {
            return EMPTY_PAGE.to_string();
        }
        self.render_blocks(&classify_page(text))
    }

    /// Render an already-classified block sequence
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        let mut html = String::new();
        for block in blocks {
            html.push_str(&self.block_to_html(block));
        }
        html
    }

    /// Map a single block to its element
    fn block_to_html(&self, block: &Block) -> String {
        match block {
            Block::Spacer => "<div class=\"spacer\"></div>\n".to_string(),
            Block::Divider => "<hr/>\n".to_string(),
            Block::Heading1(text) => format!("<h1>{}</h1>\n", escape_html(text)),
            Block::Heading2(text) => format!("<h2>{}</h2>\n", escape_html(text)),
            Block::Bullet(text) => format!("<li>{}</li>\n", escape_html(text)),
            Block::Formula(text) => {
                format!("<code class=\"formula\">{}</code>\n", escape_html(text))
            }
            Block::Paragraph(text) => format!("<p>{}</p>\n", escape_html(text)),
        }
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
