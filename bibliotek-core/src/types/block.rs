//! Semantic block types for classified page content

use serde::{Deserialize, Serialize};

/// One classified line of raw page text.
///
/// Every line of a page maps to exactly one block; blocks are produced
/// transiently by the classifier and consumed by the renderer, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    /// Blank line: a fixed vertical gap
    Spacer,

    /// Line drawn entirely from rule characters: a horizontal rule
    Divider,

    /// Chapter-level all-caps title
    Heading1(String),

    /// Numbered subsection title ("1.1 INTRODUCTION")
    Heading2(String),

    /// Bulleted list item, marker stripped
    Bullet(String),

    /// Equation or formula line (monospaced semantics)
    Formula(String),

    /// Ordinary prose
    Paragraph(String),
}

impl Block {
    /// The text carried by this block, if it carries any
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Spacer | Block::Divider => None,
            Block::Heading1(t)
            | Block::Heading2(t)
            | Block::Bullet(t)
            | Block::Formula(t)
            | Block::Paragraph(t) => Some(t),
        }
    }
}
