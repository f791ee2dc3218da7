//! Heuristic line classifier
//!
//! Book pages arrive from the catalog as plain text with no embedded markup;
//! headings, dividers, bullets and formulas are recognized purely by shape.
//! Classification is a fixed-priority rule chain: the first rule that matches
//! wins, and the order is load-bearing (a lone `-` must be a divider before
//! the bullet rule can see it, and an all-caps equation-looking line is still
//! a chapter heading).

use crate::types::Block;
use regex::Regex;
use std::sync::OnceLock;

/// Characters a divider line may consist of
const DIVIDER_CHARS: [char; 5] = ['═', '─', '=', '-', ' '];

/// Markers that open a bullet item
const BULLET_MARKERS: [char; 4] = ['•', '-', '*', '→'];

/// Symbols that mark a line as a candidate formula
const MATH_CHARS: [char; 23] = [
    '=', '∝', '≈', '→', '←', '∞', '∑', '∫', '∂', '√', 'α', 'β', 'γ', 'δ', 'ω', 'φ', 'θ', 'Φ',
    'η', 'Ω', '×', '÷', '±',
];

/// All-caps heading length bounds (in characters, inclusive)
const HEADING_MIN_LEN: usize = 5;
const HEADING_MAX_LEN: usize = 119;

/// Formula lines must stay shorter than this
const FORMULA_MAX_LEN: usize = 100;

/// Numbered subsection headings: "1.1 INTRODUCTION"
fn numbered_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+\s+[A-Z]").expect("valid regex"))
}

/// A run of prose-length lowercase; its presence vetoes the formula rule
fn lowercase_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z]{5,}").expect("valid regex"))
}

/// Classify one line of raw page text into exactly one [`Block`].
///
/// Total and deterministic: every string maps to some block, with
/// [`Block::Paragraph`] as the universal fallback. Never panics.
pub fn classify_line(line: &str) -> Block {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Block::Spacer;
    }

    if trimmed.chars().all(|c| DIVIDER_CHARS.contains(&c)) {
        return Block::Divider;
    }

    // Numbered subsections are checked ahead of the all-caps rule:
    // "1.1 OVERVIEW" contains no lowercase and would otherwise be swallowed
    // as a chapter heading.
    if numbered_heading_re().is_match(trimmed) {
        return Block::Heading2(trimmed.to_string());
    }

    let len = trimmed.chars().count();
    if (HEADING_MIN_LEN..=HEADING_MAX_LEN).contains(&len)
        && trimmed.chars().any(char::is_uppercase)
        && !trimmed.chars().any(char::is_lowercase)
    {
        return Block::Heading1(trimmed.to_string());
    }

    let mut chars = trimmed.chars();
    if let Some(first) = chars.next() {
        if BULLET_MARKERS.contains(&first) {
            // Strip the marker, then one following space if present.
            let rest = chars.as_str();
            let text = rest.strip_prefix(' ').unwrap_or(rest);
            return Block::Bullet(text.to_string());
        }
    }

    if len < FORMULA_MAX_LEN
        && trimmed.chars().any(|c| MATH_CHARS.contains(&c))
        && !lowercase_run_re().is_match(trimmed)
    {
        return Block::Formula(trimmed.to_string());
    }

    Block::Paragraph(trimmed.to_string())
}

/// Classify every line of a page.
///
/// The result always has exactly one block per input line (splitting on
/// `'\n'`), so downstream rendering can never drop or reorder content.
pub fn classify_page(text: &str) -> Vec<Block> {
    text.split('\n').map(classify_line).collect()
}
