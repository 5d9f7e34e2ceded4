//! Text flattener stage.
//!
//! Converts a cleaned subtree into one normalized plain-text string.
//! Paragraph-level extraction is strictly preferred: joining qualifying
//! `<p>` descendants naturally drops inline boilerplate that survived
//! stripping. Pages whose prose is not paragraph-wrapped fall back to the
//! whole node's text.

use dom_query::Selection;

use crate::options::Options;
use crate::patterns::WHITESPACE_NORMALIZE;

/// Flatten a cleaned node into normalized plain text.
///
/// The result may be empty; emptiness is a valid outcome and the caller
/// decides whether it is usable.
#[must_use]
pub fn flatten(root: &Selection, options: &Options) -> String {
    let mut paragraphs = Vec::new();

    for node in root.select("p").nodes() {
        let paragraph = Selection::from(*node);
        let text = paragraph.text();
        let trimmed = text.trim();
        // Short paragraphs are overwhelmingly captions, bylines, or UI
        // labels rather than prose.
        if trimmed.chars().count() >= options.min_paragraph_len {
            paragraphs.push(trimmed.to_string());
        }
    }

    let assembled = if paragraphs.len() >= options.min_paragraph_count {
        paragraphs.join(" ")
    } else {
        root.text().to_string()
    };

    normalize_whitespace(&assembled)
}

/// Collapse every whitespace run to a single space and trim the ends.
///
/// Idempotent: applying it to its own output is a no-op.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}
