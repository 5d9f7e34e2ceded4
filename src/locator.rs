//! Candidate locator stage.
//!
//! Walks the candidate rule table in priority order, gates each first match
//! on rendered text length, and falls back to a paragraph-density scan and
//! finally the document body. The function is total: it always returns a
//! node for any well-formed document.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::Options;
use crate::selector::candidates::CANDIDATE_RULES;
use crate::selector::utils::is_one_of_tags;
use crate::selector::{self, Rule};

/// Tags considered container-like by the density scan.
const CONTAINER_TAGS: &[&str] = &["article", "main", "section", "div"];

/// A container scored during the density fallback.
struct ScoredBlock<'a> {
    node: Selection<'a>,
    paragraph_count: usize,
    paragraph_text_len: usize,
}

/// Locate the root node most likely to contain the article body.
///
/// Selector walk first, density scan second, document body last. Never
/// fails; the worst case returns the body (or document root) itself.
#[must_use]
pub fn locate<'a>(doc: &'a Document, options: &Options) -> Selection<'a> {
    locate_with_rules(doc, CANDIDATE_RULES, options)
}

/// Locate with a caller-supplied candidate rule table.
///
/// The slice order is the priority order. Useful for callers that want to
/// extend or reorder the built-in table without forking the pipeline.
#[must_use]
pub fn locate_with_rules<'a>(
    doc: &'a Document,
    rules: &[Rule],
    options: &Options,
) -> Selection<'a> {
    let root = document_root(doc);

    // Phase 1: first match per rule, gated on rendered text length.
    // Structurally plausible but near-empty containers are common on real
    // pages, so a bare selector match is not enough.
    for rule in rules {
        if let Some(candidate) = selector::query(&root, *rule) {
            if dom::visible_text_len(&candidate) > options.min_candidate_text_len {
                return candidate;
            }
        }
    }

    // Phase 2: paragraph-density scan over generic containers.
    if let Some(block) = densest_block(&root, options) {
        if cfg!(debug_assertions) {
            eprintln!(
                "DEBUG: density scan selected a block with {} paragraphs, {} chars",
                block.paragraph_count, block.paragraph_text_len
            );
        }
        return block.node;
    }

    // Phase 3: the document body, so the pipeline is total.
    root
}

/// The document's top-level content node.
fn document_root(doc: &Document) -> Selection<'_> {
    let body = doc.select("body");
    if body.length() > 0 {
        return body.first();
    }
    doc.select("html").first()
}

/// Rank container nodes by summed paragraph text, document order breaking
/// ties (strictly-greater comparison keeps the earliest best block).
fn densest_block<'a>(root: &Selection<'a>, options: &Options) -> Option<ScoredBlock<'a>> {
    let mut best: Option<ScoredBlock<'a>> = None;

    for node in root.select("*").nodes() {
        let container = Selection::from(*node);
        if !is_one_of_tags(&container, CONTAINER_TAGS) {
            continue;
        }

        let mut paragraph_count = 0usize;
        let mut paragraph_text_len = 0usize;
        for paragraph_node in container.select("p").nodes() {
            let paragraph = Selection::from(*paragraph_node);
            paragraph_count += 1;
            paragraph_text_len += paragraph.text().trim().chars().count();
        }

        // Footers and related-links widgets rarely clear both bars at once.
        if paragraph_count < options.min_cluster_paragraphs
            || paragraph_text_len < options.min_cluster_text_len
        {
            continue;
        }

        let better = match &best {
            None => true,
            Some(current) => paragraph_text_len > current.paragraph_text_len,
        };
        if better {
            best = Some(ScoredBlock {
                node: container,
                paragraph_count,
                paragraph_text_len,
            });
        }
    }

    best
}
