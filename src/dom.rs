//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate so the pipeline stages talk to a
//! small, stable surface instead of the full `dom_query` API. Also home of
//! the visible-text derivation used by the locator gates.

use std::collections::HashSet;

use dom_query::NodeId;

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril: text accessors return it for zero-copy passing
pub use tendril::StrTendril;

/// Elements that contribute no rendered text.
pub const NON_RENDERING_SELECTOR: &str = "script, style, noscript, template";

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage. Includes text inside non-rendering elements; use
/// [`visible_text_len`] when rendering rules matter.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Length in characters of the text a browser would actually render.
///
/// Subtracts the text of `script`/`style`/`noscript`/`template` subtrees
/// from the raw text length. Nested non-rendering elements are counted once
/// (only the outermost subtree of each group is subtracted).
#[must_use]
pub fn visible_text_len(sel: &Selection) -> usize {
    let total = sel.text().chars().count();

    let hidden = sel.select(NON_RENDERING_SELECTOR);
    if hidden.length() == 0 {
        return total;
    }

    let hidden_ids: HashSet<NodeId> = hidden.nodes().iter().map(|n| n.id).collect();
    let mut hidden_chars = 0usize;
    for node in hidden.nodes() {
        let element = Selection::from(*node);
        if has_marked_ancestor(&element, &hidden_ids) {
            continue;
        }
        hidden_chars += element.text().chars().count();
    }

    total.saturating_sub(hidden_chars)
}

/// Walk ancestors checking membership in a precomputed id set.
fn has_marked_ancestor(sel: &Selection, marked: &HashSet<NodeId>) -> bool {
    let mut current = sel.parent();
    while current.length() > 0 {
        if let Some(node) = current.nodes().first() {
            if marked.contains(&node.id) {
                return true;
            }
        }
        current = current.parent();
    }
    false
}

// === Tree Manipulation ===

/// Remove the selected elements from their tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Append HTML content as new children of the selection
#[inline]
pub fn append_html(sel: &Selection, html: &str) {
    sel.append_html(html);
}

/// Clone a subtree into an owned, detached document.
///
/// The returned document re-parses the selection's outer HTML, so mutating
/// it can never touch the source tree.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    Document::from(sel.html().to_string())
}
