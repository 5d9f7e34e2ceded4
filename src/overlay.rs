//! Results panel upsert.
//!
//! Hosts that render analysis results into a live tree need exactly one
//! panel per container, keyed by a fixed identifier. `upsert` replaces any
//! existing panel with that id before appending the new one, so repeated
//! renders never stack. The target container is always passed explicitly.

use dom_query::Selection;

use crate::dom;

/// Insert or replace the panel identified by `panel_id` inside `container`.
///
/// `panel_id` must be a plain identifier (letters, digits, hyphens,
/// underscores); it is interpolated into a selector and into markup.
pub fn upsert(container: &Selection, panel_id: &str, html: &str) {
    let existing = container.select(&format!("[id='{panel_id}']"));
    if existing.length() > 0 {
        dom::remove(&existing);
    }

    let panel = format!(r#"<div id="{panel_id}">{html}</div>"#);
    dom::append_html(container, &panel);
}
