//! Selector infrastructure.
//!
//! A selector rule is a plain predicate over a selection. The candidate
//! table and the noise denylist are both ordered slices of rules, so
//! priority and membership live in data rather than in pipeline control
//! flow.

use dom_query::Selection;

pub mod candidates;
pub mod discard;
pub mod utils;

/// A selector rule that tests whether an element matches certain criteria.
pub type Rule = fn(&Selection) -> bool;

/// Find the first descendant matching the rule, in document order.
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            return Some(sel);
        }
    }
    None
}

/// Collect every descendant matching the rule, in document order.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn is_target(sel: &Selection) -> bool {
        utils::class(sel).contains("target")
    }

    #[test]
    fn query_finds_first_match_in_document_order() {
        let doc = dom::parse(
            r#"
            <div>
                <section><p class="target">deep first</p></section>
                <p class="target">shallow second</p>
            </div>
        "#,
        );
        let root = doc.select("div");

        let result = query(&root, is_target);
        assert!(result.is_some());
        assert!(dom::text_content(&result.unwrap()).contains("deep first"));
    }

    #[test]
    fn query_returns_none_without_match() {
        let doc = dom::parse("<div><p>content</p></div>");
        let root = doc.select("div");

        fn never(_sel: &Selection) -> bool {
            false
        }

        assert!(query(&root, never).is_none());
    }

    #[test]
    fn query_all_preserves_document_order() {
        let doc = dom::parse(
            r#"
            <div>
                <p class="target">1</p>
                <section><p class="target">2</p></section>
                <p class="target">3</p>
            </div>
        "#,
        );
        let root = doc.select("div");

        let results = query_all(&root, is_target);
        assert_eq!(results.len(), 3);
        assert_eq!(dom::text_content(&results[0]), "1".into());
        assert_eq!(dom::text_content(&results[1]), "2".into());
        assert_eq!(dom::text_content(&results[2]), "3".into());
    }
}
