//! Candidate selector rules.
//!
//! These rules identify the container most likely to hold the article body.
//! The table is ordered by priority: dedicated article-body markers come
//! first, generic content-named wrappers last. First accepted match wins,
//! so reordering the table changes behavior.

use dom_query::Selection;

use crate::selector::utils::{attr, class, contains, id, lower, starts_with, tag};
use crate::selector::Rule;

/// Candidate selector rules in priority order.
pub static CANDIDATE_RULES: &[Rule] = &[
    candidate_rule_article_body,
    candidate_rule_article,
    candidate_rule_main,
    candidate_rule_content_named,
];

/// Rule 1: explicit article body markers.
///
/// Matches `itemprop="articleBody"` and the class/id conventions CMSs use
/// for the prose container itself (`article-body`, `post-content`,
/// `entry-content`, `story-body` and friends).
#[must_use]
pub fn candidate_rule_article_body(sel: &Selection) -> bool {
    if !matches!(tag(sel).as_str(), "article" | "div" | "main" | "section") {
        return false;
    }

    let marker = lower(&format!("{}{}", id(sel), class(sel)));

    attr(sel, "itemprop") == "articleBody"
        || contains(&marker, "article-body")
        || contains(&marker, "article__body")
        || contains(&marker, "articlebody")
        || contains(&marker, "article-content")
        || contains(&marker, "article__content")
        || contains(&marker, "post-content")
        || contains(&marker, "post-body")
        || contains(&marker, "entry-content")
        || contains(&marker, "story-body")
        || contains(&marker, "story-content")
        || contains(&marker, "storybody")
}

/// Rule 2: semantic article containers.
#[must_use]
pub fn candidate_rule_article(sel: &Selection) -> bool {
    tag(sel) == "article" || attr(sel, "role") == "article"
}

/// Rule 3: main landmark.
///
/// `<main>`, `role="main"`, or a wrapper whose id starts with "main".
#[must_use]
pub fn candidate_rule_main(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    if tag_val == "main" {
        return true;
    }
    if !matches!(tag_val.as_str(), "article" | "div" | "section") {
        return false;
    }
    attr(sel, "role") == "main" || starts_with(&lower(&id(sel)), "main")
}

/// Rule 4: generic content-named wrappers (lowest priority).
///
/// Catches `id="content"`, `class="main-content"` style containers that
/// carry no semantic markup at all.
#[must_use]
pub fn candidate_rule_content_named(sel: &Selection) -> bool {
    if !matches!(tag(sel).as_str(), "div" | "section" | "main") {
        return false;
    }

    let id_lower = lower(&id(sel));
    let class_lower = lower(&class(sel));

    id_lower == "content"
        || class_lower == "content"
        || contains(&id_lower, "main-content")
        || contains(&class_lower, "main-content")
        || contains(&id_lower, "content-body")
        || contains(&class_lower, "content-body")
        || contains(&id_lower, "page-content")
        || contains(&class_lower, "page-content")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn article_body_rule_matches_itemprop() {
        let doc = dom::parse(r#"<div itemprop="articleBody">content</div>"#);
        let div = doc.select("div");
        assert!(candidate_rule_article_body(&div));
    }

    #[test]
    fn article_body_rule_matches_class_conventions() {
        let doc = dom::parse(r#"<section class="post-content">content</section>"#);
        let section = doc.select("section");
        assert!(candidate_rule_article_body(&section));
    }

    #[test]
    fn article_body_rule_rejects_wrong_tag() {
        let doc = dom::parse(r#"<span class="post-content">content</span>"#);
        let span = doc.select("span");
        assert!(!candidate_rule_article_body(&span));
    }

    #[test]
    fn article_rule_matches_tag_and_role() {
        let doc = dom::parse(r#"<article>a</article>"#);
        assert!(candidate_rule_article(&doc.select("article")));

        let doc = dom::parse(r#"<div role="article">a</div>"#);
        assert!(candidate_rule_article(&doc.select("div")));
    }

    #[test]
    fn main_rule_matches_landmark_forms() {
        let doc = dom::parse("<main>m</main>");
        assert!(candidate_rule_main(&doc.select("main")));

        let doc = dom::parse(r#"<div role="main">m</div>"#);
        assert!(candidate_rule_main(&doc.select("div")));

        let doc = dom::parse(r#"<div id="main-wrapper">m</div>"#);
        assert!(candidate_rule_main(&doc.select("div")));
    }

    #[test]
    fn content_named_rule_is_generic_fallback() {
        let doc = dom::parse(r#"<div id="content">c</div>"#);
        assert!(candidate_rule_content_named(&doc.select("div")));

        let doc = dom::parse(r#"<section class="main-content">c</section>"#);
        assert!(candidate_rule_content_named(&doc.select("section")));

        let doc = dom::parse(r#"<div class="sidebar">c</div>"#);
        assert!(!candidate_rule_content_named(&doc.select("div")));
    }
}
