//! Noise denylist rules.
//!
//! Elements matching any rule here are removed by the stripper. The table
//! covers structural chrome, ARIA landmarks, naming conventions for
//! boilerplate regions, and non-rendering elements. Removal always takes
//! the whole matched subtree.

use dom_query::Selection;
use regex::Regex;

use crate::dom;
use crate::patterns::{CHROME_CLASS, COMMENT_CLASS, NAVIGATION_CLASS, OVERLAY_CLASS, PROMO_CLASS};
use crate::selector::utils::{attr, class, id, tag};
use crate::selector::Rule;

/// Noise denylist in application order.
///
/// Order does not affect the outcome: removals are independent, and a match
/// inside an already removed subtree is simply gone before its rule runs.
pub static DISCARD_RULES: &[Rule] = &[
    discard_rule_structural,
    discard_rule_landmark_role,
    discard_rule_named_noise,
    discard_rule_non_rendering,
];

/// Rule 1: structural chrome tags.
///
/// `header`, `nav`, `aside` and `footer` are boilerplate regions on news
/// pages regardless of where they sit in the tree.
#[must_use]
pub fn discard_rule_structural(sel: &Selection) -> bool {
    matches!(tag(sel).as_str(), "header" | "nav" | "aside" | "footer")
}

/// Rule 2: ARIA landmark and dialog roles.
#[must_use]
pub fn discard_rule_landmark_role(sel: &Selection) -> bool {
    matches!(
        attr(sel, "role").as_str(),
        "navigation" | "banner" | "contentinfo" | "complementary" | "dialog" | "alertdialog"
    )
}

/// Rule 3: boilerplate naming conventions.
///
/// Applies the compiled class/id pattern tables to container-like tags
/// only, so a stray keyword on `<article>` or `<body>` cannot wipe the
/// whole page. Class attributes are additionally tested token by token so
/// anchored patterns (like a bare `nav` token) work inside multi-class
/// values.
#[must_use]
pub fn discard_rule_named_noise(sel: &Selection) -> bool {
    if !matches!(
        tag(sel).as_str(),
        "div" | "dd" | "dt" | "li" | "ul" | "ol" | "dl" | "p" | "section" | "span" | "form"
    ) {
        return false;
    }

    let id_val = id(sel);
    let class_val = class(sel);

    let tables: [&Regex; 5] = [
        &NAVIGATION_CLASS,
        &CHROME_CLASS,
        &OVERLAY_CLASS,
        &COMMENT_CLASS,
        &PROMO_CLASS,
    ];

    for pattern in tables {
        if !id_val.is_empty() && pattern.is_match(&id_val) {
            return true;
        }
        if pattern.is_match(&class_val) {
            return true;
        }
        if class_val
            .split_whitespace()
            .any(|token| pattern.is_match(token))
        {
            return true;
        }
    }

    false
}

/// Rule 4: non-rendering elements.
///
/// Covers script-like tags plus elements hidden from rendering via the
/// HTML5 `hidden` attribute or `aria-hidden`.
#[must_use]
pub fn discard_rule_non_rendering(sel: &Selection) -> bool {
    if matches!(
        tag(sel).as_str(),
        "script" | "style" | "noscript" | "template"
    ) {
        return true;
    }
    dom::has_attribute(sel, "hidden") || attr(sel, "aria-hidden") == "true"
}
