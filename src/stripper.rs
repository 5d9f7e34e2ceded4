//! Noise stripper stage.
//!
//! Clones the chosen root into an owned document, then removes every
//! descendant matching the noise denylist. The source tree is never
//! touched; other consumers of the page keep an intact document.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::Options;
use crate::selector;
use crate::selector::discard::DISCARD_RULES;
use crate::selector::utils::{id_class, lower};

/// Strip boilerplate subtrees from a clone of `root`.
///
/// Returns the owned, detached clone with all denylisted regions removed.
/// Absence of any match is a normal, silent outcome. Matches nested inside
/// an already removed subtree are no-ops.
#[must_use]
pub fn strip(root: &Selection, options: &Options) -> Document {
    let clone = dom::clone_subtree(root);
    let scope = clone.select("body");

    for rule in DISCARD_RULES {
        for matched in selector::query_all(&scope, *rule) {
            dom::remove(&matched);
        }
    }

    if !options.extra_noise_patterns.is_empty() {
        remove_extra_patterns(&scope, &options.extra_noise_patterns);
    }

    clone
}

/// Caller-supplied denylist extension: substring match against the
/// lowercased id+class of every remaining element.
fn remove_extra_patterns(scope: &Selection, patterns: &[String]) {
    let needles: Vec<String> = patterns.iter().map(|p| lower(p)).collect();

    let mut doomed = Vec::new();
    for node in scope.select("*").nodes() {
        let element = Selection::from(*node);
        let marker = lower(&id_class(&element));
        if marker.is_empty() {
            continue;
        }
        if needles.iter().any(|needle| marker.contains(needle)) {
            doomed.push(element);
        }
    }

    for element in doomed {
        dom::remove(&element);
    }
}
