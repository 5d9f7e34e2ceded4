//! Compiled regex patterns for noise detection and text cleanup.
//!
//! All patterns are compiled once at first use via `LazyLock`. The class/id
//! patterns are matched against element naming conventions by the discard
//! rules; keeping them here as data means the denylist can be tuned without
//! touching pipeline logic.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Noise naming conventions
// =============================================================================

/// Matches class/id names indicating navigation elements.
///
/// "nav" is anchored to token boundaries so layout containers like
/// "in-page-nav-container" still match but "canvas" or "navajo" do not.
/// Generic "menu" uses word boundaries to catch "main-menu", "menu-item"
/// without matching "contextmenu" (a CSS styling hook, not navigation).
pub static NAVIGATION_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^nav$|^nav[-_]|[-_]nav$|[-_]nav[-_]|navbar|navigation|\bmenu\b|main[-_]?menu|breadcrumbs?\b|skip[-_]?link)",
    )
    .expect("NAVIGATION_CLASS regex")
});

/// Matches class/id names indicating site chrome (mastheads, site-wide
/// headers and footers).
///
/// Deliberately does NOT match bare "header"/"footer" so article-scoped
/// compounds like "article-header" survive as content.
pub static CHROME_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(site[-_]?header|site[-_]?footer|page[-_]?header|page[-_]?footer|global[-_]?header|global[-_]?footer|\bmasthead\b|top[-_]?bar|bottom[-_]?bar|colophon)",
    )
    .expect("CHROME_CLASS regex")
});

/// Matches class/id names indicating interruptive layers: modals, popups,
/// paywalls, subscription prompts, and cookie/consent/legal banners.
pub static OVERLAY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bmodal\b|pop[-_]?up\b|\bpopup\b|\boverlay\b|paywall|paid[-_]?content|premium[-_]?content|\bsubscribe\b|subscription|newsletter|sign[-_]?up\b|\bsignup\b|sign[-_]?in\b|\bsignin\b|\blogin\b|cookie|consent|gdpr|\bbanner\b|interstitial|disclaimer|\blegal\b)",
    )
    .expect("OVERLAY_CLASS regex")
});

/// Matches class/id names indicating comment sections.
pub static COMMENT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bcomments?\b|comment[-_]?(list|section|area|form)|\brespond\b|\breply\b|replies|discussion|disqus|livefyre)",
    )
    .expect("COMMENT_CLASS regex")
});

/// Matches class/id names indicating promotional or engagement widgets:
/// ads, sharing toolbars, related-story rails.
pub static PROMO_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^ads?$|\badvert(isement)?s?\b|ad[-_]?(slot|wrapper|unit|container)|sponsor(ed)?\b|\bpromo\b|promotion|outbrain|taboola|\bsocial\b|shar(e|ing)\b|share[-_]?(bar|buttons?|tools?)|\brelated\b|recommended|trending|most[-_]?(read|popular)|top[-_]?stories)",
    )
    .expect("PROMO_CLASS regex")
});

// =============================================================================
// Text cleanup
// =============================================================================

/// Matches runs of whitespace (spaces, tabs, newlines) for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));
