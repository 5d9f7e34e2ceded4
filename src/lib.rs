//! # storytext
//!
//! Readable article-text extraction for news pages.
//!
//! Given an arbitrary HTML document, the pipeline deterministically locates
//! the subtree holding the article's main readable content, strips
//! boilerplate from an owned clone of it, and flattens the remainder into a
//! single whitespace-normalized plain-text string suitable for downstream
//! analysis.
//!
//! Three ordered stages, each taking a tree or node and returning a tree or
//! string:
//!
//! 1. **Locator** ([`locator::locate`]) walks an ordered candidate-selector
//!    table, gates matches on rendered text length, and degrades to a
//!    paragraph-density scan and finally the document body.
//! 2. **Stripper** ([`stripper::strip`]) clones the chosen root and removes
//!    every denylisted region (navigation, site chrome, modals, paywalls,
//!    cookie banners, comments, scripts) from the clone.
//! 3. **Flattener** ([`flattener::flatten`]) joins qualifying paragraphs,
//!    or falls back to the whole node's text, then normalizes whitespace.
//!
//! The pipeline is total: for any well-formed document it returns a string,
//! possibly empty, and never panics or errors.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main content here.</p></article></body></html>"#;
//!
//! let result = storytext::extract(html);
//! assert_eq!(result.title.as_deref(), Some("My Article"));
//! assert!(result.text.contains("Main content here."));
//! ```
//!
//! ## Sending text to an analysis service
//!
//! ```rust
//! use storytext::{extract, Options, Payload};
//!
//! let result = extract("<html><body><p>Short page.</p></body></html>");
//! let payload = Payload::from_extraction(result, "https://example.com/story")?;
//! if payload.is_sufficient(Options::default().min_payload_len) {
//!     let _json = payload.to_json()?;
//!     // hand off to the transport layer
//! }
//! # Ok::<(), storytext::Error>(())
//! ```

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Text flattener stage.
pub mod flattener;

/// Candidate locator stage.
pub mod locator;

/// Page title extraction.
pub mod metadata;

/// Results panel upsert for hosts that render analysis output.
pub mod overlay;

/// Selector infrastructure: rule tables for candidates and noise.
pub mod selector;

/// Noise stripper stage.
pub mod stripper;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ExtractionResult, Payload};

use dom::Document;

/// Extract readable article text from an HTML document using default
/// options.
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    extract_with_options(html, &Options::default())
}

/// Extract readable article text with custom options.
///
/// # Example
///
/// ```rust
/// use storytext::{extract_with_options, Options};
///
/// let options = Options {
///     min_paragraph_len: 10,
///     ..Options::default()
/// };
/// let result = extract_with_options(
///     "<html><body><p>A rather short paragraph.</p></body></html>",
///     &options,
/// );
/// assert!(!result.text.is_empty());
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractionResult {
    if cfg!(debug_assertions) {
        eprintln!("DEBUG: extracting readable text ({} chars of HTML)", html.len());
    }

    let document = dom::parse(html);
    extract_document(&document, options)
}

/// Run the pipeline against an already parsed document.
///
/// The document is only read; the stripper works on an owned clone of the
/// located root, so the tree stays intact for other consumers.
#[must_use]
pub fn extract_document(document: &Document, options: &Options) -> ExtractionResult {
    let title = metadata::page_title(document);

    let root = locator::locate(document, options);
    let cleaned = stripper::strip(&root, options);
    let cleaned_root = cleaned.select("body");
    let text = flattener::flatten(&cleaned_root, options);

    ExtractionResult { text, title }
}

/// Extract from raw bytes, detecting the character encoding from meta tags
/// and transcoding to UTF-8 first.
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractionResult {
    extract_bytes_with_options(html, &Options::default())
}

/// Extract from raw bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractionResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
