//! Configuration options for the extraction pipeline.
//!
//! Every heuristic threshold is a field with the reference calibration as
//! its default. The values are design knobs, not contracts: tune them per
//! deployment rather than editing the pipeline.

/// Configuration options for readable-text extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the reference calibration.
///
/// # Example
///
/// ```rust
/// use storytext::Options;
///
/// let options = Options {
///     min_paragraph_len: 60,
///     ..Options::default()
/// };
/// assert_eq!(options.min_candidate_text_len, 400);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum rendered text length for a selector match to be accepted as
    /// the article root. Guards against structurally plausible but
    /// near-empty containers.
    ///
    /// Default: `400`
    pub min_candidate_text_len: usize,

    /// Minimum number of paragraph descendants for a container to survive
    /// the density scan.
    ///
    /// Default: `3`
    pub min_cluster_paragraphs: usize,

    /// Minimum summed paragraph text length (characters) for a container
    /// to survive the density scan.
    ///
    /// Default: `600`
    pub min_cluster_text_len: usize,

    /// Minimum length (characters) for a paragraph to count as prose when
    /// flattening. Shorter ones read as captions, bylines, or UI labels.
    ///
    /// Default: `40`
    pub min_paragraph_len: usize,

    /// Minimum number of qualifying paragraphs for paragraph-level output.
    /// Below this the flattener uses the whole node's text instead.
    ///
    /// Default: `3`
    pub min_paragraph_count: usize,

    /// Minimum extracted length (characters) for a payload to be worth
    /// sending to the analysis service. This is consumer policy, kept
    /// deliberately independent of the locator gates above.
    ///
    /// Default: `200`
    pub min_payload_len: usize,

    /// Extra noise patterns removed by the stripper, matched as lowercase
    /// substrings of each element's id and class attributes.
    ///
    /// Default: empty
    pub extra_noise_patterns: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_candidate_text_len: 400,
            min_cluster_paragraphs: 3,
            min_cluster_text_len: 600,
            min_paragraph_len: 40,
            min_paragraph_count: 3,
            min_payload_len: 200,
            extra_noise_patterns: Vec::new(),
        }
    }
}
