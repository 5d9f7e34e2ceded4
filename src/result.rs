//! Result and payload types.
//!
//! `ExtractionResult` is what the pipeline produces. `Payload` is the
//! `{title, url, text}` record the analysis service expects, built from a
//! result plus the source URL the caller already knows.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Result of readable-text extraction from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// The flattened, whitespace-normalized article text. May be empty;
    /// emptiness is a reportable outcome, not a failure.
    pub text: String,

    /// Page title, carried alongside the text for the consumer.
    pub title: Option<String>,
}

impl ExtractionResult {
    /// True when no readable text was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Record sent to the analysis service for scoring.
///
/// Serializes to the wire shape `{"title": ..., "url": ..., "text": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Page title.
    pub title: String,

    /// Page URL the text was extracted from.
    #[serde(rename = "url")]
    pub source_url: String,

    /// Extracted article text.
    pub text: String,
}

impl Payload {
    /// Build a payload, validating the source URL.
    pub fn new(
        title: impl Into<String>,
        source_url: &str,
        text: impl Into<String>,
    ) -> Result<Self> {
        let parsed = Url::parse(source_url)?;
        Ok(Self {
            title: title.into(),
            source_url: parsed.to_string(),
            text: text.into(),
        })
    }

    /// Build a payload from an extraction result and the page's URL.
    pub fn from_extraction(result: ExtractionResult, source_url: &str) -> Result<Self> {
        Self::new(result.title.unwrap_or_default(), source_url, result.text)
    }

    /// Consumer-side usability gate: does the text meet the minimum length
    /// worth scoring? A failing check is a policy decision, never an error.
    #[must_use]
    pub fn is_sufficient(&self, min_len: usize) -> bool {
        self.text.chars().count() >= min_len
    }

    /// Serialize to the analysis service's wire format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_to_wire_shape() {
        let payload = Payload::new("Title", "https://example.com/story", "Body text").unwrap();
        let json = payload.to_json().unwrap();
        assert!(json.contains(r#""title":"Title""#));
        assert!(json.contains(r#""url":"https://example.com/story""#));
        assert!(json.contains(r#""text":"Body text""#));
    }

    #[test]
    fn payload_rejects_invalid_url() {
        let result = Payload::new("Title", "not a url", "Body text");
        assert!(result.is_err());
    }

    #[test]
    fn sufficiency_is_a_threshold_comparison() {
        let payload = Payload::new("T", "https://example.com/", "x".repeat(200)).unwrap();
        assert!(payload.is_sufficient(200));
        assert!(!payload.is_sufficient(201));
    }

    #[test]
    fn from_extraction_defaults_missing_title() {
        let result = ExtractionResult {
            text: "body".to_string(),
            title: None,
        };
        let payload = Payload::from_extraction(result, "https://example.com/").unwrap();
        assert_eq!(payload.title, "");
        assert_eq!(payload.text, "body");
    }

    #[test]
    fn empty_result_reports_empty() {
        assert!(ExtractionResult::default().is_empty());
        assert!(!ExtractionResult {
            text: "t".to_string(),
            title: None
        }
        .is_empty());
    }
}
