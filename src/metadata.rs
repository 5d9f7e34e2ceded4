//! Page title extraction.

use dom_query::Document;

use crate::flattener::normalize_whitespace;

/// Extract the page title: `<title>` text first, `og:title` as fallback.
#[must_use]
pub fn page_title(doc: &Document) -> Option<String> {
    let title = doc.select("title");
    if title.length() > 0 {
        let text = normalize_whitespace(&title.first().text());
        if !text.is_empty() {
            return Some(text);
        }
    }

    let og_title = doc.select("meta[property='og:title']");
    if og_title.length() > 0 {
        if let Some(content) = og_title.first().attr("content") {
            let text = normalize_whitespace(&content);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn prefers_title_element() {
        let doc = dom::parse(
            r#"<html><head><title>  Match   Report </title>
               <meta property="og:title" content="OG Title"></head><body></body></html>"#,
        );
        assert_eq!(page_title(&doc).as_deref(), Some("Match Report"));
    }

    #[test]
    fn falls_back_to_og_title() {
        let doc = dom::parse(
            r#"<html><head><meta property="og:title" content="OG Title"></head><body></body></html>"#,
        );
        assert_eq!(page_title(&doc).as_deref(), Some("OG Title"));
    }

    #[test]
    fn missing_title_yields_none() {
        let doc = dom::parse("<html><body><p>no title here</p></body></html>");
        assert_eq!(page_title(&doc), None);
    }
}
