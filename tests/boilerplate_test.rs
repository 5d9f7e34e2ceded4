use storytext::{extract, extract_with_options, Options};

fn article_page(noise: &str) -> String {
    let prose = "Readable match report prose that clears every length gate easily. ".repeat(10);
    format!(
        r#"<html><body>
            <article class="article-body">
                {noise}
                <p>{prose}</p>
                <p>{prose}</p>
                <p>{prose}</p>
            </article>
        </body></html>"#
    )
}

#[test]
fn nav_region_text_never_reaches_output() {
    let html = article_page(r#"<nav>NAV_HOME NAV_SCORES NAV_TEAMS</nav>"#);
    let result = extract(&html);
    assert!(result.text.contains("Readable match report"));
    assert!(!result.text.contains("NAV_HOME"));
}

#[test]
fn aria_navigation_is_removed_at_any_depth() {
    let html = article_page(
        r#"<div><div><div role="navigation">DEEP_NAV_LINKS</div></div></div>"#,
    );
    let result = extract(&html);
    assert!(!result.text.contains("DEEP_NAV_LINKS"));
}

#[test]
fn cookie_banner_is_removed() {
    let html = article_page(r#"<div class="cookie-consent">COOKIE_NOTICE accept all</div>"#);
    let result = extract(&html);
    assert!(!result.text.contains("COOKIE_NOTICE"));
}

#[test]
fn paywall_and_subscribe_prompts_are_removed() {
    let html = article_page(
        r#"<div class="paywall-overlay">PAYWALL_PROMPT</div>
           <div class="newsletter-signup">SIGNUP_PROMPT</div>"#,
    );
    let result = extract(&html);
    assert!(!result.text.contains("PAYWALL_PROMPT"));
    assert!(!result.text.contains("SIGNUP_PROMPT"));
}

#[test]
fn comment_section_is_removed() {
    let html = article_page(r#"<section class="comments"><p>READER_COMMENT_TEXT that is itself long enough to look like a paragraph of prose.</p></section>"#);
    let result = extract(&html);
    assert!(!result.text.contains("READER_COMMENT_TEXT"));
}

#[test]
fn scripts_and_styles_are_removed() {
    let html = article_page(
        r#"<script>var tracking = "SCRIPT_PAYLOAD";</script>
           <style>.story { color: red; }</style>"#,
    );
    let result = extract(&html);
    assert!(!result.text.contains("SCRIPT_PAYLOAD"));
    assert!(!result.text.contains("color: red"));
}

#[test]
fn social_share_and_related_rails_are_removed() {
    let html = article_page(
        r#"<ul class="share-buttons"><li>SHARE_FACEBOOK</li></ul>
           <div class="related-stories">RELATED_LINKS</div>"#,
    );
    let result = extract(&html);
    assert!(!result.text.contains("SHARE_FACEBOOK"));
    assert!(!result.text.contains("RELATED_LINKS"));
}

#[test]
fn modal_dialog_is_removed() {
    let html = article_page(r#"<div role="dialog">MODAL_SUBSCRIBE_NOW</div>"#);
    let result = extract(&html);
    assert!(!result.text.contains("MODAL_SUBSCRIBE_NOW"));
}

#[test]
fn extra_noise_patterns_are_honored_end_to_end() {
    let html = article_page(r#"<div class="scoreboard-strip">LIVE_TICKER</div>"#);
    let options = Options {
        extra_noise_patterns: vec!["scoreboard".to_string()],
        ..Options::default()
    };

    let with_extra = extract_with_options(&html, &options);
    assert!(!with_extra.text.contains("LIVE_TICKER"));

    // Default denylist leaves the custom widget alone; it is inline noise
    // the paragraph join excludes anyway, so check the stripped tree via
    // the fallback-free paragraph path.
    let without_extra = extract(&html);
    assert!(without_extra.text.contains("Readable match report"));
}

#[test]
fn noise_only_page_degrades_to_empty_output() {
    let html = r#"<html><body>
        <nav>NAV_ONLY</nav>
        <footer>FOOTER_ONLY</footer>
    </body></html>"#;

    let result = extract(html);
    assert!(result.text.is_empty());
}
