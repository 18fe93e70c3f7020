//! Instructions Markdown
//!
//! Recipe instructions are written by other users, so:
//! - raw HTML is shown as text, never injected
//! - links to anything but http(s), mailto or relative URLs lose their anchor
//! - single newlines are kept as line breaks (authors type step-per-line)

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Whether `url` may become an `href`. Browsers skip whitespace and control
/// characters inside a scheme, so those are dropped before looking at it.
fn is_safe_link(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        Some(pos) if cleaned[pos..].starts_with(':') => LINK_SCHEMES.contains(&&cleaned[..pos]),
        _ => true,
    }
}

/// Render instructions to sanitized HTML
pub fn render_instructions(text: &str) -> String {
    // Links cannot nest, so one flag tracks the open unsafe link
    let mut in_blocked_link = false;
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link { dest_url, .. }) if !is_safe_link(&dest_url) => {
            log::warn!("[MARKDOWN] Dropping link to {}", dest_url);
            in_blocked_link = true;
            Event::Text(CowStr::Borrowed(""))
        }
        Event::End(TagEnd::Link) if in_blocked_link => {
            in_blocked_link = false;
            Event::Text(CowStr::Borrowed(""))
        }
        // Images are shown from the recipe's own image field only
        Event::Start(Tag::Image { dest_url, .. }) => {
            Event::Text(CowStr::from(format!("[image: {}]", dest_url)))
        }
        Event::End(TagEnd::Image) => Event::Text(CowStr::Borrowed("")),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_preserved() {
        let html = render_instructions("Boil water\nAdd pasta");
        assert!(html.contains("Boil water<br />"));
        assert!(html.contains("Add pasta"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_instructions("<script>alert(1)</script>\n\nStir <b>well</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_script_urls_are_not_linked() {
        let html = render_instructions("Step 1: [see video](javascript:alert(document.cookie))");
        assert!(!html.contains("<a"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("Step 1: see video"));

        let html = render_instructions("[x](JavaScript:alert(1)) and <javascript:alert(2)>");
        assert!(!html.contains("href"));

        let html = render_instructions("[x](data:text/html;base64,PHNjcmlwdD4=)");
        assert!(!html.contains("href"));
    }

    #[test]
    fn test_web_and_relative_links_are_kept() {
        let html = render_instructions("[blog](https://example.com/soup) and [notes](/recipes/2)");
        assert!(html.contains(r#"<a href="https://example.com/soup">blog</a>"#));
        assert!(html.contains(r#"<a href="/recipes/2">notes</a>"#));
        assert!(is_safe_link("mailto:cook@example.com"));
        assert!(is_safe_link("soup.html?step=2:3"));
        assert!(!is_safe_link(" java\tscript:alert(1)"));
    }

    #[test]
    fn test_markdown_lists_render() {
        let html = render_instructions("1. Chop\n2. Fry");
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>Chop</li>"));
    }
}
