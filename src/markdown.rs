//! Markdown Rendering
//!
//! Task descriptions and notes are written in Markdown by back-office staff.
//! Rendered with pulldown-cmark, then:
//! - raw HTML in the source is shown as text, never injected
//! - link and image targets must be relative or http(s)/mailto; others become `#`
//! - links open in a new tab
//! - images are replaced by a link (the dialog has no room for them)

use pulldown_cmark::{html::push_html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

/// Render markdown to an HTML string safe for `inner_html`
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

enum State {
    Normal,
    /// Inside an image; its alt text events are collected instead of emitted
    InImage { url: String, alt: String, depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => {
                    events.push(Event::Text(raw));
                }
                Event::Start(Tag::Link { link_type, dest_url, title, .. })
                    if link_type != LinkType::Email =>
                {
                    let html = format!(
                        r#"<a href="{}" title="{}" target="_blank" rel="noopener noreferrer">"#,
                        escape_attr(safe_url(&dest_url)),
                        escape_attr(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                }
                Event::End(TagEnd::Link) => {
                    events.push(Event::Html(CowStr::from("</a>")));
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    state = State::InImage { url: dest_url.to_string(), alt: String::new(), depth: 0 };
                }
                other => events.push(other),
            },

            State::InImage { ref url, ref mut alt, ref mut depth } => match event {
                Event::Text(t) | Event::Code(t) => alt.push_str(&t),
                Event::Start(_) => *depth += 1,
                Event::End(TagEnd::Image) if *depth == 0 => {
                    let label = if alt.is_empty() { "image" } else { alt.as_str() };
                    let html = format!(
                        r#"<a class="md-image-link" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                        escape_attr(safe_url(url)),
                        escape_html(label)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                Event::End(_) => *depth = depth.saturating_sub(1),
                _ => {}
            },
        }
    }

    events
}

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// `url` when it is relative or uses an allowed scheme, otherwise `#`
fn safe_url(url: &str) -> &str {
    // browsers drop whitespace and control characters before reading the scheme
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match compact.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if compact[i..].starts_with(':') => {
            let scheme = compact[..i].to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                url
            } else {
                "#"
            }
        }
        _ => url,
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn escape_attr(text: &str) -> String {
    escape_html(text).replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("**Pour** the slab\n\n- [x] rebar\n- [ ] forms");
        assert!(html.contains("<strong>Pour</strong>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let inline = parse_markdown_inline("hi <b onclick=\"x\">there</b>");
        assert!(!inline.contains("<b "));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = parse_markdown_inline("see [plan](https://example.com/plan?a=1&b=2)");
        assert_eq!(
            html,
            r#"see <a href="https://example.com/plan?a=1&amp;b=2" title="" target="_blank" rel="noopener noreferrer">plan</a>"#
        );
    }

    #[test]
    fn test_script_urls_are_not_linked() {
        let html = parse_markdown("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#" title="""##));

        for source in [
            "[x](JavaScript:alert(1))",
            "[x](<java\tscript:alert(1)>)",
            "[x](data:text/html;base64,PHNjcmlwdD4=)",
            "<vbscript:msgbox>",
            "![pic](javascript:alert(1))",
        ] {
            let html = parse_markdown(source);
            assert!(html.contains(r##"href="#""##), "{} rendered as {}", source, html);
        }
    }

    #[test]
    fn test_safe_urls_are_kept() {
        assert_eq!(safe_url("https://example.com/a:b"), "https://example.com/a:b");
        assert_eq!(safe_url("/tasks/4?tab=notes"), "/tasks/4?tab=notes");
        assert_eq!(safe_url("docs/site:plan.pdf"), "docs/site:plan.pdf");
        assert_eq!(safe_url("MAILTO:site@example.com"), "MAILTO:site@example.com");
        assert_eq!(safe_url("#section"), "#section");
    }

    #[test]
    fn test_image_becomes_link() {
        let html = parse_markdown_inline("![site *photo*](/img/site.png)");
        assert_eq!(
            html,
            r#"<a class="md-image-link" href="/img/site.png" target="_blank" rel="noopener noreferrer">site photo</a>"#
        );
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("plain"), "plain");
    }
}
