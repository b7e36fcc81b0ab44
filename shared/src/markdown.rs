//! ==============================================================================
//! markdown.rs - rendering fetched post bodies
//! ==============================================================================
//!
//! purpose:
//!     turns a post's markdown into html for the expanded card, and into a
//!     short plain-text teaser. bodies come from user uploads, so raw html in
//!     the source is escaped instead of passed through.
//!
//! ==============================================================================

use pulldown_cmark::{html, Event, Options, Parser, TagEnd};

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// markdown to html, with embedded html shown as text
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// first `max_chars` characters of the body's visible text
///
/// whitespace runs collapse to one space; an ellipsis marks a cut.
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let mut text = String::new();
    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            // block boundaries separate words; inline ends do not
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_html("# Hello\n\nSome **bold** text.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_html("hi <script>alert(1)</script>\n\n<div onclick=\"x\">y</div>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_excerpt_strips_markup() {
        let md = "# Title\n\nFirst *para*.\n\n- one\n- two";
        assert_eq!(excerpt(md, 200), "Title First para. one two");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let md = "żółw żółw żółw";
        assert_eq!(excerpt(md, 5), "żółw…");
        assert_eq!(excerpt(md, 14), md);
        assert_eq!(excerpt("", 10), "");
    }
}
