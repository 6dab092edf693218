use std::sync::OnceLock;

use regex::Regex;

use super::{
    strip::strip_markdown_formatting,
    types::{ImageRef, LinkRef},
};

/// Matches `[text](dest "title")` and `![alt](src "title")` in raw text.
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(
            r#"(!?)\[([^\[\]]*)\]\(\s*<?([^()\s<>]*)>?(?:\s+(?:"([^"]*)"|'([^']*)'))?\s*\)"#,
        )
        .expect("Invalid link regex")
    })
}

/// Extracts every link from raw markdown, in document order.
///
/// Scans the text once without a block parse. Images are not links.
pub fn extract_links(text: &str) -> Vec<LinkRef> {
    link_regex()
        .captures_iter(text)
        .filter(|caps| caps[1].is_empty())
        .map(|caps| LinkRef {
            text: strip_markdown_formatting(&caps[2]),
            href: caps[3].to_string(),
            title: title(&caps),
        })
        .collect()
}

/// Extracts every image from raw markdown, in document order.
pub fn extract_images(text: &str) -> Vec<ImageRef> {
    link_regex()
        .captures_iter(text)
        .filter(|caps| !caps[1].is_empty())
        .map(|caps| ImageRef {
            alt: strip_markdown_formatting(&caps[2]),
            src: caps[3].to_string(),
            title: title(&caps),
        })
        .collect()
}

fn title(caps: &regex::Captures<'_>) -> Option<String> {
    caps.get(4)
        .or_else(|| caps.get(5))
        .map(|m| m.as_str().to_string())
}
