use crate::parsing::blocks::kinds::{BlockQuote, Heading, List};

use super::{parser::parse_inline, types::InlineNode};

/// Removes markdown formatting and returns plain text.
///
/// Strips heading markers, quote prefixes, list markers, emphasis, strong,
/// strikethrough, code span delimiters and link/image markup (link text and
/// alt text are kept), then collapses whitespace.
///
/// A single pass can expose new markup (`` `*a*` `` → `*a*`), so passes are
/// repeated until the text stops changing. The result is a fixed point,
/// which makes the function idempotent. Every pass that changes the text
/// after the first one shortens it, so the loop terminates.
pub fn strip_markdown_formatting(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let joined = text
        .lines()
        .map(strip_line)
        .collect::<Vec<_>>()
        .join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_line(line: &str) -> String {
    let (_, quote_end) = BlockQuote::strip_prefixes(line);
    let mut rest = line[quote_end..].trim_start();
    if let Some((_, content)) = Heading::parse(rest) {
        rest = content;
    }
    let item;
    if let Some(marker) = List::marker(rest) {
        item = marker.content;
        rest = &item;
    }
    InlineNode::plain_text(&parse_inline(rest))
}
