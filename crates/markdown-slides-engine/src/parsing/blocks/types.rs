use serde::Serialize;

use crate::parsing::inline::{InlineNode, parse_inline, strip_markdown_formatting};

use super::kinds::Alignment;

/// A top-level (or blockquote-nested) block token.
///
/// Serializes with a `type` tag, e.g. `{"type": "heading", "level": 2, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Token {
    /// Raw passthrough (HTML-looking lines). No inline parsing.
    Text { text: String },
    /// An ATX heading. `level` is always within `1..=6`.
    Heading {
        level: u8,
        /// Markup after the `#` marker.
        raw: String,
        /// Formatting-stripped text.
        text: String,
        inline: Vec<InlineNode>,
    },
    Paragraph {
        raw: String,
        text: String,
        inline: Vec<InlineNode>,
    },
    /// Items are flat, in document order, each with its own nesting depth.
    List { ordered: bool, items: Vec<ListItem> },
    /// Blocks parsed from the quote body with one level of `>` removed.
    Blockquote { children: Vec<Token> },
    /// A fenced code block. `body` is the exact text between the fences.
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        body: String,
    },
    /// `---`, `***` or `___`; marks a slide boundary.
    HorizontalRule,
    /// Every row has exactly `headers.len()` cells.
    Table {
        headers: Vec<String>,
        alignments: Vec<Alignment>,
        rows: Vec<Vec<String>>,
    },
    /// A paragraph consisting of a single link.
    Link {
        text: String,
        href: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// A paragraph consisting of a single image.
    Image {
        alt: String,
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

/// One list item. Carried only inside [`Token::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub raw: String,
    pub text: String,
    pub inline: Vec<InlineNode>,
    /// 0 for top-level items, one more per indentation unit.
    pub depth: usize,
    /// The number written on an ordered marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,
    /// Task list state for `[ ]` / `[x]` items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ListItem {
    pub fn new(raw: String, depth: usize, ordinal: Option<u32>, checked: Option<bool>) -> Self {
        Self {
            text: strip_markdown_formatting(&raw),
            inline: parse_inline(&raw),
            raw,
            depth,
            ordinal,
            checked,
        }
    }
}

impl Token {
    pub fn heading(level: u8, raw: &str) -> Self {
        Token::Heading {
            level: level.clamp(1, 6),
            raw: raw.to_string(),
            text: strip_markdown_formatting(raw),
            inline: parse_inline(raw),
        }
    }

    /// Builds a paragraph, or a `Link`/`Image` token when the paragraph is
    /// nothing but one link or image. A link whose text holds further links
    /// or images stays a paragraph so that none of them is lost.
    pub fn paragraph(raw: &str) -> Self {
        let inline = parse_inline(raw.trim());
        if let [single] = inline.as_slice() {
            match single {
                InlineNode::Image { alt, src, title } => {
                    return Token::Image {
                        alt: alt.clone(),
                        src: src.clone(),
                        title: title.clone(),
                    };
                }
                InlineNode::Link {
                    children,
                    href,
                    title,
                } if !InlineNode::has_references(children) => {
                    return Token::Link {
                        text: InlineNode::plain_text(children),
                        href: href.clone(),
                        title: title.clone(),
                    };
                }
                _ => {}
            }
        }
        Token::Paragraph {
            raw: raw.to_string(),
            text: strip_markdown_formatting(raw),
            inline,
        }
    }

    /// Short name of the variant, the same string as its serialized `type`
    /// tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Text { .. } => "text",
            Token::Heading { .. } => "heading",
            Token::Paragraph { .. } => "paragraph",
            Token::List { .. } => "list",
            Token::Blockquote { .. } => "blockquote",
            Token::CodeBlock { .. } => "codeBlock",
            Token::HorizontalRule => "horizontalRule",
            Token::Table { .. } => "table",
            Token::Link { .. } => "link",
            Token::Image { .. } => "image",
        }
    }

    /// Plain text of the token, used where a block has to be shown as a
    /// single string (card descriptions, quote bodies).
    pub fn plain_text(&self) -> String {
        match self {
            Token::Text { text } => text.clone(),
            Token::Heading { text, .. } | Token::Paragraph { text, .. } => text.clone(),
            Token::List { items, .. } => items
                .iter()
                .map(|i| i.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Token::Blockquote { children } => children
                .iter()
                .map(Token::plain_text)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            Token::CodeBlock { body, .. } => body.clone(),
            Token::HorizontalRule => String::new(),
            Token::Table { headers, .. } => headers.join(" | "),
            Token::Link { text, .. } => text.clone(),
            Token::Image { alt, .. } => alt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_is_clamped() {
        assert!(matches!(Token::heading(9, "x"), Token::Heading { level: 6, .. }));
        assert!(matches!(Token::heading(0, "x"), Token::Heading { level: 1, .. }));
    }

    #[test]
    fn paragraph_with_only_an_image_is_an_image() {
        assert_eq!(
            Token::paragraph("![Team photo](team.jpg)"),
            Token::Image {
                alt: "Team photo".into(),
                src: "team.jpg".into(),
                title: None
            }
        );
    }

    #[test]
    fn paragraph_with_only_a_link_is_a_link() {
        assert_eq!(
            Token::paragraph("[Read more](https://example.com)"),
            Token::Link {
                text: "Read more".into(),
                href: "https://example.com".into(),
                title: None
            }
        );
    }

    #[test]
    fn paragraph_with_link_and_text_stays_paragraph() {
        let t = Token::paragraph("See [docs](d) for details");
        assert!(matches!(t, Token::Paragraph { ref text, .. } if text == "See docs for details"));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(Token::HorizontalRule).unwrap();
        assert_eq!(json, serde_json::json!({"type": "horizontalRule"}));
        let json = serde_json::to_value(Token::CodeBlock {
            language: None,
            body: "x".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"type": "codeBlock", "body": "x"}));
    }

    #[test]
    fn linked_image_paragraph_keeps_its_inline_nodes() {
        let t = Token::paragraph("[![Company logo](logo.png)](https://example.com)");
        let Token::Paragraph { inline, .. } = &t else {
            panic!("expected paragraph, got {t:?}");
        };
        assert!(InlineNode::has_references(inline));
    }

    #[test]
    fn kind_name_matches_type_tag() {
        for t in [
            Token::HorizontalRule,
            Token::paragraph("plain"),
            Token::heading(1, "Title"),
            Token::paragraph("[docs](d)"),
        ] {
            let json = serde_json::to_value(&t).unwrap();
            assert_eq!(json["type"], t.kind_name());
        }
    }
}
