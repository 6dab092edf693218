//! # Markdown Parsing
//!
//! Turns markdown text into an ordered sequence of [`Token`]s plus flat
//! inventories of the links and images it contains.
//!
//! Parsing is total: every input, however malformed, produces a
//! [`ParseResult`]. Constructs that cannot be recognised degrade to
//! paragraphs.

pub mod blocks;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use serde::Serialize;
use xi_rope::Rope;

use blocks::{BlockBuilder, MarkdownLineClassifier, Token};
use inline::{ImageRef, InlineNode, LinkRef, parse_inline};
use rope::lines_with_spans;

pub use inline::{extract_images, extract_links, strip_markdown_formatting};

/// Output of [`parse_markdown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Top-level tokens in document order.
    pub tokens: Vec<Token>,
    /// Every link in the document, in document order, at any nesting level.
    /// Links inside code are not included.
    pub links: Vec<LinkRef>,
    /// Every image in the document, in document order.
    pub images: Vec<ImageRef>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Parses markdown text. Never fails.
pub fn parse_markdown(text: &str) -> ParseResult {
    parse_document(&Rope::from(text))
}

/// Parses a document already held in a rope.
pub fn parse_document(rope: &Rope) -> ParseResult {
    let tokens = build_blocks(rope, BlockBuilder::new());
    let mut inventory = Inventory::default();
    for t in &tokens {
        inventory.visit(t);
    }
    log::trace!(
        "parsed {} bytes into {} tokens, {} links, {} images",
        rope.len(),
        tokens.len(),
        inventory.links.len(),
        inventory.images.len()
    );

    ParseResult {
        tokens,
        links: inventory.links,
        images: inventory.images,
    }
}

/// Parses the body of a blockquote `nesting` levels deep.
pub(crate) fn parse_blocks_nested(text: &str, nesting: usize) -> Vec<Token> {
    build_blocks(&Rope::from(text), BlockBuilder::nested(nesting))
}

fn build_blocks(rope: &Rope, mut builder: BlockBuilder) -> Vec<Token> {
    let classifier = MarkdownLineClassifier;
    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }
    builder.finish()
}

/// Collects links and images from tokens in document order.
#[derive(Default)]
struct Inventory {
    links: Vec<LinkRef>,
    images: Vec<ImageRef>,
}

impl Inventory {
    fn visit(&mut self, token: &Token) {
        match token {
            Token::Heading { inline, .. } | Token::Paragraph { inline, .. } => {
                self.visit_inline(inline)
            }
            Token::List { items, .. } => {
                for item in items {
                    self.visit_inline(&item.inline);
                }
            }
            Token::Blockquote { children } => {
                for child in children {
                    self.visit(child);
                }
            }
            Token::Table { headers, rows, .. } => {
                for cell in headers.iter().chain(rows.iter().flatten()) {
                    self.visit_inline(&parse_inline(cell));
                }
            }
            Token::Link { text, href, title } => self.links.push(LinkRef {
                text: text.clone(),
                href: href.clone(),
                title: title.clone(),
            }),
            Token::Image { alt, src, title } => self.images.push(ImageRef {
                alt: alt.clone(),
                src: src.clone(),
                title: title.clone(),
            }),
            Token::Text { .. } | Token::CodeBlock { .. } | Token::HorizontalRule => {}
        }
    }

    fn visit_inline(&mut self, nodes: &[InlineNode]) {
        for n in nodes {
            match n {
                InlineNode::Link {
                    children,
                    href,
                    title,
                } => {
                    self.links.push(LinkRef {
                        text: strip_markdown_formatting(&InlineNode::plain_text(children)),
                        href: href.clone(),
                        title: title.clone(),
                    });
                    self.visit_inline(children);
                }
                InlineNode::Image { alt, src, title } => self.images.push(ImageRef {
                    alt: alt.clone(),
                    src: src.clone(),
                    title: title.clone(),
                }),
                InlineNode::Emphasis { children }
                | InlineNode::Strong { children }
                | InlineNode::Strikethrough { children } => self.visit_inline(children),
                InlineNode::Text { .. } | InlineNode::Code { .. } => {}
            }
        }
    }
}
