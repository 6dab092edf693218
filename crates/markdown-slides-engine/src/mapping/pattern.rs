use serde::Serialize;

use crate::parsing::blocks::{ListItem, Token};

/// Coarse shape of a run, derived from the counts in [`ContentPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentShape {
    Empty,
    Tabular,
    Quotation,
    SingleList,
    MultiList,
    /// Headings with at most one paragraph.
    Headline,
    Prose,
    Mixed,
}

/// Structural fingerprint of one run of tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPattern {
    /// List items at every depth, across all top-level lists.
    pub item_count: usize,
    /// Depth-0 items across all top-level lists.
    pub top_level_item_count: usize,
    /// Number of top-level list tokens.
    pub list_count: usize,
    /// Mean stripped item length in chars; 0 without items.
    pub avg_item_length: f64,
    pub max_nesting_depth: usize,
    pub heading_count: usize,
    pub paragraph_count: usize,
    /// Longest stripped paragraph in chars.
    pub longest_paragraph: usize,
    /// Top-level tokens other than headings.
    pub body_block_count: usize,
    pub has_table: bool,
    pub has_quote: bool,
    pub has_numbered_list: bool,
    pub has_heading: bool,
    pub has_code: bool,
    pub has_image: bool,
    pub shape: ContentShape,
}

/// Summarizes a run of top-level tokens in a single pass.
pub fn analyze_content_pattern(tokens: &[Token]) -> ContentPattern {
    let mut acc = Accumulator::default();
    for t in tokens {
        acc.top_level(t);
    }
    acc.finish()
}

#[derive(Default)]
struct Accumulator {
    item_count: usize,
    top_level_item_count: usize,
    list_count: usize,
    ordered_list_count: usize,
    item_chars: usize,
    max_nesting_depth: usize,
    heading_count: usize,
    paragraph_count: usize,
    longest_paragraph: usize,
    quote_count: usize,
    body_block_count: usize,
    has_table: bool,
    has_code: bool,
    has_image: bool,
}

impl Accumulator {
    fn top_level(&mut self, t: &Token) {
        if !matches!(t, Token::Heading { .. }) {
            self.body_block_count += 1;
        }
        match t {
            Token::Heading { .. } => self.heading_count += 1,
            Token::Paragraph { text, .. } => {
                self.paragraph_count += 1;
                self.longest_paragraph = self.longest_paragraph.max(text.chars().count());
            }
            Token::List { ordered, items } => {
                self.list_count += 1;
                if *ordered {
                    self.ordered_list_count += 1;
                }
                self.items(items);
            }
            Token::Blockquote { children } => {
                self.quote_count += 1;
                self.nested(children);
            }
            Token::Table { .. } => self.has_table = true,
            Token::CodeBlock { .. } => self.has_code = true,
            Token::Image { .. } => self.has_image = true,
            Token::Text { .. } | Token::HorizontalRule | Token::Link { .. } => {}
        }
    }

    /// Tokens inside a blockquote only contribute presence flags.
    fn nested(&mut self, tokens: &[Token]) {
        for t in tokens {
            match t {
                Token::Table { .. } => self.has_table = true,
                Token::CodeBlock { .. } => self.has_code = true,
                Token::Image { .. } => self.has_image = true,
                Token::Blockquote { children } => self.nested(children),
                _ => {}
            }
        }
    }

    fn items(&mut self, items: &[ListItem]) {
        for item in items {
            self.item_count += 1;
            if item.depth == 0 {
                self.top_level_item_count += 1;
            }
            self.item_chars += item.text.chars().count();
            self.max_nesting_depth = self.max_nesting_depth.max(item.depth);
        }
    }

    fn finish(self) -> ContentPattern {
        let non_heading_non_quote = self.body_block_count - self.quote_count;
        let has_quote = self.quote_count > 0 && self.quote_count >= non_heading_non_quote;
        let has_numbered_list = self.list_count > 0 && self.ordered_list_count == self.list_count;
        let avg_item_length = if self.item_count == 0 {
            0.0
        } else {
            self.item_chars as f64 / self.item_count as f64
        };

        let shape = if self.body_block_count == 0 && self.heading_count == 0 {
            ContentShape::Empty
        } else if self.has_table {
            ContentShape::Tabular
        } else if has_quote {
            ContentShape::Quotation
        } else if self.list_count == 1 {
            ContentShape::SingleList
        } else if self.list_count > 1 {
            ContentShape::MultiList
        } else if self.heading_count > 0
            && self.paragraph_count <= 1
            && self.body_block_count == self.paragraph_count
        {
            ContentShape::Headline
        } else if self.body_block_count == self.paragraph_count {
            ContentShape::Prose
        } else {
            ContentShape::Mixed
        };

        ContentPattern {
            item_count: self.item_count,
            top_level_item_count: self.top_level_item_count,
            list_count: self.list_count,
            avg_item_length,
            max_nesting_depth: self.max_nesting_depth,
            heading_count: self.heading_count,
            paragraph_count: self.paragraph_count,
            longest_paragraph: self.longest_paragraph,
            body_block_count: self.body_block_count,
            has_table: self.has_table,
            has_quote,
            has_numbered_list,
            has_heading: self.heading_count > 0,
            has_code: self.has_code,
            has_image: self.has_image,
            shape,
        }
    }
}
