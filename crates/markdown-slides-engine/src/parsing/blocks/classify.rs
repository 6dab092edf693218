use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{
    Alignment, BlockQuote, CodeFence, FenceSig, Heading, List, ListMarker, RawText, Table,
    ThematicBreak,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text without its line terminator.
    pub text: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Leading whitespace width in columns; a tab advances to the next
    /// multiple of four.
    pub indent: usize,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// ATX heading level and content.
    pub heading: Option<(u8, String)>,
    pub is_thematic_break: bool,
    pub list_marker: Option<ListMarker>,
    /// Contains a pipe, so it can continue or head a table.
    pub is_table_row: bool,
    /// Alignments if the line is a table delimiter row.
    pub table_delimiter: Option<Vec<Alignment>>,
    /// Looks like the start of raw HTML.
    pub is_raw_text: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub const TAB_WIDTH: usize = 4;

    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.text.trim_end_matches(['\r', '\n']);
        let is_blank = text.trim().is_empty();
        let (quote_depth, _) = BlockQuote::strip_prefixes(text);
        let remainder = text.trim_start();

        LineClass {
            line: lr.span,
            text: text.to_string(),
            is_blank,
            indent: Self::indent_width(text),
            quote_depth,
            fence_sig: CodeFence::sig(text),
            heading: Heading::parse(text).map(|(level, content)| (level, content.to_string())),
            is_thematic_break: ThematicBreak::matches(text),
            list_marker: List::marker(remainder),
            is_table_row: Table::is_row(remainder),
            table_delimiter: Table::delimiter_row(remainder),
            is_raw_text: RawText::matches(remainder),
        }
    }

    fn indent_width(text: &str) -> usize {
        let mut width = 0;
        for c in text.chars() {
            match c {
                ' ' => width += 1,
                '\t' => width += Self::TAB_WIDTH - width % Self::TAB_WIDTH,
                _ => break,
            }
        }
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> LineClass {
        MarkdownLineClassifier.classify(&LineRef {
            span: Span {
                start: 0,
                end: text.len(),
            },
            text: text.to_string(),
        })
    }

    #[test]
    fn blank_line() {
        let c = classify("   \n");
        assert!(c.is_blank);
        assert_eq!(c.text, "   ");
    }

    #[test]
    fn crlf_is_trimmed() {
        assert_eq!(classify("# Title\r\n").heading, Some((1, "Title".to_string())));
    }

    #[test]
    fn indentation_counts_tabs_as_four() {
        assert_eq!(classify("  - a").indent, 2);
        assert_eq!(classify("\t- a").indent, 4);
        assert_eq!(classify("  \t- a").indent, 4);
    }

    #[test]
    fn nested_list_marker_found_after_indent() {
        let c = classify("    1. deep");
        assert_eq!(c.list_marker.map(|m| m.ordinal), Some(Some(1)));
    }

    #[test]
    fn quote_depth() {
        assert_eq!(classify("> > nested").quote_depth, 2);
    }

    #[test]
    fn table_lines() {
        let c = classify("|---|:-:|");
        assert!(c.is_table_row);
        assert_eq!(
            c.table_delimiter,
            Some(vec![Alignment::None, Alignment::Center])
        );
        assert!(!classify("no pipes").is_table_row);
    }

    #[test]
    fn rule_is_also_a_list_marker_line() {
        // The builder gives thematic breaks precedence.
        let c = classify("- - -");
        assert!(c.is_thematic_break);
        assert!(c.list_marker.is_some());
    }
}
