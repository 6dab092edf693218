use crate::parsing::{parse_blocks_nested, rope::span::Span};

use super::{
    classify::LineClass,
    kinds::{Alignment, BlockQuote, CodeFence, FenceSig, List, ListMarker, Paragraph, Table},
    open::{BlockOpen, try_open_leaf},
    types::{ListItem, Token},
};

/// Blockquotes nested deeper than this are kept as paragraph text instead of
/// being parsed recursively.
pub const MAX_QUOTE_NESTING: usize = 16;

#[derive(Debug)]
struct PendingItem {
    depth: usize,
    ordinal: Option<u32>,
    checked: Option<bool>,
    lines: Vec<String>,
}

#[derive(Debug)]
struct ListState {
    ordered: bool,
    base_indent: usize,
    items: Vec<PendingItem>,
}

#[derive(Debug)]
struct TableState {
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Fence { open: FenceSig, start: Span, body: Vec<String> },
    List(ListState),
    Table(TableState),
    Quote { lines: Vec<String> },
    Raw { lines: Vec<String> },
}

/// Phase 2 of block parsing: a state machine fed one classified line at a
/// time. At most one block is open; it is flushed into a [`Token`] when a
/// line cannot continue it.
pub struct BlockBuilder {
    nesting: usize,
    leaf: LeafState,
    out: Vec<Token>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::nested(0)
    }

    /// A builder for the body of a blockquote `nesting` levels deep.
    pub fn nested(nesting: usize) -> Self {
        Self {
            nesting,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let consumed = match self.leaf {
            LeafState::Fence { .. } => {
                self.consume_fence_line(c);
                true
            }
            LeafState::Quote { .. } => self.continue_quote(c),
            LeafState::List(_) => self.continue_list(c),
            LeafState::Table(_) => self.continue_table(c),
            LeafState::Raw { .. } => self.continue_raw(c),
            LeafState::None | LeafState::Paragraph { .. } => false,
        };
        if consumed {
            return;
        }

        if c.is_blank {
            self.flush();
            return;
        }

        if let Some(alignments) = &c.table_delimiter
            && let Some(headers) = self.take_table_header(alignments.len())
        {
            self.flush();
            self.leaf = LeafState::Table(TableState {
                headers,
                alignments: alignments.clone(),
                rows: vec![],
            });
            return;
        }

        let quotes_allowed = self.nesting < MAX_QUOTE_NESTING;
        if let Some(open) = try_open_leaf(c, quotes_allowed) {
            self.flush();
            self.open_leaf(open, c);
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<Token> {
        // EOF flush
        self.flush();
        self.out
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        match open {
            BlockOpen::FencedCode(sig) => {
                self.leaf = LeafState::Fence {
                    open: sig,
                    start: c.line,
                    body: vec![],
                }
            }
            BlockOpen::ThematicBreak => self.out.push(Token::HorizontalRule),
            BlockOpen::Heading { level, content } => self.out.push(Token::heading(level, &content)),
            BlockOpen::BlockQuote => {
                self.leaf = LeafState::Quote {
                    lines: vec![BlockQuote::strip_one(&c.text).to_string()],
                }
            }
            BlockOpen::ListItem(marker) => {
                let mut state = ListState {
                    ordered: marker.ordered,
                    base_indent: c.indent,
                    items: vec![],
                };
                state.push_item(&marker, 0);
                self.leaf = LeafState::List(state);
            }
            BlockOpen::RawText => {
                self.leaf = LeafState::Raw {
                    lines: vec![c.text.trim().to_string()],
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { open, body, .. } = &mut self.leaf else {
            return;
        };

        if CodeFence::closes(open, c.fence_sig.as_ref()) {
            let token = Token::CodeBlock {
                language: CodeFence::language(open),
                body: body.join("\n"),
            };
            self.out.push(token);
            self.leaf = LeafState::None;
        } else {
            body.push(c.text.clone());
        }
    }

    fn continue_quote(&mut self, c: &LineClass) -> bool {
        let LeafState::Quote { lines } = &mut self.leaf else {
            return false;
        };
        if c.quote_depth > 0 {
            lines.push(BlockQuote::strip_one(&c.text).to_string());
            return true;
        }
        // No lazy continuation: any unquoted line ends the quote.
        self.flush();
        c.is_blank
    }

    fn continue_list(&mut self, c: &LineClass) -> bool {
        let LeafState::List(state) = &mut self.leaf else {
            return false;
        };

        // Blank lines never end a list on their own; the next line decides.
        if c.is_blank {
            return true;
        }

        if c.quote_depth == 0 && !c.is_thematic_break && c.fence_sig.is_none() {
            let nested = c.indent >= state.base_indent + List::INDENT_UNIT;
            if let Some(marker) = &c.list_marker {
                // A top-level switch between bullets and numbers starts a new list.
                if nested || marker.ordered == state.ordered {
                    let previous = state.items.last().map(|i| i.depth);
                    let depth = List::depth(c.indent, state.base_indent, previous);
                    state.push_item(marker, depth);
                    return true;
                }
            } else if nested && let Some(last) = state.items.last_mut() {
                last.lines.push(c.text.trim().to_string());
                return true;
            }
        }

        self.flush();
        false
    }

    fn continue_table(&mut self, c: &LineClass) -> bool {
        let LeafState::Table(state) = &mut self.leaf else {
            return false;
        };
        if c.is_blank || !c.is_table_row || c.quote_depth > 0 {
            self.flush();
            return false;
        }

        let width = state.headers.len();
        let (row, dropped) = Table::normalize_row(Table::split_row(&c.text), width);
        if dropped > 0 {
            log::debug!(
                "table row at bytes {}..{} has {} cells more than its {} columns; extra cells dropped",
                c.line.start,
                c.line.end,
                dropped,
                width
            );
        }
        state.rows.push(row);
        true
    }

    fn continue_raw(&mut self, c: &LineClass) -> bool {
        let LeafState::Raw { lines } = &mut self.leaf else {
            return false;
        };
        if c.is_blank {
            self.flush();
            return true;
        }
        lines.push(c.text.trim().to_string());
        true
    }

    /// Pops the last paragraph line if it can head a table of `width`
    /// columns.
    fn take_table_header(&mut self, width: usize) -> Option<Vec<String>> {
        let LeafState::Paragraph { lines } = &mut self.leaf else {
            return None;
        };
        let last = lines.last()?;
        if !Table::is_row(last) {
            return None;
        }
        let headers = Table::split_row(last);
        if headers.len() != width {
            return None;
        }
        lines.pop();
        Some(headers)
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(c.text.clone());
            return;
        }
        self.flush();
        self.leaf = LeafState::Paragraph {
            lines: vec![c.text.clone()],
        };
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                if !lines.is_empty() {
                    self.out.push(Token::paragraph(&Paragraph::join(&lines)));
                }
            }
            LeafState::Fence { open, start, body } => {
                // Unterminated fence: emit as code block anyway
                log::debug!(
                    "code fence opened at byte {} is never closed; running it to end of input",
                    start.start
                );
                self.out.push(Token::CodeBlock {
                    language: CodeFence::language(&open),
                    body: body.join("\n"),
                });
            }
            LeafState::List(state) => self.out.push(state.into_token()),
            LeafState::Table(state) => self.out.push(Token::Table {
                headers: state.headers,
                alignments: state.alignments,
                rows: state.rows,
            }),
            LeafState::Quote { lines } => {
                let children = parse_blocks_nested(&lines.join("\n"), self.nesting + 1);
                self.out.push(Token::Blockquote { children });
            }
            LeafState::Raw { lines } => self.out.push(Token::Text {
                text: lines.join("\n"),
            }),
        }
    }
}

impl ListState {
    fn push_item(&mut self, marker: &ListMarker, depth: usize) {
        let (checked, content) = List::task(&marker.content);
        self.items.push(PendingItem {
            depth,
            ordinal: marker.ordinal,
            checked,
            lines: vec![content.to_string()],
        });
    }

    fn into_token(self) -> Token {
        let items = self
            .items
            .into_iter()
            .map(|i| ListItem::new(i.lines.join("\n"), i.depth, i.ordinal, i.checked))
            .collect();
        Token::List {
            ordered: self.ordered,
            items,
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
