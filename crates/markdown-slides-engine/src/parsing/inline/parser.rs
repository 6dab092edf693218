use std::collections::HashMap;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineNode,
};

/// Links, emphasis and strikethrough nested deeper than this keep their
/// inner text as flattened `Text` instead of being parsed recursively.
pub const MAX_INLINE_NESTING: usize = 32;

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Raw Zone Precedence
/// Escapes and code spans are checked first; nothing inside a code span is
/// parsed, so `` `**x**` `` stays a code span.
///
/// # Returns
/// Nodes covering the entire input. Unclosed constructs degrade to text, and
/// adjacent text is merged into a single `Text` node.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    InlineParser::new(s, 0).parse()
}

struct InlineParser<'a> {
    cur: Cursor<'a>,
    depth: usize,
    /// `[`/`]` and `(`/`)` pairs keyed by the opening index, built on first use.
    pairs: Option<HashMap<usize, usize>>,
    /// Where a closer search for a delimiter ran off the end of the input.
    /// Whether a position closes a delimiter does not depend on the opener,
    /// so every later search for it fails too.
    exhausted: HashMap<&'static [u8], usize>,
    /// The same for code spans, keyed by backtick run length.
    ticks_exhausted: HashMap<usize, usize>,
}

impl<'a> InlineParser<'a> {
    fn new(s: &'a str, depth: usize) -> Self {
        Self {
            cur: Cursor::new(s),
            depth,
            pairs: None,
            exhausted: HashMap::new(),
            ticks_exhausted: HashMap::new(),
        }
    }

    fn parse(mut self) -> Vec<InlineNode> {
        let mut out = vec![];
        let mut text_start = 0;

        while !self.cur.eof() {
            let start = self.cur.pos();
            if let Some(node) = self.try_parse_construct() {
                push_text(&mut out, self.cur.slice(text_start, start));
                push_node(&mut out, node);
                text_start = self.cur.pos();
                continue;
            }
            if self.cur.peek() == Some(CodeSpan::TICK) {
                // An unmatched backtick run is literal text as a whole.
                self.cur.bump_n(self.cur.run_len(CodeSpan::TICK));
                continue;
            }
            self.cur.bump();
        }

        push_text(&mut out, self.cur.slice(text_start, self.cur.pos()));
        out
    }

    /// Parses the inside of a construct one level deeper.
    fn nested(&self, inner: &str) -> Vec<InlineNode> {
        if self.depth + 1 >= MAX_INLINE_NESTING {
            let mut out = vec![];
            push_text(&mut out, &flatten(inner));
            return out;
        }
        InlineParser::new(inner, self.depth + 1).parse()
    }

    fn try_parse_construct(&mut self) -> Option<InlineNode> {
        match self.cur.peek()? {
            b'\\' => self.try_parse_escape(),
            CodeSpan::TICK => self.try_parse_code_span(),
            Link::IMAGE_BANG => self.try_parse_image(),
            Link::TEXT_OPEN => self.try_parse_link(),
            Link::AUTO_OPEN => self.try_parse_autolink(),
            Emphasis::STAR | Emphasis::UNDERSCORE => self.try_parse_emphasis(),
            b'~' => self.try_parse_strikethrough(),
            _ => None,
        }
    }

    /// `\*` is a literal `*`. Only ASCII punctuation can be escaped.
    fn try_parse_escape(&mut self) -> Option<InlineNode> {
        let next = self.cur.peek_at(1)?;
        if !next.is_ascii_punctuation() {
            return None;
        }
        self.cur.bump_n(2);
        Some(InlineNode::Text {
            text: (next as char).to_string(),
        })
    }

    /// Attempts to parse a code span opened by a run of N backticks and closed
    /// by the next run of exactly N backticks.
    fn try_parse_code_span(&mut self) -> Option<InlineNode> {
        let n = self.cur.run_len(CodeSpan::TICK);
        let inner_start = self.cur.pos() + n;
        if self
            .ticks_exhausted
            .get(&n)
            .is_some_and(|from| inner_start >= *from)
        {
            return None;
        }
        let src = self.cur.s;
        let b = src.as_bytes();

        let mut j = inner_start;
        while j < b.len() {
            if b[j] != CodeSpan::TICK {
                j += 1;
                continue;
            }
            let run = b[j..].iter().take_while(|x| **x == CodeSpan::TICK).count();
            if run == n {
                let inner = self.cur.slice(inner_start, j);
                self.cur.bump_n(j + n - self.cur.pos());
                return Some(InlineNode::Code {
                    code: CodeSpan::trim_padding(inner).to_string(),
                });
            }
            j += run;
        }
        self.ticks_exhausted.insert(n, inner_start);
        None
    }

    /// Finds the `[text](dest)` tail starting at the `[` at `open`.
    ///
    /// Returns the text, the raw destination and the index just past `)`.
    fn link_tail(&mut self, open: usize) -> Option<(&'a str, &'a str, usize)> {
        let s = self.cur.s;
        let b = s.as_bytes();
        let pairs = self.pairs.get_or_insert_with(|| pair_brackets(b));
        let text_end = *pairs.get(&open)?;
        if b.get(text_end + 1) != Some(&Link::DEST_OPEN) {
            return None;
        }
        let dest_end = *pairs.get(&(text_end + 1))?;
        Some((
            &s[open + 1..text_end],
            &s[text_end + 2..dest_end],
            dest_end + 1,
        ))
    }

    fn try_parse_link(&mut self) -> Option<InlineNode> {
        let (text, dest, end) = self.link_tail(self.cur.pos())?;
        let (href, title) = Link::destination(dest);
        self.cur.bump_n(end - self.cur.pos());
        Some(InlineNode::Link {
            children: self.nested(text),
            href,
            title,
        })
    }

    fn try_parse_image(&mut self) -> Option<InlineNode> {
        if self.cur.peek_at(1) != Some(Link::TEXT_OPEN) {
            return None;
        }
        let (alt, dest, end) = self.link_tail(self.cur.pos() + 1)?;
        let (src, title) = Link::destination(dest);
        self.cur.bump_n(end - self.cur.pos());
        Some(InlineNode::Image {
            alt: InlineNode::plain_text(&self.nested(alt)),
            src,
            title,
        })
    }

    /// `<https://example.com>` style autolinks.
    fn try_parse_autolink(&mut self) -> Option<InlineNode> {
        let start = self.cur.pos() + 1;
        let rest = self.cur.s.get(start..)?;
        if !Link::AUTO_SCHEMES.iter().any(|s| rest.starts_with(s)) {
            return None;
        }
        let len = rest.find(|c: char| {
            c == Link::AUTO_CLOSE as char || c == Link::AUTO_OPEN as char || c.is_whitespace()
        })?;
        if rest.as_bytes()[len] != Link::AUTO_CLOSE {
            return None;
        }
        let href = &rest[..len];
        self.cur.bump_n(1 + len + 1);
        Some(InlineNode::Link {
            children: vec![InlineNode::Text {
                text: href.to_string(),
            }],
            href: href.to_string(),
            title: None,
        })
    }

    fn try_parse_emphasis(&mut self) -> Option<InlineNode> {
        let d = self.cur.peek()?;
        if d == Emphasis::UNDERSCORE && self.cur.prev().is_some_and(|p| p.is_ascii_alphanumeric()) {
            // snake_case identifiers are not emphasis
            return None;
        }

        let (strong, em): (&'static [u8], &'static [u8]) = if d == Emphasis::STAR {
            (Emphasis::STRONG_STAR as &[u8], Emphasis::EM_STAR as &[u8])
        } else {
            (Emphasis::STRONG_UNDERSCORE as &[u8], Emphasis::EM_UNDERSCORE as &[u8])
        };
        if self.cur.run_len(d) >= 2
            && let Some(children) = self.delimited(strong)
        {
            return Some(InlineNode::Strong { children });
        }
        self.delimited(em).map(|children| InlineNode::Emphasis { children })
    }

    fn try_parse_strikethrough(&mut self) -> Option<InlineNode> {
        if !self.cur.starts_with(Emphasis::STRIKE) {
            return None;
        }
        self.delimited(Emphasis::STRIKE)
            .map(|children| InlineNode::Strikethrough { children })
    }

    /// Parses `<delim>inner<delim>` at the cursor, returning the parsed inner
    /// nodes. The inner text may not start or end with whitespace.
    fn delimited(&mut self, delim: &'static [u8]) -> Option<Vec<InlineNode>> {
        let src = self.cur.s;
        let b = src.as_bytes();
        let inner_start = self.cur.pos() + delim.len();
        if b.get(inner_start).is_none_or(|x| x.is_ascii_whitespace()) {
            return None;
        }

        let from = inner_start + 1;
        if self.exhausted.get(&delim).is_some_and(|f| from >= *f) {
            return None;
        }
        let Some(close) = (from..b.len()).find(|&j| closes_at(b, j, delim)) else {
            self.exhausted.insert(delim, from);
            return None;
        };
        let inner = self.cur.slice(inner_start, close);
        self.cur.bump_n(close + delim.len() - self.cur.pos());
        Some(self.nested(inner))
    }
}

/// Whether `delim` at `j` can close an emphasis-like span. `j` is past the
/// first inner byte, so `b[j - 1]` exists.
fn closes_at(b: &[u8], j: usize, delim: &[u8]) -> bool {
    if !b[j..].starts_with(delim) || b[j - 1].is_ascii_whitespace() {
        return false;
    }
    let single = delim.len() == 1;
    let part_of_longer_run = single && (b[j - 1] == delim[0] || b.get(j + 1) == Some(&delim[0]));
    let intraword = delim[0] == Emphasis::UNDERSCORE
        && b.get(j + delim.len()).is_some_and(|x| x.is_ascii_alphanumeric());
    !part_of_longer_run && !intraword && !is_escaped(b, j)
}

/// An odd run of backslashes before `j` escapes the byte at `j`.
fn is_escaped(b: &[u8], j: usize) -> bool {
    b[..j].iter().rev().take_while(|x| **x == b'\\').count() % 2 == 1
}

/// Pairs every `[` with its balancing `]` and every `(` with its `)`,
/// skipping backslash escapes.
fn pair_brackets(b: &[u8]) -> HashMap<usize, usize> {
    let mut pairs = HashMap::new();
    let mut square = vec![];
    let mut round = vec![];
    let mut j = 0;
    while j < b.len() {
        match b[j] {
            b'\\' => {
                j += 2;
                continue;
            }
            Link::TEXT_OPEN => square.push(j),
            Link::DEST_OPEN => round.push(j),
            Link::TEXT_CLOSE => {
                if let Some(open) = square.pop() {
                    pairs.insert(open, j);
                }
            }
            Link::DEST_CLOSE => {
                if let Some(open) = round.pop() {
                    pairs.insert(open, j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    pairs
}

/// Plain text of markup nested past [`MAX_INLINE_NESTING`], in one pass
/// with no recursion: delimiter bytes are dropped, escapes resolved and link
/// destinations skipped.
fn flatten(s: &str) -> String {
    let b = s.as_bytes();
    let pairs = pair_brackets(b);
    let mut out = String::with_capacity(s.len());
    let mut kept = 0;
    let mut j = 0;
    while j < b.len() {
        let (resume, next) = match b[j] {
            b'\\' if b.get(j + 1).is_some_and(|c| c.is_ascii_punctuation()) => (j + 1, j + 2),
            Link::TEXT_CLOSE if b.get(j + 1) == Some(&Link::DEST_OPEN) => {
                let end = pairs.get(&(j + 1)).map_or(j + 1, |close| close + 1);
                (end, end)
            }
            Link::IMAGE_BANG if b.get(j + 1) == Some(&Link::TEXT_OPEN) => (j + 1, j + 1),
            Link::TEXT_OPEN
            | Link::TEXT_CLOSE
            | CodeSpan::TICK
            | Emphasis::STAR
            | Emphasis::UNDERSCORE
            | b'~' => (j + 1, j + 1),
            _ => {
                j += 1;
                continue;
            }
        };
        out.push_str(&s[kept..j]);
        kept = resume;
        j = next;
    }
    out.push_str(&s[kept..]);
    out
}

fn push_text(out: &mut Vec<InlineNode>, text: &str) {
    if !text.is_empty() {
        push_node(
            out,
            InlineNode::Text {
                text: text.to_string(),
            },
        );
    }
}

fn push_node(out: &mut Vec<InlineNode>, node: InlineNode) {
    if let (Some(InlineNode::Text { text: prev }), InlineNode::Text { text }) =
        (out.last_mut(), &node)
    {
        prev.push_str(text);
        return;
    }
    out.push(node);
}
