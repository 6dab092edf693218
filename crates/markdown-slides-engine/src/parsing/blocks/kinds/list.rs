/// A list item marker found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// The number of an ordered marker (`3.` → 3).
    pub ordinal: Option<u32>,
    /// Item text after the marker.
    pub content: String,
}

/// List block type. Owns marker syntax and the indentation unit.
pub struct List;

impl List {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_DELIMITERS: [char; 2] = ['.', ')'];
    /// Spaces per nesting level.
    pub const INDENT_UNIT: usize = 2;
    /// Ordered markers longer than this are treated as text (`1234567890.`).
    const MAX_ORDINAL_DIGITS: usize = 9;

    /// Parses a marker from a line whose indentation has already been removed.
    pub fn marker(text: &str) -> Option<ListMarker> {
        let t = text.trim_end_matches(['\r', '\n']);
        let first = t.chars().next()?;

        if Self::BULLETS.contains(&first) {
            let rest = &t[first.len_utf8()..];
            return Self::after_marker(rest).map(|content| ListMarker {
                ordered: false,
                ordinal: None,
                content: content.to_string(),
            });
        }

        let digits = t.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > Self::MAX_ORDINAL_DIGITS {
            return None;
        }
        let delimiter = t[digits..].chars().next()?;
        if !Self::ORDERED_DELIMITERS.contains(&delimiter) {
            return None;
        }
        let rest = &t[digits + 1..];
        let content = Self::after_marker(rest)?;
        Some(ListMarker {
            ordered: true,
            ordinal: t[..digits].parse().ok(),
            content: content.to_string(),
        })
    }

    /// A marker must be followed by whitespace or end the line.
    fn after_marker(rest: &str) -> Option<&str> {
        if rest.is_empty() {
            Some("")
        } else if rest.starts_with([' ', '\t']) {
            Some(rest.trim())
        } else {
            None
        }
    }

    /// Splits a GitHub task checkbox (`[ ]`, `[x]`) off the item text.
    pub fn task(content: &str) -> (Option<bool>, &str) {
        for (prefix, checked) in [("[ ]", false), ("[x]", true), ("[X]", true)] {
            if let Some(rest) = content.strip_prefix(prefix)
                && (rest.is_empty() || rest.starts_with(' '))
            {
                return (Some(checked), rest.trim_start());
            }
        }
        (None, content)
    }

    /// Nesting depth of an item indented `indent` columns in a list whose
    /// first item sat at `base` columns.
    ///
    /// Depth never jumps more than one level past the previous item, so an
    /// over-indented child still lands directly beneath its parent.
    pub fn depth(indent: usize, base: usize, previous: Option<usize>) -> usize {
        let raw = indent.saturating_sub(base) / Self::INDENT_UNIT;
        match previous {
            Some(prev) => raw.min(prev + 1),
            None => 0,
        }
    }
}
