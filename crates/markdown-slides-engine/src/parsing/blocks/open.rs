use super::{
    classify::LineClass,
    kinds::{FenceSig, ListMarker},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode(FenceSig),
    ThematicBreak,
    Heading { level: u8, content: String },
    BlockQuote,
    ListItem(ListMarker),
    RawText,
}

/// Detects a block opener on a line that is not continuing an open block.
///
/// Tables are not listed here: a table needs the previous paragraph line as
/// its header, which only the builder knows about.
pub fn try_open_leaf(c: &LineClass, quotes_allowed: bool) -> Option<BlockOpen> {
    // Precedence: fence beats everything else, and a rule beats a list item
    // so that `- - -` separates slides.
    if let Some(sig) = &c.fence_sig {
        return Some(BlockOpen::FencedCode(sig.clone()));
    }
    if c.is_thematic_break {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some((level, content)) = &c.heading {
        return Some(BlockOpen::Heading {
            level: *level,
            content: content.clone(),
        });
    }
    if c.quote_depth > 0 && quotes_allowed {
        return Some(BlockOpen::BlockQuote);
    }
    if let Some(marker) = &c.list_marker {
        return Some(BlockOpen::ListItem(marker.clone()));
    }
    if c.is_raw_text {
        return Some(BlockOpen::RawText);
    }
    None
}
