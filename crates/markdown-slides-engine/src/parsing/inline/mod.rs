//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, list items, table cells).
//!
//! - Escapes and code spans suppress all other inline parsing inside them
//! - Links, images, emphasis, strong and strikethrough are parsed outside
//!   raw zones; unclosed constructs degrade to text
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum plus `LinkRef`/`ImageRef` inventory entries
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing
//! - **`parser`**: `parse_inline()` main entry point; `InlineParser` holds the
//!   `try_parse_*` helpers and caps nesting at `MAX_INLINE_NESTING`
//! - **`strip`**: `strip_markdown_formatting()` plain-text projection
//! - **`extract`**: regex-based `extract_links()`/`extract_images()` over raw text

pub mod cursor;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod strip;
pub mod types;

pub use extract::{extract_images, extract_links};
pub use parser::{MAX_INLINE_NESTING, parse_inline};
pub use strip::strip_markdown_formatting;
pub use types::{ImageRef, InlineNode, LinkRef};
