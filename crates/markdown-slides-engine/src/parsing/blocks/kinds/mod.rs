//! Block-specific types that own their syntax delimiters.
//!
//! The classifier and builder call into these; they never hardcode `#`,
//! `>` or fence markers themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod raw_text;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use list::{List, ListMarker};
pub use paragraph::Paragraph;
pub use raw_text::RawText;
pub use table::{Alignment, Table};
pub use thematic_break::ThematicBreak;
