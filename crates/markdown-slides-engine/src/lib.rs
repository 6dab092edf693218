pub mod error;
pub mod mapping;
pub mod parsing;
pub mod samples;

// Re-export key types for easier usage
pub use error::UnknownSlideType;
pub use mapping::*;
pub use parsing::{
    ParseResult, blocks::Token, extract_images, extract_links, inline::ImageRef,
    inline::InlineNode, inline::LinkRef, parse_document, parse_markdown, strip_markdown_formatting,
};
pub use samples::{all_samples, sample};
