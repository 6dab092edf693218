//! # Slide Mapping
//!
//! Turns a [`ParseResult`](crate::parsing::ParseResult) into ordered slides.
//!
//! ## Pipeline
//!
//! 1. **Segmentation** (`mapper`): top-level tokens are split into runs at
//!    horizontal rules and before level 1/2 headings
//! 2. **Analysis** (`pattern`): each run is summarized as a `ContentPattern`
//! 3. **Classification** (`classifier`): an ordered rule table picks the
//!    slide type; the first matching rule wins and the last rule always matches
//! 4. **Content** (`content`): the run is reshaped into the slide type's
//!    `SlideContent` payload
//!
//! `stats` aggregates finished results.

pub mod classifier;
pub mod content;
pub mod mapper;
pub mod pattern;
pub mod settings;
pub mod stats;
pub mod types;

pub use classifier::{SlideMappingRule, determine_slide_type, determine_slide_type_with, mapping_rules};
pub use mapper::{SlideMapper, map_tokens_to_slides, markdown_to_slides, segment, to_slide_data};
pub use pattern::{ContentPattern, ContentShape, analyze_content_pattern};
pub use settings::ClassifierSettings;
pub use stats::{MappingStatistics, get_mapping_statistics};
pub use types::{
    Card, ComparisonSide, SlideClassification, SlideContent, SlideData, SlideMappingResult,
    SlideType, TimelineItem, slide_type_description,
};
