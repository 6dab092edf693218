use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::UnknownSlideType, parsing::blocks::Alignment};

use super::pattern::ContentPattern;

/// Presentation archetype a run of tokens is rendered as.
///
/// The kebab-case names are a stable wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideType {
    Title,
    CardGrid,
    Comparison,
    Timeline,
    Quote,
    Table,
}

impl SlideType {
    pub const ALL: [SlideType; 6] = [
        SlideType::Title,
        SlideType::CardGrid,
        SlideType::Comparison,
        SlideType::Timeline,
        SlideType::Quote,
        SlideType::Table,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlideType::Title => "title",
            SlideType::CardGrid => "card-grid",
            SlideType::Comparison => "comparison",
            SlideType::Timeline => "timeline",
            SlideType::Quote => "quote",
            SlideType::Table => "table",
        }
    }

    /// Human-readable description shown next to the slide type.
    pub fn description(self) -> &'static str {
        match self {
            SlideType::Title => "Title slide with a headline and optional subtitle",
            SlideType::CardGrid => "Grid of 2 to 4 cards, one per short point",
            SlideType::Comparison => "Two columns contrasting a pair of lists",
            SlideType::Timeline => "Ordered sequence of steps or milestones",
            SlideType::Quote => "Highlighted quotation with optional attribution",
            SlideType::Table => "Tabular data with headers and rows",
        }
    }
}

/// Description for a slide type given by name. Unknown names get a generic
/// description instead of an error.
pub fn slide_type_description(name: &str) -> &'static str {
    name.parse::<SlideType>()
        .map(SlideType::description)
        .unwrap_or(GENERIC_DESCRIPTION)
}

const GENERIC_DESCRIPTION: &str = "Generic content slide";

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideType {
    type Err = UnknownSlideType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlideType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownSlideType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSide {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// Normalized content of one slide, shaped by its slide type.
///
/// Serializes as a plain object (no tag); the tag lives on [`SlideData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum SlideContent {
    Title {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    CardGrid {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Intro text written before the list the cards come from.
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        cols: u8,
        cards: Vec<Card>,
    },
    Comparison {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        left_side: ComparisonSide,
        right_side: ComparisonSide,
    },
    Timeline {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<TimelineItem>,
    },
    Quote {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        quote: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    Table {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        headers: Vec<String>,
        alignments: Vec<Alignment>,
        rows: Vec<Vec<String>>,
    },
}

impl SlideContent {
    pub fn slide_type(&self) -> SlideType {
        match self {
            SlideContent::Title { .. } => SlideType::Title,
            SlideContent::CardGrid { .. } => SlideType::CardGrid,
            SlideContent::Comparison { .. } => SlideType::Comparison,
            SlideContent::Timeline { .. } => SlideType::Timeline,
            SlideContent::Quote { .. } => SlideType::Quote,
            SlideContent::Table { .. } => SlideType::Table,
        }
    }
}

/// Classification of one run: the chosen type and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideClassification {
    pub slide_type: SlideType,
    /// Column count for card grids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<u8>,
    pub rationale: String,
    /// Set when no specific rule matched.
    pub fallback: bool,
}

/// Output of mapping one run of tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideMappingResult {
    pub slide_type: SlideType,
    pub pattern: ContentPattern,
    pub rationale: String,
    pub fallback: bool,
    pub content: SlideContent,
}

/// External slide record: `{type, content, order}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideData {
    #[serde(rename = "type")]
    pub slide_type: SlideType,
    pub content: SlideContent,
    /// Position in the output sequence.
    pub order: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_round_trip() {
        for t in SlideType::ALL {
            assert_eq!(t.as_str().parse::<SlideType>(), Ok(t));
            assert_eq!(
                serde_json::to_value(t).unwrap(),
                serde_json::json!(t.as_str())
            );
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "carousel".parse::<SlideType>().unwrap_err();
        assert_eq!(err, UnknownSlideType("carousel".into()));
        assert_eq!(err.to_string(), "Unknown slide type: carousel");
    }

    #[test]
    fn description_by_name_never_fails() {
        assert_eq!(
            slide_type_description("quote"),
            SlideType::Quote.description()
        );
        assert_eq!(slide_type_description("carousel"), "Generic content slide");
        assert_eq!(slide_type_description(""), "Generic content slide");
    }

    #[test]
    fn comparison_serializes_camel_case() {
        let content = SlideContent::Comparison {
            title: None,
            left_side: ComparisonSide {
                title: "Before".into(),
                items: vec!["slow".into()],
            },
            right_side: ComparisonSide {
                title: "After".into(),
                items: vec!["fast".into()],
            },
        };
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            serde_json::json!({
                "leftSide": {"title": "Before", "items": ["slow"]},
                "rightSide": {"title": "After", "items": ["fast"]},
            })
        );
    }

    #[test]
    fn slide_data_shape() {
        let data = SlideData {
            slide_type: SlideType::Title,
            content: SlideContent::Title {
                title: "Hello".into(),
                subtitle: None,
            },
            order: 0,
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            serde_json::json!({"type": "title", "content": {"title": "Hello"}, "order": 0})
        );
    }
}
