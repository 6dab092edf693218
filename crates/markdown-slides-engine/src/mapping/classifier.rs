use super::{
    pattern::ContentPattern,
    settings::ClassifierSettings,
    types::{SlideClassification, SlideType},
};

/// How a rule derives the column count of its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    None,
    Fixed(u8),
    /// One column per top-level list item, within `MIN_COLS..=MAX_COLS`.
    PerItem,
}

pub const MIN_COLS: u8 = 2;
pub const MAX_COLS: u8 = 4;

/// One entry of the ordered rule table.
pub struct SlideMappingRule {
    pub name: &'static str,
    pub slide_type: SlideType,
    pub rationale: &'static str,
    pub predicate: fn(&ContentPattern, &ClassifierSettings) -> bool,
    pub columns: Columns,
    /// The catch-all rule at the end of the table.
    pub fallback: bool,
}

impl SlideMappingRule {
    pub fn matches(&self, pattern: &ContentPattern, settings: &ClassifierSettings) -> bool {
        (self.predicate)(pattern, settings)
    }

    fn cols(&self, pattern: &ContentPattern) -> Option<u8> {
        match self.columns {
            Columns::None => None,
            Columns::Fixed(n) => Some(n),
            Columns::PerItem => {
                let n = u8::try_from(pattern.top_level_item_count).unwrap_or(MAX_COLS);
                Some(n.clamp(MIN_COLS, MAX_COLS))
            }
        }
    }
}

impl std::fmt::Debug for SlideMappingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideMappingRule")
            .field("name", &self.name)
            .field("slide_type", &self.slide_type)
            .field("fallback", &self.fallback)
            .finish()
    }
}

// First match wins; reordering changes results.
static RULES: [SlideMappingRule; 7] = [
    SlideMappingRule {
        name: "table",
        slide_type: SlideType::Table,
        rationale: "Content contains a table",
        predicate: |p, _| p.has_table,
        columns: Columns::None,
        fallback: false,
    },
    SlideMappingRule {
        name: "quote",
        slide_type: SlideType::Quote,
        rationale: "Blockquote is the dominant content and there are no list items",
        predicate: |p, _| p.has_quote && p.item_count == 0,
        columns: Columns::None,
        fallback: false,
    },
    SlideMappingRule {
        name: "timeline",
        slide_type: SlideType::Timeline,
        rationale: "Numbered list describes a sequence of steps",
        predicate: |p, s| p.has_numbered_list && p.item_count >= s.timeline_min_items,
        columns: Columns::None,
        fallback: false,
    },
    SlideMappingRule {
        name: "comparison",
        slide_type: SlideType::Comparison,
        rationale: "Two list groups can be shown side by side",
        predicate: |p, _| p.list_count == 2,
        columns: Columns::None,
        fallback: false,
    },
    SlideMappingRule {
        name: "card-grid",
        slide_type: SlideType::CardGrid,
        rationale: "Single list of 2 to 4 short items fits a card grid",
        predicate: |p, s| {
            p.list_count == 1
                && (2..=4).contains(&p.top_level_item_count)
                && p.avg_item_length <= s.short_item_max_len as f64
        },
        columns: Columns::PerItem,
        fallback: false,
    },
    SlideMappingRule {
        name: "title",
        slide_type: SlideType::Title,
        rationale: "Heading with at most one short paragraph",
        predicate: |p, s| {
            p.has_heading
                && p.paragraph_count <= 1
                && p.body_block_count == p.paragraph_count
                && p.longest_paragraph <= s.title_paragraph_max_len
        },
        columns: Columns::None,
        fallback: false,
    },
    SlideMappingRule {
        name: "fallback",
        slide_type: SlideType::CardGrid,
        rationale: "Low confidence: no specific layout matched, using a 2-column card grid",
        predicate: |_, _| true,
        columns: Columns::Fixed(2),
        fallback: true,
    },
];

/// The ordered rule table.
pub fn mapping_rules() -> &'static [SlideMappingRule] {
    &RULES
}

/// Classifies a pattern with the default thresholds.
pub fn determine_slide_type(pattern: &ContentPattern) -> SlideClassification {
    determine_slide_type_with(pattern, &ClassifierSettings::default())
}

pub fn determine_slide_type_with(
    pattern: &ContentPattern,
    settings: &ClassifierSettings,
) -> SlideClassification {
    let rule = RULES
        .iter()
        .find(|r| r.matches(pattern, settings))
        .unwrap_or(&RULES[RULES.len() - 1]);
    log::trace!("rule {:?} matched {:?} content", rule.name, pattern.shape);

    SlideClassification {
        slide_type: rule.slide_type,
        cols: rule.cols(pattern),
        rationale: rule.rationale.to_string(),
        fallback: rule.fallback,
    }
}
