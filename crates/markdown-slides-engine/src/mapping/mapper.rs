use crate::parsing::{ParseResult, blocks::Token, parse_markdown};

use super::{
    classifier::determine_slide_type_with,
    content::build_slide_content,
    pattern::analyze_content_pattern,
    settings::ClassifierSettings,
    types::{SlideData, SlideMappingResult},
};

/// Headings at or above this level start a new slide.
pub const SLIDE_BREAK_HEADING_LEVEL: u8 = 2;

/// Maps parsed documents to slides with a fixed set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct SlideMapper {
    settings: ClassifierSettings,
}

impl SlideMapper {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    /// One result per non-empty run, in document order.
    pub fn map(&self, result: &ParseResult) -> Vec<SlideMappingResult> {
        segment(&result.tokens)
            .into_iter()
            .map(|run| self.map_run(run))
            .collect()
    }

    pub fn map_run(&self, run: &[Token]) -> SlideMappingResult {
        let pattern = analyze_content_pattern(run);
        let classification = determine_slide_type_with(&pattern, &self.settings);
        let content = build_slide_content(run, &classification);
        log::debug!(
            "run of {} tokens -> {} ({})",
            run.len(),
            classification.slide_type,
            classification.rationale
        );

        SlideMappingResult {
            slide_type: classification.slide_type,
            pattern,
            rationale: classification.rationale,
            fallback: classification.fallback,
            content,
        }
    }

    pub fn markdown_to_slides(&self, text: &str) -> Vec<SlideData> {
        to_slide_data(self.map(&parse_markdown(text)))
    }
}

/// Splits top-level tokens into runs at horizontal rules and before level 1
/// and 2 headings. Empty runs are dropped.
pub fn segment(tokens: &[Token]) -> Vec<&[Token]> {
    let mut runs = vec![];
    let mut start = 0;
    for (i, t) in tokens.iter().enumerate() {
        match t {
            Token::HorizontalRule => {
                push_run(&mut runs, &tokens[start..i]);
                start = i + 1;
            }
            Token::Heading { level, .. } if *level <= SLIDE_BREAK_HEADING_LEVEL => {
                push_run(&mut runs, &tokens[start..i]);
                start = i;
            }
            _ => {}
        }
    }
    push_run(&mut runs, &tokens[start..]);
    log::debug!("{} tokens segmented into {} runs", tokens.len(), runs.len());
    runs
}

fn push_run<'a>(runs: &mut Vec<&'a [Token]>, run: &'a [Token]) {
    if !run.is_empty() {
        runs.push(run);
    }
}

/// Maps with the default thresholds.
pub fn map_tokens_to_slides(result: &ParseResult) -> Vec<SlideMappingResult> {
    SlideMapper::default().map(result)
}

/// Converts results to external slide records, numbering them in order.
pub fn to_slide_data(results: Vec<SlideMappingResult>) -> Vec<SlideData> {
    results
        .into_iter()
        .enumerate()
        .map(|(order, r)| SlideData {
            slide_type: r.slide_type,
            content: r.content,
            order,
        })
        .collect()
}

/// Parses and maps in one call with the default thresholds.
pub fn markdown_to_slides(text: &str) -> Vec<SlideData> {
    SlideMapper::default().markdown_to_slides(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::types::SlideType;
    use pretty_assertions::assert_eq;

    fn types(md: &str) -> Vec<SlideType> {
        map_tokens_to_slides(&parse_markdown(md))
            .into_iter()
            .map(|r| r.slide_type)
            .collect()
    }

    #[test]
    fn empty_input_has_no_slides() {
        assert!(markdown_to_slides("").is_empty());
        assert!(markdown_to_slides("\n\n   \n").is_empty());
    }

    #[test]
    fn rules_and_headings_split_runs() {
        let tokens = parse_markdown("# A\n\n---\n\n## B\n\ntext\n\n### C\n\nmore").tokens;
        let runs = segment(&tokens);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].len(), 4);
    }

    #[test]
    fn consecutive_rules_drop_empty_runs() {
        let tokens = parse_markdown("---\n\n***\n\n# Only\n\n___\n\n---").tokens;
        assert_eq!(segment(&tokens).len(), 1);
    }

    #[test]
    fn first_heading_does_not_make_empty_run() {
        let tokens = parse_markdown("# First\n\n## Second").tokens;
        let runs = segment(&tokens);
        assert_eq!(runs.len(), 2);
        assert!(matches!(runs[0][0], Token::Heading { level: 1, .. }));
    }

    #[test]
    fn order_follows_document() {
        let md = "# Deck\n\n---\n\n> A quote\n\n---\n\n| a | b |\n|---|---|\n| 1 | 2 |";
        assert_eq!(
            types(md),
            vec![SlideType::Title, SlideType::Quote, SlideType::Table]
        );
        let data = markdown_to_slides(md);
        let orders: Vec<_> = data.iter().map(|d| d.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn identical_runs_are_not_deduplicated() {
        assert_eq!(types("# Same\n\n# Same").len(), 2);
    }

    #[test]
    fn mapper_uses_its_settings() {
        let mapper = SlideMapper::new(ClassifierSettings {
            timeline_min_items: 2,
            ..ClassifierSettings::default()
        });
        let slides = mapper.markdown_to_slides("1. a\n2. b");
        assert_eq!(slides[0].slide_type, SlideType::Timeline);
        assert_eq!(types("1. a\n2. b"), vec![SlideType::CardGrid]);
    }
}
