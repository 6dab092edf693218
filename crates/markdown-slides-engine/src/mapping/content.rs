//! Builds the typed [`SlideContent`] payload for a classified run.

use crate::parsing::{
    blocks::{ListItem, Token},
    inline::InlineNode,
    strip_markdown_formatting,
};

use super::types::{
    Card, ComparisonSide, SlideClassification, SlideContent, SlideType, TimelineItem,
};

/// Prefixes that mark a quote attribution line.
const ATTRIBUTION_PREFIXES: [&str; 4] = ["—", "–", "--", "~"];

/// Separators between a list item's title and its description.
const TITLE_SEPARATORS: [&str; 3] = [": ", " — ", " - "];

pub fn build_slide_content(tokens: &[Token], classification: &SlideClassification) -> SlideContent {
    let (title, body) = split_title(tokens);
    match classification.slide_type {
        SlideType::Title => title_content(tokens),
        SlideType::Table => table_content(title, body),
        SlideType::Quote => quote_content(title, body),
        SlideType::Timeline => SlideContent::Timeline {
            title,
            items: timeline_items(body),
        },
        SlideType::Comparison => comparison_content(title, body),
        SlideType::CardGrid => {
            let (subtitle, cards) = cards(body);
            SlideContent::CardGrid {
                title,
                subtitle,
                cols: classification.cols.unwrap_or(2),
                cards,
            }
        }
    }
}

/// A leading level 1 or 2 heading becomes the slide title; deeper headings
/// stay in the body as card or column labels.
fn split_title(tokens: &[Token]) -> (Option<String>, &[Token]) {
    match tokens.split_first() {
        Some((Token::Heading { level, text, .. }, rest)) if *level <= 2 => {
            (Some(text.clone()), rest)
        }
        _ => (None, tokens),
    }
}

fn title_content(tokens: &[Token]) -> SlideContent {
    let mut headings = tokens.iter().filter_map(|t| match t {
        Token::Heading { text, .. } => Some(text.clone()),
        _ => None,
    });
    let title = headings.next().unwrap_or_default();
    let paragraph = tokens.iter().find_map(|t| match t {
        Token::Paragraph { text, .. } => Some(text.clone()),
        _ => None,
    });
    SlideContent::Title {
        title,
        subtitle: paragraph.or_else(|| headings.next()),
    }
}

fn table_content(title: Option<String>, body: &[Token]) -> SlideContent {
    let table = find_table(body);
    let (headers, alignments, rows) = match table {
        Some(Token::Table {
            headers,
            alignments,
            rows,
        }) => (headers.clone(), alignments.clone(), rows.clone()),
        _ => (vec![], vec![], vec![]),
    };
    SlideContent::Table {
        title,
        headers,
        alignments,
        rows,
    }
}

fn find_table(tokens: &[Token]) -> Option<&Token> {
    tokens.iter().find_map(|t| match t {
        Token::Table { .. } => Some(t),
        Token::Blockquote { children } => find_table(children),
        _ => None,
    })
}

fn quote_content(title: Option<String>, body: &[Token]) -> SlideContent {
    let mut lines = vec![];
    let mut author = None;
    for t in body {
        match t {
            Token::Blockquote { children } => {
                for child in children {
                    let text = child.plain_text();
                    match attribution(&text) {
                        Some(a) => author = Some(a),
                        None if !text.is_empty() => lines.push(text),
                        None => {}
                    }
                }
            }
            // Attribution written below the quote.
            Token::Paragraph { text, .. } if author.is_none() && !lines.is_empty() => {
                author = Some(attribution(text).unwrap_or_else(|| text.clone()));
            }
            _ => {}
        }
    }
    SlideContent::Quote {
        title,
        quote: lines.join("\n"),
        author,
    }
}

fn attribution(text: &str) -> Option<String> {
    ATTRIBUTION_PREFIXES
        .iter()
        .find_map(|p| text.strip_prefix(p))
        .map(|rest| rest.trim().to_string())
        .filter(|a| !a.is_empty())
}

fn timeline_items(body: &[Token]) -> Vec<TimelineItem> {
    let mut items: Vec<TimelineItem> = vec![];
    for t in body {
        let Token::List { items: list, .. } = t else {
            continue;
        };
        for group in item_groups(list) {
            let (title, description) = split_item(group.item, &group.details);
            // Steps count by position; written numbers are often all `1.`.
            items.push(TimelineItem {
                step: items.len() as u32 + 1,
                title,
                description,
            });
        }
    }
    items
}

fn comparison_content(title: Option<String>, body: &[Token]) -> SlideContent {
    let mut sides: Vec<ComparisonSide> = vec![];
    let mut label: Option<String> = None;
    for t in body {
        match t {
            Token::Heading { text, .. } => label = Some(text.clone()),
            Token::Paragraph { text, .. } if label.is_none() => label = Some(text.clone()),
            Token::List { items, .. } => {
                let items = items
                    .iter()
                    .filter(|i| i.depth == 0)
                    .map(|i| i.text.clone())
                    .collect();
                let default = if sides.is_empty() { "Option A" } else { "Option B" };
                sides.push(ComparisonSide {
                    title: label.take().unwrap_or_else(|| default.to_string()),
                    items,
                });
            }
            _ => {}
        }
    }

    let mut sides = sides.into_iter();
    let mut next_side = |default: &str| {
        sides.next().unwrap_or_else(|| ComparisonSide {
            title: default.to_string(),
            items: vec![],
        })
    };
    let left_side = next_side("Option A");
    let right_side = next_side("Option B");
    SlideContent::Comparison {
        title,
        left_side,
        right_side,
    }
}

/// Cards and an optional intro line. When the body has lists, only their
/// items become cards and the first other text block is the intro.
/// Otherwise there is one card per heading section or block.
fn cards(body: &[Token]) -> (Option<String>, Vec<Card>) {
    if !body.iter().any(|t| matches!(t, Token::List { .. })) {
        return (None, section_cards(body));
    }

    let mut intro = None;
    let mut cards = vec![];
    for t in body {
        match t {
            Token::List { items, .. } => {
                for group in item_groups(items) {
                    let (title, description) = split_item(group.item, &group.details);
                    cards.push(Card { title, description });
                }
            }
            Token::Heading { .. } | Token::HorizontalRule => {}
            other => {
                let text = other.plain_text();
                if intro.is_none() && !text.is_empty() {
                    intro = Some(text);
                }
            }
        }
    }
    (intro, cards)
}

fn section_cards(body: &[Token]) -> Vec<Card> {
    let mut cards: Vec<Card> = vec![];
    for t in body {
        match t {
            Token::Heading { text, .. } => cards.push(Card {
                title: text.clone(),
                description: String::new(),
            }),
            Token::HorizontalRule => {}
            other => {
                let text = other.plain_text();
                if text.is_empty() {
                    continue;
                }
                if let Some(card) = cards.last_mut()
                    && card.description.is_empty()
                {
                    card.description = text;
                    continue;
                }
                let (title, description) = split_text(&text);
                cards.push(Card { title, description });
            }
        }
    }
    cards
}

/// A top-level item with the nested items beneath it.
struct ItemGroup<'a> {
    item: &'a ListItem,
    details: Vec<&'a str>,
}

fn item_groups(items: &[ListItem]) -> Vec<ItemGroup<'_>> {
    let mut groups: Vec<ItemGroup> = vec![];
    for item in items {
        if item.depth > 0
            && let Some(group) = groups.last_mut()
        {
            group.details.push(&item.text);
            continue;
        }
        groups.push(ItemGroup {
            item,
            details: vec![],
        });
    }
    groups
}

/// Splits a list item into a title and description. A leading bold span is
/// the title; otherwise the first separator splits the text. Nested items
/// extend the description.
fn split_item(item: &ListItem, details: &[&str]) -> (String, String) {
    let (title, mut description) = match item.inline.first() {
        Some(InlineNode::Strong { children }) if item.inline.len() > 1 => {
            let title = strip_markdown_formatting(&InlineNode::plain_text(children));
            let rest = InlineNode::plain_text(&item.inline[1..]);
            let rest = rest.trim_start_matches([':', '-', '—', '–', ' ']);
            (title, strip_markdown_formatting(rest))
        }
        _ => split_text(&item.text),
    };
    for d in details {
        if !description.is_empty() {
            description.push('\n');
        }
        description.push_str(d);
    }
    (title, description)
}

fn split_text(text: &str) -> (String, String) {
    TITLE_SEPARATORS
        .iter()
        .find_map(|sep| text.split_once(sep))
        .map(|(t, d)| (t.trim().to_string(), d.trim().to_string()))
        .unwrap_or_else(|| (text.to_string(), String::new()))
}
