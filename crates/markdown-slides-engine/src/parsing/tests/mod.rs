//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; each fixture test checks the parser
//! invariants before asserting on the token stream.


use pretty_assertions::assert_eq;

use crate::parsing::{
    ParseResult,
    blocks::{Alignment, Token},
    inline::{InlineNode, LinkRef, MAX_INLINE_NESTING},
    parse_markdown,
};

fn parse_fixture(name: &str) -> ParseResult {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let result = parse_markdown(&md);
    invariants::check(&result);
    result
}

fn parse(md: &str) -> ParseResult {
    let result = parse_markdown(md);
    invariants::check(&result);
    result
}

fn kinds(tokens: &[Token]) -> Vec<&'static str> {
    tokens.iter().map(Token::kind_name).collect()
}

// Fixture tests

#[test]
fn fixture_mixed_document() {
    let result = parse_fixture("mixed_document");

    assert_eq!(
        kinds(&result.tokens),
        vec![
            "heading",
            "paragraph",
            "horizontalRule",
            "heading",
            "list",
            "list",
            "table",
            "blockquote",
            "codeBlock",
            "image",
            "text",
        ]
    );

    let Token::List { ordered, items } = &result.tokens[4] else {
        panic!("expected list, got {:?}", result.tokens[4]);
    };
    assert!(!ordered);
    let depths: Vec<_> = items.iter().map(|i| i.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 0]);
    assert_eq!(items[0].text, "Revenue up 12%");

    let Token::Table {
        headers,
        alignments,
        rows,
    } = &result.tokens[6]
    else {
        panic!("expected table");
    };
    assert_eq!(headers, &vec!["Region", "Revenue", "Growth"]);
    assert_eq!(
        alignments,
        &vec![Alignment::Left, Alignment::Center, Alignment::Right]
    );
    assert_eq!(rows[1], vec!["APAC", "2.2", ""]);
    assert_eq!(rows[2], vec!["AMER", "6.0", "14%"]);

    let Token::CodeBlock { language, body } = &result.tokens[8] else {
        panic!("expected code block");
    };
    assert_eq!(language.as_deref(), Some("rust"));
    assert_eq!(body, "fn main() {\n    // [not](a-link)\n}");

    assert_eq!(
        result.links,
        vec![LinkRef {
            text: "the dashboard".into(),
            href: "https://example.com/q3".into(),
            title: Some("Q3".into()),
        }]
    );
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].src, "org.png");
}

#[test]
fn fixture_unterminated_fence() {
    let result = parse_fixture("unterminated_fence");

    assert_eq!(kinds(&result.tokens), vec!["paragraph", "codeBlock"]);
    let Token::CodeBlock { language, body } = &result.tokens[1] else {
        panic!("expected code block");
    };
    assert_eq!(language.as_deref(), Some("python"));
    assert!(body.ends_with("# Not a heading"));
}

// Totality

#[test]
fn empty_document() {
    assert!(parse("").tokens.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n  \n\t\n").tokens.is_empty());
}

#[test]
fn single_characters() {
    for md in ["#", "-", ">", "|", "`", "*", "1.", "<", "!", "["] {
        let result = parse(md);
        assert!(result.tokens.len() <= 1, "{md:?} gave {:?}", result.tokens);
    }
}

#[test]
fn lone_fence_is_an_empty_code_block() {
    let result = parse("```");
    assert_eq!(
        result.tokens,
        vec![Token::CodeBlock {
            language: None,
            body: String::new()
        }]
    );
}

// Blocks

#[test]
fn paragraph_lines_join_until_blank() {
    let result = parse("first line\nsecond line\n\nnext paragraph");
    assert_eq!(kinds(&result.tokens), vec!["paragraph", "paragraph"]);
    let Token::Paragraph { raw, .. } = &result.tokens[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(raw, "first line\nsecond line");
}

#[test]
fn dashes_after_paragraph_are_a_rule() {
    let result = parse("Not a setext heading\n---");
    assert_eq!(kinds(&result.tokens), vec!["paragraph", "horizontalRule"]);
}

#[test]
fn list_continues_across_blank_lines() {
    let result = parse("- one\n\n- two\n\n- three");
    let Token::List { items, .. } = &result.tokens[0] else {
        panic!("expected list");
    };
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(items.len(), 3);
}

#[test]
fn switching_marker_kind_starts_new_list() {
    let result = parse("- bullet\n- bullet\n1. number\n2. number");
    assert_eq!(kinds(&result.tokens), vec!["list", "list"]);
    assert!(matches!(result.tokens[1], Token::List { ordered: true, .. }));
}

#[test]
fn nested_ordered_items_stay_in_bullet_list() {
    let result = parse("- parent\n  1. child\n  2. child");
    let Token::List { ordered, items } = &result.tokens[0] else {
        panic!("expected list");
    };
    assert!(!ordered);
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].ordinal, Some(1));
    assert_eq!(items[1].depth, 1);
}

#[test]
fn over_indented_child_is_clamped() {
    let result = parse("- a\n        - b");
    let Token::List { items, .. } = &result.tokens[0] else {
        panic!("expected list");
    };
    assert_eq!(items[1].depth, 1);
}

#[test]
fn indented_continuation_joins_item() {
    let result = parse("- first\n  still first\n- second");
    let Token::List { items, .. } = &result.tokens[0] else {
        panic!("expected list");
    };
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].raw, "first\nstill first");
}

#[test]
fn task_items() {
    let result = parse("- [x] done\n- [ ] todo\n- plain");
    let Token::List { items, .. } = &result.tokens[0] else {
        panic!("expected list");
    };
    let checked: Vec<_> = items.iter().map(|i| i.checked).collect();
    assert_eq!(checked, vec![Some(true), Some(false), None]);
    assert_eq!(items[0].text, "done");
}

#[test]
fn table_requires_matching_delimiter() {
    let result = parse("| a | b |\n|---|\n| 1 | 2 |");
    assert!(result.tokens.iter().all(|t| !matches!(t, Token::Table { .. })));
}

#[test]
fn table_ends_at_line_without_pipe() {
    let result = parse("| a | b |\n|---|---|\n| 1 | 2 |\nafter");
    assert_eq!(kinds(&result.tokens), vec!["table", "paragraph"]);
}

#[test]
fn paragraph_lines_before_table_stay_paragraph() {
    let result = parse("Intro text\n| a | b |\n|---|---|\n| 1 | 2 |");
    assert_eq!(kinds(&result.tokens), vec!["paragraph", "table"]);
}

#[test]
fn blockquote_children_are_parsed() {
    let result = parse("> ## Heading\n> - item\n> - item");
    let Token::Blockquote { children } = &result.tokens[0] else {
        panic!("expected blockquote");
    };
    assert_eq!(kinds(children), vec!["heading", "list"]);
}

#[test]
fn deeply_nested_quotes_terminate() {
    let md = format!("{} deep", ">".repeat(200));
    let result = parse(&md);
    assert_eq!(result.tokens.len(), 1);
}

#[test]
fn code_fence_suppresses_blocks() {
    let result = parse("```\n# not a heading\n- not a list\n```");
    assert_eq!(kinds(&result.tokens), vec!["codeBlock"]);
}

#[test]
fn shorter_fence_does_not_close() {
    let result = parse("````\n```\nstill code\n````");
    let Token::CodeBlock { body, .. } = &result.tokens[0] else {
        panic!("expected code block");
    };
    assert_eq!(body, "```\nstill code");
}

// Inventory

#[test]
fn links_collected_from_every_level() {
    let md = "\
# [Heading link](h)

- [item link](i)

> [quote link](q)

| col |
|-----|
| [cell link](c) |

`[code](not-a-link)`
";
    let hrefs: Vec<_> = parse(md).links.into_iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["h", "i", "q", "c"]);
}

#[test]
fn images_are_not_links() {
    let result = parse("Look: ![diagram](d.svg) and [docs](docs.html)");
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.links.len(), 1);
    assert_eq!(result.links[0].href, "docs.html");
}

#[test]
fn linked_image_is_collected() {
    let result = parse("[![Company logo](logo.png)](https://example.com)");
    assert_eq!(kinds(&result.tokens), vec!["paragraph"]);
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].src, "logo.png");
    assert_eq!(result.links.len(), 1);
    assert_eq!(result.links[0].text, "Company logo");
}

#[test]
fn nested_links_are_all_collected() {
    let result = parse("[[[x](c)](b)](a)");
    let hrefs: Vec<_> = result.links.into_iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["a", "b", "c"]);
}

#[test]
fn deeply_nested_links_terminate() {
    let n = 100_000;
    let md = format!("{}x{}", "[".repeat(n), "](u)".repeat(n));
    let result = parse(&md);
    assert_eq!(kinds(&result.tokens), vec!["paragraph"]);
    assert_eq!(result.links.len(), MAX_INLINE_NESTING);
    let Token::Paragraph { text, .. } = &result.tokens[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(text, "x");
}

#[test]
fn long_run_of_unclosed_emphasis_is_fast() {
    let md = "*a ".repeat(35_000);
    let started = std::time::Instant::now();
    let result = parse(&md);
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
    assert_eq!(kinds(&result.tokens), vec!["paragraph"]);
}

#[test]
fn heading_inline_nodes() {
    let result = parse("## Ship **fast**");
    let Token::Heading { level, text, inline, .. } = &result.tokens[0] else {
        panic!("expected heading");
    };
    assert_eq!(*level, 2);
    assert_eq!(text, "Ship fast");
    assert_eq!(
        inline[1],
        InlineNode::Strong {
            children: vec![InlineNode::Text {
                text: "fast".into()
            }]
        }
    );
}
