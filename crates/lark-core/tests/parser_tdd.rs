//! Behavioral tests for the lark encoder
//!
//! Each test feeds a small line sequence through `encode` and checks the
//! exact tree that comes out.

use lark_ast::{Article, Block, Document, Glyph, Section};
use lark_core::{classify, encode, parse};

fn doc(articles: Vec<Vec<Vec<Block>>>) -> Document {
    Document {
        articles: articles
            .into_iter()
            .map(|sections| Article::new(sections.into_iter().map(Section::new).collect()))
            .collect(),
    }
}

/// Input:
/// ```text
/// =Title
/// Hello world.
/// ```
#[test]
fn test_header_then_paragraph() {
    let result = encode(&["=Title", "Hello world."]);

    let expected = doc(vec![vec![vec![
        Block::new(Glyph::Header, ["Title"]),
        Block::new(Glyph::Paragraph, ["Hello world."]),
    ]]]);
    assert_eq!(result, expected);
}

#[test]
fn test_article_divider_splits_articles() {
    let result = encode(&["=A", "***", "=B"]);

    let expected = doc(vec![
        vec![vec![Block::new(Glyph::Header, ["A"])]],
        vec![vec![Block::new(Glyph::Header, ["B"])]],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_same_glyph_lines_group_into_one_block() {
    let result = encode(&["*one", "*two", "paragraph"]);

    let expected = doc(vec![vec![vec![
        Block::new(Glyph::Ulist, ["one", "two"]),
        Block::new(Glyph::Paragraph, ["paragraph"]),
    ]]]);
    assert_eq!(result, expected);
}

#[test]
fn test_pre_lines_only_lose_their_sigil() {
    let result = encode(&["'code line 1", "'code line 2"]);

    let expected = doc(vec![vec![vec![Block::new(
        Glyph::Pre,
        ["code line 1", "code line 2"],
    )]]]);
    assert_eq!(result, expected);
}

#[test]
fn test_paragraph_dash_normalization() {
    let result = encode(&["a -- b"]);
    assert_eq!(result.articles[0].sections[0].blocks[0].contents, vec!["a \u{2014} b"]);
}

#[test]
fn test_lone_section_divider_yields_nothing() {
    assert!(encode(&["---"]).is_empty());
    assert!(encode(&["***"]).is_empty());
    assert!(encode(&["---", "***", "---"]).is_empty());
}

#[test]
fn test_empty_input_yields_empty_document() {
    let lines: [&str; 0] = [];
    assert!(encode(&lines).is_empty());
}

#[test]
fn test_section_divider_splits_sections() {
    let result = encode(&["=A", "---", "body", "more"]);

    let expected = doc(vec![vec![
        vec![Block::new(Glyph::Header, ["A"])],
        vec![Block::new(Glyph::Paragraph, ["body", "more"])],
    ]]);
    assert_eq!(result, expected);
}

#[test]
fn test_same_glyph_across_divider_starts_new_block() {
    let result = encode(&["*a", "---", "*b"]);

    let expected = doc(vec![vec![
        vec![Block::new(Glyph::Ulist, ["a"])],
        vec![Block::new(Glyph::Ulist, ["b"])],
    ]]);
    assert_eq!(result, expected);
}

#[test]
fn test_article_divider_closes_open_section() {
    let result = encode(&["=A", "---", "x", "***", "y"]);

    let expected = doc(vec![
        vec![
            vec![Block::new(Glyph::Header, ["A"])],
            vec![Block::new(Glyph::Paragraph, ["x"])],
        ],
        vec![vec![Block::new(Glyph::Paragraph, ["y"])]],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_repeated_dividers_leave_no_empty_containers() {
    let result = encode(&["***", "---", "=A", "---", "---", "***", "***", "=B", "---"]);

    let expected = doc(vec![
        vec![vec![Block::new(Glyph::Header, ["A"])]],
        vec![vec![Block::new(Glyph::Header, ["B"])]],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_blank_line_splits_preformatted_run() {
    // Blank lines are paragraphs, so they end a pre block
    let result = encode(&["'a", "", "'b"]);

    let expected = doc(vec![vec![vec![
        Block::new(Glyph::Pre, ["a"]),
        Block::new(Glyph::Paragraph, [""]),
        Block::new(Glyph::Pre, ["b"]),
    ]]]);
    assert_eq!(result, expected);
}

#[test]
fn test_blank_lines_join_surrounding_paragraphs() {
    let result = encode(&["one", "", "two"]);
    assert_eq!(
        result.articles[0].sections[0].blocks,
        vec![Block::new(Glyph::Paragraph, ["one", "", "two"])]
    );
}

#[test]
fn test_final_block_is_flushed() {
    let result = encode(&["Intro", ":first", ":second"]);

    let blocks = &result.articles[0].sections[0].blocks;
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1], Block::new(Glyph::Olist, ["first", "second"]));
}

#[test]
fn test_all_content_glyphs() {
    let input = "=Header\n-Sub\n_Subsub\n+2024-03-01\n~Jane Doe\n@https://example.com Site\n\
                 !cat.png Cat\n>Quote\n*item\n:step\n'pre\n`code\ntext";
    let result = parse(input);

    let glyphs: Vec<Glyph> = result.blocks().map(|b| b.glyph).collect();
    assert_eq!(
        glyphs,
        vec![
            Glyph::Header,
            Glyph::Subheader,
            Glyph::Subsubheader,
            Glyph::Date,
            Glyph::Author,
            Glyph::Link,
            Glyph::Image,
            Glyph::Blockquote,
            Glyph::Ulist,
            Glyph::Olist,
            Glyph::Pre,
            Glyph::Code,
            Glyph::Paragraph,
        ]
    );
}

#[test]
fn test_no_block_is_empty_or_tagged_divider() {
    let input = "---\n=A\n***\n\n---\n*x\n---\n***\n'p\n---";
    let result = parse(input);

    for block in result.blocks() {
        assert!(!block.contents.is_empty());
        assert!(!block.glyph.is_divider());
        for line in &block.contents {
            assert_ne!(line, "---");
            assert_ne!(line, "***");
        }
    }
    for article in &result.articles {
        assert!(!article.sections.is_empty());
        for section in &article.sections {
            assert!(!section.blocks.is_empty());
        }
    }
}

#[test]
fn test_classification_ignores_context() {
    let lines = ["=a", "---", "text", "*b", "", "***", "'c"];
    let glyphs: Vec<Glyph> = lines.iter().map(|l| classify(l)).collect();
    let mut back: Vec<Glyph> = lines.iter().rev().map(|l| classify(l)).collect();
    back.reverse();
    assert_eq!(glyphs, back);
}

#[test]
fn test_parse_matches_encode_of_lines() {
    let text = "=Title\nbody\n---\n*a\n";
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(parse(text), encode(&lines));
}
