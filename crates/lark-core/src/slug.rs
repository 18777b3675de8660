//! Article identifiers
//!
//! Derives a URL-safe id from the first heading-like block of an article.

use std::sync::LazyLock;

use lark_ast::{Article, Block, Glyph};
use regex::Regex;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 \-_]+").expect("slug pattern is valid"));

/// First `header` or `subheader` block of the article, in document order
pub fn title_block(article: &Article) -> Option<&Block> {
    article
        .blocks()
        .find(|b| matches!(b.glyph, Glyph::Header | Glyph::Subheader))
}

/// Identifier for an article, or an empty string when it has no header.
///
/// ```
/// use lark_core::{parser, slug};
///
/// let doc = parser::parse("=Hello, World!");
/// assert_eq!(slug::article_id(&doc.articles[0]), "hello-world");
/// ```
pub fn article_id(article: &Article) -> String {
    title_block(article)
        .and_then(Block::first_line)
        .map(slugify)
        .unwrap_or_default()
}

/// Keep `[A-Za-z0-9 _-]`, turn spaces into hyphens and lower-case the rest
pub fn slugify(text: &str) -> String {
    UNSAFE_CHARS
        .replace_all(text, "")
        .replace(' ', "-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lark_ast::Section;

    fn article(blocks: Vec<Block>) -> Article {
        Article::new(vec![Section::new(blocks)])
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's new in 2.0?"), "whats-new-in-20");
        assert_eq!(slugify("snake_case-and-kebab"), "snake_case-and-kebab");
        assert_eq!(slugify("Caf\u{e9} \u{2014} menu"), "caf--menu");
    }

    #[test]
    fn test_header_wins_when_first() {
        let a = article(vec![
            Block::new(Glyph::Paragraph, ["intro"]),
            Block::new(Glyph::Header, ["Main Title"]),
            Block::new(Glyph::Subheader, ["Sub"]),
        ]);
        assert_eq!(article_id(&a), "main-title");
    }

    #[test]
    fn test_subheader_wins_when_first() {
        let a = article(vec![
            Block::new(Glyph::Subheader, ["Sub Title"]),
            Block::new(Glyph::Header, ["Main"]),
        ]);
        assert_eq!(article_id(&a), "sub-title");
    }

    #[test]
    fn test_subsubheader_is_ignored() {
        let a = article(vec![Block::new(Glyph::Subsubheader, ["Minor"])]);
        assert_eq!(article_id(&a), "");
    }

    #[test]
    fn test_searches_later_sections() {
        let a = Article::new(vec![
            Section::new(vec![Block::new(Glyph::Paragraph, ["text"])]),
            Section::new(vec![Block::new(Glyph::Header, ["Later"])]),
        ]);
        assert_eq!(article_id(&a), "later");
    }

    #[test]
    fn test_no_heading() {
        assert_eq!(article_id(&Article::default()), "");
    }
}
