//! Lark Parser
//!
//! This module turns lark source text into a `lark_ast::Document`.
//!
//! # Syntax
//!
//! Every line is classified by its leading glyph (see [`crate::classify`]).
//! Consecutive lines with the same glyph form one block. `---` closes the
//! current section and `***` closes the current article:
//!
//! ```text
//! =Title
//! +2024-01-01
//! Some paragraph text.
//! ---
//! *first item
//! *second item
//! ***
//! =Next article
//! ```
//!
//! # Example
//!
//! ```
//! use lark_ast::Glyph;
//! use lark_core::parser;
//!
//! let doc = parser::parse("=Title\nHello world.");
//! let blocks = &doc.articles[0].sections[0].blocks;
//! assert_eq!(blocks[0].glyph, Glyph::Header);
//! assert_eq!(blocks[1].contents, vec!["Hello world."]);
//! ```

use lark_ast::{Article, Block, Document, Glyph, Section};
use tracing::{debug, trace};

use crate::classify::classify;
use crate::line::extract;

/// Nesting level closed by a flush; each level also closes those below it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    Block,
    Section,
    Article,
}

/// Single-pass encoder holding the containers currently being filled
struct Encoder {
    /// Glyph of the block being accumulated
    glyph: Glyph,
    /// Content lines of the current block
    lines: Vec<String>,
    /// Sealed blocks of the current section
    blocks: Vec<Block>,
    /// Sealed sections of the current article
    sections: Vec<Section>,
    /// Sealed articles
    articles: Vec<Article>,
}

impl Encoder {
    /// Seed the encoder with the glyph of the first line, so that line is
    /// never seen as a glyph change
    fn new(glyph: Glyph) -> Self {
        Self {
            glyph,
            lines: Vec::new(),
            blocks: Vec::new(),
            sections: Vec::new(),
            articles: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        let glyph = classify(line);

        if glyph != self.glyph {
            self.flush(Level::Block);
            self.glyph = glyph;
        }

        match glyph {
            Glyph::SectionDivider => self.flush(Level::Section),
            Glyph::ArticleDivider => self.flush(Level::Article),
            _ => self.lines.push(extract(line, glyph)),
        }
    }

    /// Seal every container up to and including `level`, innermost first.
    /// Empty containers are dropped.
    fn flush(&mut self, level: Level) {
        let glyph = self.glyph;
        seal(&mut self.lines, &mut self.blocks, |contents| Block {
            glyph,
            contents,
        });

        if level >= Level::Section {
            seal(&mut self.blocks, &mut self.sections, Section::new);
        }

        if level >= Level::Article && seal(&mut self.sections, &mut self.articles, Article::new) {
            trace!(articles = self.articles.len(), "sealed article");
        }
    }

    fn finish(mut self) -> Document {
        self.flush(Level::Article);
        debug!(articles = self.articles.len(), "encoded document");
        Document {
            articles: self.articles,
        }
    }
}

/// Move `items` into a new container appended to `parent`, unless empty.
/// Returns whether a container was appended.
fn seal<T, P>(items: &mut Vec<T>, parent: &mut Vec<P>, wrap: impl FnOnce(Vec<T>) -> P) -> bool {
    if items.is_empty() {
        return false;
    }
    parent.push(wrap(std::mem::take(items)));
    true
}

/// Encode an ordered sequence of lines into a document tree.
///
/// Never fails: unknown lines become paragraphs and containers left empty
/// by stray dividers are omitted.
pub fn encode<S: AsRef<str>>(lines: &[S]) -> Document {
    let Some(first) = lines.first() else {
        return Document::new();
    };

    let mut encoder = Encoder::new(classify(first.as_ref()));
    for line in lines {
        encoder.process_line(line.as_ref());
    }
    encoder.finish()
}

/// Parse lark source text into a document tree.
///
/// The text is split on newlines and one trailing `\r` is dropped from every
/// line, including a last line with no newline after it. A final newline
/// does not produce an extra empty line.
pub fn parse(text: &str) -> Document {
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    debug!(lines = lines.len(), "parsing lark source");
    encode(&lines)
}
