//! Document tree definitions
//!
//! A parsed lark source is a three-level tree: a [`Document`] holds
//! [`Article`]s, an article holds [`Section`]s and a section holds
//! [`Block`]s. Every level keeps document order. The tree is built once by
//! the encoder and only read afterwards.

use serde::{Deserialize, Serialize};

use crate::glyph::Glyph;

/// A complete parsed document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Articles in source order
    pub articles: Vec<Article>,
}

/// A run of sections bounded by `***` dividers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Article {
    /// Sections in source order
    pub sections: Vec<Section>,
}

/// A run of blocks bounded by `---` dividers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

/// A maximal run of consecutive lines sharing one glyph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Category shared by every line of the block
    pub glyph: Glyph,
    /// One entry per source line, sigil already stripped
    pub contents: Vec<String>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article to the document
    pub fn push(&mut self, article: Article) {
        self.articles.push(article);
    }

    /// Check if the document has no articles
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Get the number of articles
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Iterate over every block of every article in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.articles.iter().flat_map(Article::blocks)
    }

    /// Articles with at least one non-blank block
    pub fn visible_articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|a| !a.is_blank())
    }
}

impl Article {
    /// Create an article from its sections
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Iterate over the blocks of all sections in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    /// Sections with at least one non-blank block
    pub fn visible_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_blank())
    }

    /// Whether every block of the article is blank
    pub fn is_blank(&self) -> bool {
        self.visible_sections().next().is_none()
    }

    /// Whether rendering should wrap each visible section in its own element
    pub fn has_multiple_sections(&self) -> bool {
        self.visible_sections().nth(1).is_some()
    }
}

impl Section {
    /// Create a section from its blocks
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks with at least one non-blank line
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| !b.is_blank())
    }

    /// Whether every block of the section is blank
    pub fn is_blank(&self) -> bool {
        self.visible_blocks().next().is_none()
    }
}

impl Block {
    /// Create a block with the given glyph and content lines
    pub fn new<I, S>(glyph: Glyph, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            glyph,
            contents: contents.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// First content line, if any
    pub fn first_line(&self) -> Option<&str> {
        self.contents.first().map(String::as_str)
    }

    /// Whether every content line is empty or whitespace.
    ///
    /// Blank blocks come from runs of empty lines and render to nothing.
    pub fn is_blank(&self) -> bool {
        self.non_blank_lines().next().is_none()
    }

    /// Content lines with nothing but whitespace removed
    pub fn non_blank_lines(&self) -> impl Iterator<Item = &str> {
        self.contents
            .iter()
            .map(String::as_str)
            .filter(|c| !c.trim().is_empty())
    }
}
