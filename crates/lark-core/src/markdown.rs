//! Markdown Generator
//!
//! This module converts a `lark_ast::Document` into Markdown text. The
//! mapping is lossy: dates and authors become plain paragraphs, so parsing
//! the output as lark again does not reproduce the original tree.
//!
//! # Example
//!
//! ```
//! use lark_core::{markdown, parser};
//!
//! let doc = parser::parse("=Title\n:one\n:two");
//! assert_eq!(markdown::generate(&doc), "# Title\n\n1. one\n2. two");
//! ```

use std::fmt::Write;

use lark_ast::{Article, Block, Document, Glyph, Section};

use crate::link::LinkTarget;

const FENCE: &str = "```";
const SECTION_RULE: &str = "---";
const ARTICLE_RULE: &str = "***";

/// Markdown generator
pub struct MarkdownGenerator {
    output: String,
}

impl MarkdownGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Generate Markdown from a document
    pub fn generate(&mut self, doc: &Document) -> String {
        self.output.clear();

        for (i, article) in doc.visible_articles().enumerate() {
            if i > 0 {
                writeln!(self.output, "\n{ARTICLE_RULE}\n").unwrap();
            }
            self.generate_article(article);
        }

        self.output.trim_end().to_string()
    }

    fn generate_article(&mut self, article: &Article) {
        for (i, section) in article.visible_sections().enumerate() {
            if i > 0 {
                writeln!(self.output, "\n{SECTION_RULE}\n").unwrap();
            }
            self.generate_section(section);
        }
    }

    fn generate_section(&mut self, section: &Section) {
        for (i, block) in section.visible_blocks().enumerate() {
            if i > 0 {
                // Blank line between blocks
                writeln!(self.output).unwrap();
            }
            self.generate_block(block);
        }
    }

    /// Generate a single block, always ending with a newline
    fn generate_block(&mut self, block: &Block) {
        match block.glyph {
            Glyph::Header => self.generate_prefixed(block, "#"),
            Glyph::Subheader => self.generate_prefixed(block, "##"),
            Glyph::Subsubheader => self.generate_prefixed(block, "###"),
            Glyph::Blockquote => self.generate_prefixed(block, ">"),
            Glyph::Ulist => {
                for item in &block.contents {
                    writeln!(self.output, "- {item}").unwrap();
                }
            }
            Glyph::Olist => {
                for (i, item) in block.contents.iter().enumerate() {
                    writeln!(self.output, "{}. {item}", i + 1).unwrap();
                }
            }
            Glyph::Pre | Glyph::Code => {
                writeln!(self.output, "{FENCE}").unwrap();
                for line in &block.contents {
                    writeln!(self.output, "{line}").unwrap();
                }
                writeln!(self.output, "{FENCE}").unwrap();
            }
            Glyph::Link | Glyph::Image => {
                let bang = if block.glyph == Glyph::Image { "!" } else { "" };
                for line in block.non_blank_lines() {
                    let target = LinkTarget::parse(line);
                    writeln!(
                        self.output,
                        "{bang}[{}]({})",
                        target.description, target.url
                    )
                    .unwrap();
                }
            }
            _ => self.generate_paragraphs(block),
        }
    }

    /// Every non-blank line prefixed with `prefix`
    fn generate_prefixed(&mut self, block: &Block, prefix: &str) {
        for line in block.non_blank_lines() {
            writeln!(self.output, "{prefix} {line}").unwrap();
        }
    }

    /// Every non-blank line as its own paragraph
    fn generate_paragraphs(&mut self, block: &Block) {
        for (i, line) in block.non_blank_lines().enumerate() {
            if i > 0 {
                writeln!(self.output).unwrap();
            }
            writeln!(self.output, "{line}").unwrap();
        }
    }
}

impl Default for MarkdownGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate Markdown from a document
pub fn generate(doc: &Document) -> String {
    MarkdownGenerator::new().generate(doc)
}
