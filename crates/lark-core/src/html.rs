//! HTML Generator
//!
//! This module converts a `lark_ast::Document` into an HTML fragment: one
//! `<article>` per article, with `<section>` wrappers only when an article
//! has more than one section. Wrapping the fragment in a full page is done
//! by [`crate::template`].
//!
//! # Example
//!
//! ```
//! use lark_core::{parser, html};
//!
//! let doc = parser::parse("=Hello\nWorld");
//! let out = html::generate(&doc);
//! assert!(out.contains("<article id='hello'>"));
//! assert!(out.contains("<h1>\nHello\n</h1>"));
//! ```

use std::fmt::Write;

use html_escape::{encode_single_quoted_attribute, encode_text};
use lark_ast::{Article, Block, Document, Glyph, Section};

use crate::link::{LinkKind, LinkTarget};
use crate::slug::article_id;

/// HTML generator configuration
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether articles carry an `id` attribute derived from their title
    pub article_ids: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self { article_ids: true }
    }
}

/// Element name and optional class for a glyph rendered line by line
fn element(glyph: Glyph) -> (&'static str, Option<&'static str>) {
    match glyph {
        Glyph::Header => ("h1", None),
        Glyph::Subheader => ("h2", None),
        Glyph::Subsubheader => ("h3", None),
        Glyph::Date => ("h3", Some("date")),
        Glyph::Author => ("h3", Some("author")),
        Glyph::Blockquote => ("blockquote", None),
        Glyph::Ulist => ("ul", None),
        Glyph::Olist => ("ol", None),
        Glyph::Pre => ("pre", None),
        _ => ("p", None),
    }
}

/// HTML generator
pub struct HtmlGenerator {
    config: HtmlConfig,
    output: String,
}

impl HtmlGenerator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(HtmlConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: HtmlConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Generate the HTML fragment for a document
    pub fn generate(&mut self, doc: &Document) -> String {
        self.output.clear();
        for article in doc.visible_articles() {
            self.generate_article(article);
        }
        std::mem::take(&mut self.output)
    }

    fn generate_article(&mut self, article: &Article) {
        let id = if self.config.article_ids {
            article_id(article)
        } else {
            String::new()
        };

        if id.is_empty() {
            writeln!(self.output, "<article>").unwrap();
        } else {
            writeln!(
                self.output,
                "<article id='{}'>",
                encode_single_quoted_attribute(&id)
            )
            .unwrap();
        }

        let wrap = article.has_multiple_sections();
        for section in article.visible_sections() {
            self.generate_section(section, wrap);
        }

        writeln!(self.output, "</article>").unwrap();
    }

    fn generate_section(&mut self, section: &Section, wrap: bool) {
        if wrap {
            writeln!(self.output, "<section>").unwrap();
        }
        for block in section.visible_blocks() {
            self.generate_block(block);
        }
        if wrap {
            writeln!(self.output, "</section>").unwrap();
        }
    }

    /// Generate a single block
    fn generate_block(&mut self, block: &Block) {
        match block.glyph {
            Glyph::Link => self.generate_links(block),
            Glyph::Image => self.generate_images(block),
            Glyph::Ulist | Glyph::Olist => self.generate_list(block),
            Glyph::Pre => self.generate_pre(block),
            Glyph::Code => self.generate_code(block),
            _ => self.generate_tagged(block),
        }
    }

    /// One element per non-blank line
    fn generate_tagged(&mut self, block: &Block) {
        let (name, class) = element(block.glyph);
        for line in block.non_blank_lines() {
            match class {
                Some(class) => writeln!(self.output, "<{name} class='{class}'>").unwrap(),
                None => writeln!(self.output, "<{name}>").unwrap(),
            }
            writeln!(self.output, "{line}").unwrap();
            writeln!(self.output, "</{name}>").unwrap();
        }
    }

    fn generate_list(&mut self, block: &Block) {
        let (name, _) = element(block.glyph);
        writeln!(self.output, "<{name}>").unwrap();
        for item in &block.contents {
            writeln!(self.output, "\t<li>{item}</li>").unwrap();
        }
        writeln!(self.output, "</{name}>").unwrap();
    }

    fn generate_links(&mut self, block: &Block) {
        writeln!(self.output, "<ul class='links'>").unwrap();
        for line in block.non_blank_lines() {
            let target = LinkTarget::parse(line);
            let href = encode_single_quoted_attribute(target.url);
            let text = encode_text(target.description);
            let attrs = match target.kind() {
                LinkKind::External => " class='external-link' rel='external noopener'",
                LinkKind::Gemini => " class='gemini-link'",
                LinkKind::Local => "",
            };
            writeln!(self.output, "<li><a href='{href}'{attrs}>{text}</a></li>").unwrap();
        }
        writeln!(self.output, "</ul>").unwrap();
    }

    fn generate_images(&mut self, block: &Block) {
        for line in block.non_blank_lines() {
            let target = LinkTarget::parse(line);
            writeln!(
                self.output,
                "<img src='{}' alt='{}' loading='lazy' />",
                encode_single_quoted_attribute(target.url),
                encode_single_quoted_attribute(target.description)
            )
            .unwrap();
        }
    }

    fn generate_pre(&mut self, block: &Block) {
        writeln!(self.output, "<pre>").unwrap();
        for line in &block.contents {
            writeln!(self.output, "{}", encode_text(line)).unwrap();
        }
        writeln!(self.output, "</pre>").unwrap();
    }

    fn generate_code(&mut self, block: &Block) {
        write!(self.output, "<pre><code>").unwrap();
        for line in &block.contents {
            writeln!(self.output, "{}", encode_text(line)).unwrap();
        }
        writeln!(self.output, "</code></pre>").unwrap();
    }
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate an HTML fragment with default configuration
pub fn generate(doc: &Document) -> String {
    HtmlGenerator::new().generate(doc)
}

/// Generate an HTML fragment with custom configuration
pub fn generate_with_config(doc: &Document, config: HtmlConfig) -> String {
    HtmlGenerator::with_config(config).generate(doc)
}
