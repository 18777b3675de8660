//! Page templates
//!
//! Wraps a generated body in a full page using `minijinja`. Built-in
//! templates cover both output formats; a caller may supply its own
//! template source instead. Templates see:
//!
//! - `title`: text of the first article's title block, or empty
//! - `stylesheet`: stylesheet href
//! - `body`: the rendered document, already marked safe
//! - `articles`: the tree, each article with its `id` and `sections`

use lark_ast::{Block, Document, Section};
use minijinja::{context, Environment, Value};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LarkError, Result};
use crate::slug::{article_id, title_block};
use crate::{html, markdown};

const HTML_PAGE: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset='utf-8'>
<title>{{ title }}</title>
<link rel='stylesheet' href='{{ stylesheet }}'>
</head>
<body>
{{ body|safe }}</body>
</html>
";

const MARKDOWN_PAGE: &str = "{{ body|safe }}\n";

/// Output format of a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Markdown,
}

impl Format {
    /// Template name; its extension selects auto-escaping
    pub fn template_name(self) -> &'static str {
        match self {
            Format::Html => "page.html",
            Format::Markdown => "page.md",
        }
    }

    pub fn builtin_template(self) -> &'static str {
        match self {
            Format::Html => HTML_PAGE,
            Format::Markdown => MARKDOWN_PAGE,
        }
    }

    /// File extension for output files
    pub fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "md",
        }
    }

    /// Render the document body without any page wrapper
    pub fn generate_body(self, doc: &Document) -> String {
        match self {
            Format::Html => html::generate(doc),
            Format::Markdown => markdown::generate(doc),
        }
    }
}

/// Options for [`render_page`]
#[derive(Debug, Clone)]
pub struct PageOptions<'a> {
    pub format: Format,
    /// Stylesheet href for HTML pages
    pub stylesheet: &'a str,
    /// Template source replacing the built-in page
    pub template: Option<&'a str>,
}

impl Default for PageOptions<'_> {
    fn default() -> Self {
        Self {
            format: Format::Html,
            stylesheet: "style.css",
            template: None,
        }
    }
}

#[derive(Serialize)]
struct ArticleView<'a> {
    id: String,
    sections: &'a [Section],
}

/// Render a full page for the document.
///
/// ```
/// use lark_core::{parser, render_page, PageOptions};
///
/// let doc = parser::parse("=Hello\nWorld");
/// let page = render_page(&doc, &PageOptions::default()).unwrap();
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("<title>Hello</title>"));
/// ```
pub fn render_page(doc: &Document, options: &PageOptions<'_>) -> Result<String> {
    let name = options.format.template_name();
    let source = options
        .template
        .unwrap_or_else(|| options.format.builtin_template());

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)
        .map_err(|source| LarkError::TemplateParse {
            name: name.to_string(),
            source,
        })?;

    let title = doc
        .articles
        .first()
        .and_then(title_block)
        .and_then(Block::first_line)
        .unwrap_or_default();

    let articles: Vec<ArticleView<'_>> = doc
        .articles
        .iter()
        .map(|a| ArticleView {
            id: article_id(a),
            sections: &a.sections,
        })
        .collect();

    let body = options.format.generate_body(doc);
    debug!(template = name, body_len = body.len(), "rendering page");

    let render_err = |source| LarkError::TemplateRender {
        name: name.to_string(),
        source,
    };
    let template = env.get_template(name).map_err(render_err)?;
    template
        .render(context! {
            title => title,
            stylesheet => options.stylesheet,
            body => Value::from_safe_string(body),
            articles => articles,
        })
        .map_err(render_err)
}
