//! lark-core - Lightweight markup to HTML and Markdown
//!
//! Core library for lark: classifies source lines by their leading glyph,
//! groups them into blocks, sections and articles, and renders the
//! resulting tree.
//!
//! # Example
//!
//! ```
//! use lark_core::{html, parse};
//!
//! let doc = parse("=Title\nHello world.");
//! assert_eq!(doc.articles.len(), 1);
//!
//! let out = html::generate(&doc);
//! assert!(out.contains("<p>\nHello world.\n</p>"));
//! ```

pub mod classify;
pub mod error;
pub mod html;
pub mod line;
pub mod link;
pub mod markdown;
pub mod parser;
pub mod slug;
pub mod template;

// Re-export main types and functions
pub use classify::classify;
pub use error::{LarkError, Result};
pub use html::{HtmlConfig, HtmlGenerator};
pub use line::extract;
pub use markdown::MarkdownGenerator;
pub use parser::{encode, parse};
pub use template::{render_page, Format, PageOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
