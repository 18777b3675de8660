//! lark-ast - Document tree definitions
//!
//! This crate provides the tree types produced by the lark parser and read
//! by the HTML and Markdown generators.

pub mod document;
pub mod glyph;

pub use document::{Article, Block, Document, Section};
pub use glyph::Glyph;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
