//! lark CLI - Command-line interface library
//!
//! This library provides the CLI functionality for lark: it reads a lark
//! source file, parses it and writes the rendered HTML or Markdown page.
//!
//! # Library Usage
//!
//! ```ignore
//! use lark_cli::{render_command, Settings};
//!
//! let settings = Settings::load(None)?;
//! render_command(&settings)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render tgt.lark to docs/index.html
//! lark
//!
//! # Render to Markdown on stdout
//! lark --input notes.lark --format markdown --stdout
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{init_logging, render_command, render_to_string, run_cli, RenderFormat};
pub use config::{Settings, CONFIG_FILE};
