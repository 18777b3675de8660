//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lark_ast::Document;
use lark_core::{render_page, Format, PageOptions};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Output format for rendered pages
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RenderFormat {
    /// Full HTML document
    #[default]
    Html,
    /// Markdown text
    Markdown,
}

impl From<RenderFormat> for Format {
    fn from(format: RenderFormat) -> Self {
        match format {
            RenderFormat::Html => Format::Html,
            RenderFormat::Markdown => Format::Markdown,
        }
    }
}

#[derive(Parser)]
#[command(name = "lark")]
#[command(author, version, about = "Render lark markup to HTML or Markdown", long_about = None)]
struct Cli {
    /// Input lark file [default: tgt.lark]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file [default: docs/index.html or docs/index.md]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<RenderFormat>,

    /// Page template replacing the built-in one
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Configuration file [default: lark.toml if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the page to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(input) = self.input {
            settings.input = input;
        }
        if let Some(output) = self.output {
            settings.output = Some(output);
        }
        if let Some(format) = self.format {
            settings.format = format.into();
        }
        if let Some(template) = self.template {
            settings.template = Some(template);
        }
        settings
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Already installed when called twice, e.g. from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// With no arguments it renders `tgt.lark` to `docs/index.html`.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    let to_stdout = cli.stdout;
    let settings = cli.apply(settings);
    debug!(?settings, "resolved settings");

    if to_stdout {
        print!("{}", render_to_string(&settings)?);
        Ok(())
    } else {
        render_command(&settings).map(|_| ())
    }
}

/// Read, parse and render the configured input into a page
pub fn render_to_string(settings: &Settings) -> Result<String> {
    let input = &settings.input;
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let bytes =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let source = String::from_utf8_lossy(&bytes);

    let doc = lark_core::parse(&source);
    log_summary(&doc);

    let template = match &settings.template {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?,
        ),
        None => None,
    };

    let options = PageOptions {
        format: settings.format,
        stylesheet: &settings.stylesheet,
        template: template.as_deref(),
    };
    render_page(&doc, &options).context("Failed to render page")
}

/// Execute the render command, returning the path written
pub fn render_command(settings: &Settings) -> Result<PathBuf> {
    let page = render_to_string(settings)?;
    let output = settings.output_path();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    fs::write(&output, page)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    info!(output = %output.display(), "rendered");
    println!("Created: {}", output.display());

    Ok(output)
}

fn log_summary(doc: &Document) {
    let sections: usize = doc.articles.iter().map(|a| a.sections.len()).sum();
    info!(
        articles = doc.articles.len(),
        sections,
        blocks = doc.blocks().count(),
        "parsed document"
    );
}
