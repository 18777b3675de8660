//! Line content extraction
//!
//! Turns a classified line into the string stored in its block: the sigil
//! is removed, dashes become em dashes and leading whitespace is dropped.
//! Verbatim glyphs (`pre`, `code`) only lose their sigil.

use lark_ast::Glyph;

const EM_DASH: &str = "\u{2014}";

/// Extract the stored content of `line`, already classified as `glyph`.
///
/// ```
/// use lark_ast::Glyph;
/// use lark_core::extract;
///
/// assert_eq!(extract("= Title", Glyph::Header), "Title");
/// assert_eq!(extract("a -- b", Glyph::Paragraph), "a \u{2014} b");
/// assert_eq!(extract("'  keep  -- this", Glyph::Pre), "  keep  -- this");
/// ```
pub fn extract(line: &str, glyph: Glyph) -> String {
    if glyph.is_verbatim() {
        return strip_sigil(line).to_string();
    }

    let content = match glyph {
        Glyph::Paragraph => line,
        _ => strip_sigil(line),
    };

    normalize(content)
}

/// Replace dash runs with em dashes and trim the front of the string.
///
/// Triple hyphens are replaced before double hyphens, so `----` becomes an
/// em dash followed by a single hyphen. Trailing whitespace is kept.
pub fn normalize(content: &str) -> String {
    content
        .replace("---", EM_DASH)
        .replace("--", EM_DASH)
        .trim_start()
        .to_string()
}

/// Drop the first character of the line
fn strip_sigil(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}
