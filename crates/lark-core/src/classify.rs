//! Line classification
//!
//! Maps a single source line to its [`Glyph`]. Classification looks at the
//! line alone, so the same line always yields the same glyph regardless of
//! where it appears.

use lark_ast::Glyph;

/// Three-character prefixes checked before the sigil table
const DIVIDERS: [(&str, Glyph); 2] = [
    ("***", Glyph::ArticleDivider),
    ("---", Glyph::SectionDivider),
];

/// Classify one line (without its trailing newline).
///
/// Rules, first match wins:
///
/// 1. empty line: paragraph
/// 2. `***` prefix: article divider
/// 3. `---` prefix: section divider
/// 4. first character in the sigil table
/// 5. anything else: paragraph
///
/// ```
/// use lark_ast::Glyph;
/// use lark_core::classify;
///
/// assert_eq!(classify("=Title"), Glyph::Header);
/// assert_eq!(classify("---"), Glyph::SectionDivider);
/// assert_eq!(classify("--"), Glyph::Subheader);
/// assert_eq!(classify("plain text"), Glyph::Paragraph);
/// ```
pub fn classify(line: &str) -> Glyph {
    let Some(first) = line.chars().next() else {
        return Glyph::Paragraph;
    };

    if let Some((_, glyph)) = DIVIDERS
        .iter()
        .find(|(prefix, _)| line.starts_with(*prefix))
    {
        return *glyph;
    }

    Glyph::from_sigil(first).unwrap_or(Glyph::Paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_paragraph() {
        assert_eq!(classify(""), Glyph::Paragraph);
    }

    #[test]
    fn test_dividers() {
        assert_eq!(classify("***"), Glyph::ArticleDivider);
        assert_eq!(classify("***trailing"), Glyph::ArticleDivider);
        assert_eq!(classify("---"), Glyph::SectionDivider);
        assert_eq!(classify("------"), Glyph::SectionDivider);
    }

    #[test]
    fn test_short_runs_fall_through_to_sigils() {
        assert_eq!(classify("--"), Glyph::Subheader);
        assert_eq!(classify("**"), Glyph::Ulist);
        assert_eq!(classify("-"), Glyph::Subheader);
        assert_eq!(classify("*"), Glyph::Ulist);
    }

    #[test]
    fn test_every_sigil() {
        let cases = [
            ("=a", Glyph::Header),
            ("-a", Glyph::Subheader),
            ("_a", Glyph::Subsubheader),
            ("+a", Glyph::Date),
            ("~a", Glyph::Author),
            ("@a", Glyph::Link),
            ("!a", Glyph::Image),
            (">a", Glyph::Blockquote),
            ("*a", Glyph::Ulist),
            (":a", Glyph::Olist),
            ("'a", Glyph::Pre),
            ("`a", Glyph::Code),
        ];
        for (line, glyph) in cases {
            assert_eq!(classify(line), glyph, "line {line:?}");
        }
    }

    #[test]
    fn test_unknown_first_character() {
        assert_eq!(classify("Hello"), Glyph::Paragraph);
        assert_eq!(classify(" =indented"), Glyph::Paragraph);
        assert_eq!(classify("#heading"), Glyph::Paragraph);
        assert_eq!(classify("élan"), Glyph::Paragraph);
    }

    #[test]
    fn test_mixed_prefix_is_not_a_divider() {
        assert_eq!(classify("-*-"), Glyph::Subheader);
        assert_eq!(classify("*-*"), Glyph::Ulist);
    }
}
