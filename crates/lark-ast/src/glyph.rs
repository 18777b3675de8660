//! Line categories
//!
//! Every line of lark source is assigned exactly one [`Glyph`]. Content
//! glyphs become block tags; the two divider glyphs only ever close
//! containers and never tag a block.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic category of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// `=` top-level heading
    Header,
    /// `-` second-level heading
    Subheader,
    /// `_` third-level heading
    Subsubheader,
    /// `+` publication date
    Date,
    /// `~` author line
    Author,
    /// `@` link, `<url> [description]`
    Link,
    /// `!` image, `<url> [description]`
    Image,
    /// `>` quotation
    Blockquote,
    /// `*` unordered list item
    Ulist,
    /// `:` ordered list item
    Olist,
    /// `'` preformatted text, kept verbatim
    Pre,
    /// `` ` `` code, kept verbatim
    Code,
    /// Plain text and empty lines
    #[default]
    Paragraph,
    /// `---` closes the current section
    SectionDivider,
    /// `***` closes the current article
    ArticleDivider,
}

/// Single-character sigils, checked after the divider prefixes
const SIGILS: [(char, Glyph); 12] = [
    ('=', Glyph::Header),
    ('-', Glyph::Subheader),
    ('_', Glyph::Subsubheader),
    ('+', Glyph::Date),
    ('~', Glyph::Author),
    ('@', Glyph::Link),
    ('!', Glyph::Image),
    ('>', Glyph::Blockquote),
    ('*', Glyph::Ulist),
    (':', Glyph::Olist),
    ('\'', Glyph::Pre),
    ('`', Glyph::Code),
];

impl Glyph {
    /// Look up the glyph introduced by a leading sigil character
    pub fn from_sigil(c: char) -> Option<Glyph> {
        SIGILS
            .iter()
            .find(|(sigil, _)| *sigil == c)
            .map(|(_, glyph)| *glyph)
    }

    /// Whether this glyph closes a container instead of carrying content
    pub fn is_divider(self) -> bool {
        matches!(self, Glyph::SectionDivider | Glyph::ArticleDivider)
    }

    /// Whether lines of this glyph are stored without normalization
    pub fn is_verbatim(self) -> bool {
        matches!(self, Glyph::Pre | Glyph::Code)
    }

    /// Kebab-case name, matching the serialized form
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Header => "header",
            Glyph::Subheader => "subheader",
            Glyph::Subsubheader => "subsubheader",
            Glyph::Date => "date",
            Glyph::Author => "author",
            Glyph::Link => "link",
            Glyph::Image => "image",
            Glyph::Blockquote => "blockquote",
            Glyph::Ulist => "ulist",
            Glyph::Olist => "olist",
            Glyph::Pre => "pre",
            Glyph::Code => "code",
            Glyph::Paragraph => "paragraph",
            Glyph::SectionDivider => "section-divider",
            Glyph::ArticleDivider => "article-divider",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
