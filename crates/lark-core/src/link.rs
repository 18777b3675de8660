//! Link and image line parsing

/// A `<url> [description]` line from a link or image block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget<'a> {
    pub url: &'a str,
    pub description: &'a str,
}

/// URL scheme families that get their own styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `http://` or `https://`
    External,
    /// `gemini://`
    Gemini,
    /// Relative paths, anchors and anything else
    Local,
}

impl<'a> LinkTarget<'a> {
    /// Split a content line at its first whitespace character. The remainder
    /// is the description; without one the URL doubles as its own description.
    ///
    /// Whitespace around the line and around the description is trimmed, so
    /// several spaces after the URL act as one separator. Spacing inside the
    /// description is kept as written.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some((url, rest)) if !rest.trim().is_empty() => Self {
                url,
                description: rest.trim(),
            },
            Some((url, _)) => Self {
                url,
                description: url,
            },
            None => Self {
                url: line,
                description: line,
            },
        }
    }

    pub fn kind(&self) -> LinkKind {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            LinkKind::External
        } else if self.url.starts_with("gemini://") {
            LinkKind::Gemini
        } else {
            LinkKind::Local
        }
    }
}
