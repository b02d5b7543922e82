//! Markdown heading classification for whole paragraphs.
//!
//! A paragraph is a heading only when the *entire* paragraph is one:
//!
//! - ATX: one to six `#`, whitespace, then the heading text on a single line.
//! - Setext: a single line of text followed by a line of at least three
//!   `=` or `-` characters.
//!
//! Anything else (including a heading line followed by body text in the same
//! paragraph) is a body paragraph. Classification never fails; malformed
//! syntax just returns `None`.

use std::sync::LazyLock;

use regex::Regex;

static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+)\n?$").expect("ATX heading pattern is valid")
});

static SETEXT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+)\n([=\-]{3,})\n?$").expect("setext heading pattern is valid")
});

/// Which markdown convention produced the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    Atx,
    Setext,
}

/// A paragraph recognised as a section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Captured heading text, borrowed from the paragraph.
    pub text: &'a str,
    /// 1–6 for ATX; 1 for `=` underlines, 2 for `-` underlines.
    pub level: u8,
    pub style: HeadingStyle,
    top_level: bool,
}

impl Heading<'_> {
    /// True only for a paragraph starting with `# `.
    ///
    /// Setext `=` headings report level 1 but are not top-level unless the
    /// underlined line itself begins with `# `.
    pub fn is_top_level(&self) -> bool {
        self.top_level
    }
}

/// Classify a paragraph, returning the heading if the whole paragraph is one.
pub fn classify(paragraph: &str) -> Option<Heading<'_>> {
    if let Some(caps) = ATX_HEADING.captures(paragraph) {
        let hashes = caps.get(1)?.as_str();
        let text = caps.get(2)?.as_str();
        return Some(Heading {
            text,
            level: hashes.len() as u8,
            style: HeadingStyle::Atx,
            top_level: paragraph.starts_with("# "),
        });
    }

    let caps = SETEXT_HEADING.captures(paragraph)?;
    let text = caps.get(1)?.as_str();
    let underline = caps.get(2)?.as_str();
    Some(Heading {
        text,
        level: if underline.starts_with('=') { 1 } else { 2 },
        style: HeadingStyle::Setext,
        top_level: paragraph.starts_with("# "),
    })
}
