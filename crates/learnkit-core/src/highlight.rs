//! Case-insensitive phrase highlighting with HTML spans.

use regex::RegexBuilder;

use crate::error::HighlightError;

/// Phrases shorter than this many characters are ignored.
pub const MIN_PHRASE_LEN: usize = 3;

const OPEN_TAG: &str = r#"<span class="highlight">"#;
const CLOSE_TAG: &str = "</span>";

/// Wrap every occurrence of each phrase in `<span class="highlight">`.
///
/// Matching ignores case, but the matched text keeps its original casing.
/// All phrases are matched in one left-to-right pass with longer phrases
/// preferred at the same position, so a phrase never matches inside markup
/// inserted for another. Phrases shorter than [`MIN_PHRASE_LEN`] characters
/// are skipped; the text is not otherwise escaped.
pub fn highlight_text<S: AsRef<str>>(text: &str, phrases: &[S]) -> Result<String, HighlightError> {
    let mut usable: Vec<&str> = phrases
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| p.chars().count() >= MIN_PHRASE_LEN)
        .collect();

    if usable.is_empty() {
        return Ok(text.to_string());
    }

    usable.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    usable.dedup();

    let alternation = usable
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()?;

    let highlighted = pattern.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("{}{}{}", OPEN_TAG, &caps[0], CLOSE_TAG)
    });
    Ok(highlighted.into_owned())
}
