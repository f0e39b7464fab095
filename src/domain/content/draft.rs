//! Content drafts and the inline markup spans they carry.
//!
//! Drafts are markdown with two kinds of inline HTML annotation:
//! `<span class="highlight">` around SEO keywords and
//! `<span class="plagiarism">` around passages flagged as duplicated.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::KeywordSet;

/// CSS class used for keyword highlights.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// CSS class used for flagged passages.
pub const PLAGIARISM_CLASS: &str = "plagiarism";

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static ANNOTATION_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="(?:highlight|plagiarism)">|</span>"#).expect("valid span regex")
});

/// Text produced by generation or rephrasing, possibly annotated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDraft(String);

impl ContentDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True when there is no visible text at all.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True when the draft contains at least one inline span.
    pub fn has_spans(&self) -> bool {
        self.0.contains("<span")
    }

    /// Text with all tags removed and basic entities decoded.
    pub fn plain_text(&self) -> String {
        decode_entities(&TAG.replace_all(&self.0, ""))
    }

    /// Draft with highlight/plagiarism spans removed but everything else kept.
    pub fn without_annotations(&self) -> ContentDraft {
        ContentDraft(ANNOTATION_SPAN.replace_all(&self.0, "").into_owned())
    }
}

impl fmt::Display for ContentDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentDraft {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for ContentDraft {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Wraps `text` in a span of the given class.
pub fn wrap_span(class: &str, text: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, class, text)
}

/// Wraps every case-insensitive occurrence of any keyword in a highlight
/// span, keeping the original casing of the match.
///
/// Longer keywords win when keywords overlap ("remote work" before "remote").
pub fn highlight_keywords(text: &str, keywords: &KeywordSet) -> String {
    let mut terms: Vec<&str> = keywords.iter().collect();
    if terms.is_empty() {
        return text.to_string();
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()));
    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                wrap_span(HIGHLIGHT_CLASS, &caps[0])
            })
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
