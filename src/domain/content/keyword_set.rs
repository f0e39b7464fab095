//! SEO keyword set and the text entry that feeds it.

use serde::{Deserialize, Serialize};

/// Ordered set of unique, case-sensitive keywords.
///
/// Insertion order is preserved. Deserialization goes through the same
/// `add` rules, so blanks and duplicates in incoming JSON are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a trimmed term. Returns false when the term is blank or
    /// already present (exact match).
    pub fn add(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || self.contains(term) {
            return false;
        }
        self.0.push(term.to_string());
        true
    }

    /// Removes the keyword at `index`. Out-of-range indexes are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.iter().any(|k| k == term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-separated rendering used inside prompts.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(terms: Vec<String>) -> Self {
        let mut set = KeywordSet::new();
        for term in &terms {
            set.add(term);
        }
        set
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for term in iter {
            set.add(term);
        }
        set
    }
}

/// Key that commits the keyword entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitKey {
    Enter,
    Comma,
}

/// Text field where keywords are typed before being committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordEntry {
    text: String,
}

impl KeywordEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Commits the entry into `set`.
    ///
    /// The entry is cleared only when the keyword was actually added; a
    /// duplicate stays in the field so the user can correct it.
    pub fn commit(&mut self, key: CommitKey, set: &mut KeywordSet) -> bool {
        let term = match key {
            CommitKey::Enter => self.text.trim().to_string(),
            CommitKey::Comma => self.text.trim().replace(',', ""),
        };
        if term.trim().is_empty() {
            return false;
        }
        let added = set.add(&term);
        if added {
            self.text.clear();
        }
        added
    }
}
