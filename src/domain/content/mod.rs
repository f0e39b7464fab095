//! Content module - drafts, keywords, plagiarism results and the
//! local fallback generators.

mod draft;
pub mod fallback;
mod keyword_set;
mod origin;
mod plagiarism;
pub mod prompts;

pub use draft::{highlight_keywords, wrap_span, ContentDraft, HIGHLIGHT_CLASS, PLAGIARISM_CLASS};
pub use keyword_set::{CommitKey, KeywordEntry, KeywordSet};
pub use origin::{ContentOperation, Origin, Sourced};
pub use plagiarism::{PlagiarismResult, Severity, DEFAULT_SCORE};
