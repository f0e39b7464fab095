//! Plagiarism results and severity tiers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ContentDraft;
use crate::domain::foundation::{Notice, Percentage};

/// Score used when the model reply carries no percentage.
pub const DEFAULT_SCORE: u8 = 10;

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").expect("valid percent regex"));

/// Outcome of a plagiarism check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlagiarismResult {
    pub score: Percentage,
    pub annotated_text: ContentDraft,
}

impl PlagiarismResult {
    pub fn new(score: Percentage, annotated_text: ContentDraft) -> Self {
        Self {
            score,
            annotated_text,
        }
    }

    /// Interprets a free-form model reply.
    ///
    /// The score is the first integer directly followed by `%`. A reply that
    /// contains a span is taken as the annotated text; otherwise the
    /// original content is returned unannotated.
    pub fn from_reply(reply: &str, original: &ContentDraft) -> Self {
        let score = PERCENT
            .captures(reply)
            .map(|caps| match caps[1].parse::<u64>() {
                Ok(n) => Percentage::saturating(n),
                Err(_) => Percentage::HUNDRED,
            })
            .unwrap_or_else(|| Percentage::new(DEFAULT_SCORE));

        let annotated_text = if reply.contains("<span") {
            ContentDraft::new(reply)
        } else {
            original.clone()
        };

        Self::new(score, annotated_text)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_score(self.score)
    }
}

/// Three-tier reading of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// `> 20` is high, `> 10` medium, anything else low.
    pub fn from_score(score: Percentage) -> Self {
        match score.value() {
            s if s > 20 => Severity::High,
            s if s > 10 => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Color of the score indicator.
    pub fn indicator(&self) -> &'static str {
        match self {
            Severity::High => "red",
            Severity::Medium => "yellow",
            Severity::Low => "green",
        }
    }

    /// Advisory line shown under the score.
    pub fn advisory(&self) -> &'static str {
        match self {
            Severity::High => "High plagiarism detected. We recommend rephrasing your content.",
            Severity::Medium => {
                "Some similar content detected. Consider rephrasing affected sections."
            }
            Severity::Low => "Low plagiarism detected. Your content looks mostly original!",
        }
    }

    /// Toast raised when a check completes.
    pub fn notice(&self) -> Notice {
        match self {
            Severity::High => {
                Notice::warning("High plagiarism detected. Consider rephrasing your content.")
            }
            Severity::Medium => Notice::info(
                "Some potentially similar content detected. Rephrasing might be helpful.",
            ),
            Severity::Low => {
                Notice::success("Minimal plagiarism detected. Your content looks good!")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::NoticeLevel;

    #[test]
    fn reply_score_is_first_percentage() {
        let original = ContentDraft::new("text");
        let result = PlagiarismResult::from_reply("Score: 17% (was 40% before)", &original);
        assert_eq!(result.score.value(), 17);
    }

    #[test]
    fn reply_without_percentage_defaults_to_ten() {
        let original = ContentDraft::new("text");
        let result = PlagiarismResult::from_reply("Looks original to me.", &original);
        assert_eq!(result.score.value(), 10);
    }

    #[test]
    fn reply_number_needs_adjacent_percent_sign() {
        let original = ContentDraft::new("text");
        let result = PlagiarismResult::from_reply("about 30 % maybe, or 12%", &original);
        assert_eq!(result.score.value(), 12);
    }

    #[test]
    fn reply_score_clamps_to_hundred() {
        let original = ContentDraft::new("text");
        let result = PlagiarismResult::from_reply("250% copied", &original);
        assert_eq!(result.score, Percentage::HUNDRED);
        let result = PlagiarismResult::from_reply("99999999999999999999999% copied", &original);
        assert_eq!(result.score, Percentage::HUNDRED);
    }

    #[test]
    fn reply_with_span_becomes_annotated_text() {
        let original = ContentDraft::new("A. B.");
        let reply = r#"5% - A. <span class="plagiarism">B.</span>"#;
        let result = PlagiarismResult::from_reply(reply, &original);
        assert_eq!(result.annotated_text.as_str(), reply);
    }

    #[test]
    fn reply_without_span_keeps_original() {
        let original = ContentDraft::new("A. B.");
        let result = PlagiarismResult::from_reply("5% similar", &original);
        assert_eq!(result.annotated_text, original);
    }

    #[test]
    fn severity_thresholds() {
        assert_eq!(Severity::from_score(Percentage::new(21)), Severity::High);
        assert_eq!(Severity::from_score(Percentage::new(20)), Severity::Medium);
        assert_eq!(Severity::from_score(Percentage::new(11)), Severity::Medium);
        assert_eq!(Severity::from_score(Percentage::new(10)), Severity::Low);
        assert_eq!(Severity::from_score(Percentage::ZERO), Severity::Low);
    }

    #[test]
    fn severity_presentation() {
        assert_eq!(Severity::High.indicator(), "red");
        assert_eq!(Severity::High.notice().level, NoticeLevel::Warning);
        assert_eq!(Severity::Medium.notice().level, NoticeLevel::Info);
        assert_eq!(Severity::Low.notice().level, NoticeLevel::Success);
        assert!(Severity::Low.advisory().contains("mostly original"));
    }
}
