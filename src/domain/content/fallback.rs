//! Local substitutes used when the external model cannot be reached.
//!
//! None of this is real analysis: the draft is a fixed outline, the
//! plagiarism score is random, and the rewrite is phrase substitution.
//! It keeps the wizard usable offline.

use rand::Rng;

use super::draft::{highlight_keywords, wrap_span, HIGHLIGHT_CLASS, PLAGIARISM_CLASS};
use super::{ContentDraft, KeywordSet, PlagiarismResult};
use crate::domain::foundation::Percentage;

/// Lower bound (inclusive) of the fallback plagiarism score.
pub const FALLBACK_SCORE_MIN: u8 = 5;

/// Upper bound (exclusive) of the fallback plagiarism score.
pub const FALLBACK_SCORE_MAX: u8 = 25;

/// Phrase pairs replaced once each.
const FIRST_OCCURRENCE_SWAPS: &[(&str, &str)] = &[
    ("today's digital landscape", "our current technological environment"),
    ("more important than ever", "increasingly critical"),
    ("explores the relationship", "examines the connections"),
    ("Key Insights", "Critical Findings"),
];

/// Phrase pairs replaced everywhere.
const GLOBAL_SWAPS: &[(&str, &str)] = &[
    ("companies", "organizations"),
    ("tend to", "typically"),
    ("significant", "substantial"),
    ("Best Practices", "Recommended Strategies"),
];

/// Builds the outline draft from the title, purpose and first three keywords.
pub fn draft(title: &str, purpose: &str, keywords: &KeywordSet) -> ContentDraft {
    let title = title.trim();
    let purpose = purpose.trim();
    let kw = |index: usize, placeholder: &str| -> String {
        keywords
            .get(index)
            .map(|k| wrap_span(HIGHLIGHT_CLASS, k))
            .unwrap_or_else(|| placeholder.to_string())
    };

    let text = format!(
        "# {title}\n\n\
In today's digital landscape, understanding {k0a} is more important than ever. \
This article explores the relationship between {k1a} and {k2a}.\n\n\
## Why {title} Matters\n\n\
The purpose of this blog is to {purpose}. When we examine the impact of {k0b} on modern \
business strategies, we discover fascinating patterns.\n\n\
## Key Insights\n\n\
Research shows that companies focusing on {k1b} tend to outperform their competitors by a \
significant margin. This is especially true when they incorporate {k2b} into their \
operational framework.\n\n\
## Best Practices\n\n\
1. Always start with a clear understanding of {k0c}\n\
2. Regularly review your approach to {k1c}\n\
3. Implement comprehensive strategies for {k2c}\n\n\
## Conclusion\n\n\
By embracing these principles, organizations can effectively navigate the complexities of \
today's market while maintaining a competitive edge through intelligent application of \
{k0d} and {k1d}.\n",
        k0a = kw(0, "key concepts"),
        k1a = kw(1, "important topics"),
        k2a = kw(2, "crucial elements"),
        k0b = kw(0, "key elements"),
        k1b = kw(1, "strategic areas"),
        k2b = kw(2, "essential practices"),
        k0c = kw(0, "fundamental concepts"),
        k1c = kw(1, "key areas"),
        k2c = kw(2, "critical elements"),
        k0d = kw(0, "core concepts"),
        k1d = kw(1, "strategic approaches"),
    );

    ContentDraft::new(text)
}

/// Random score in `[5, 25)` with one sentence flagged.
///
/// Sentences are split on `". "`. Empty content comes back unannotated.
pub fn plagiarism<R: Rng + ?Sized>(content: &ContentDraft, rng: &mut R) -> PlagiarismResult {
    let score = Percentage::new(rng.gen_range(FALLBACK_SCORE_MIN..FALLBACK_SCORE_MAX));

    if content.is_empty() {
        return PlagiarismResult::new(score, content.clone());
    }

    let mut sentences: Vec<String> = content.as_str().split(". ").map(str::to_string).collect();
    let index = rng.gen_range(0..sentences.len());
    sentences[index] = wrap_span(PLAGIARISM_CLASS, &sentences[index]);

    PlagiarismResult::new(score, ContentDraft::new(sentences.join(". ")))
}

/// Substitution-based rewrite that re-highlights every keyword.
///
/// Existing annotation spans are dropped first so highlights never nest.
pub fn rephrase(content: &ContentDraft, keywords: &KeywordSet) -> ContentDraft {
    let mut text = content.without_annotations().into_string();

    for (from, to) in FIRST_OCCURRENCE_SWAPS {
        text = text.replacen(from, to, 1);
    }
    for (from, to) in GLOBAL_SWAPS {
        text = text.replace(from, to);
    }

    ContentDraft::new(highlight_keywords(&text, keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn keywords(terms: &[&str]) -> KeywordSet {
        terms.iter().copied().collect()
    }

    #[test]
    fn draft_has_title_heading_and_highlighted_keywords() {
        let kws = keywords(&["alpha", "beta", "gamma", "delta"]);
        let out = draft("Remote Work", "promote hybrid policies", &kws);
        let text = out.as_str();

        assert!(text.starts_with("# Remote Work\n"));
        assert!(text.contains("## Why Remote Work Matters"));
        assert!(text.contains("to promote hybrid policies."));
        for k in ["alpha", "beta", "gamma"] {
            assert!(text.contains(&format!(r#"<span class="highlight">{}</span>"#, k)));
        }
        assert!(!text.contains("delta"));
    }

    #[test]
    fn draft_is_deterministic() {
        let kws = keywords(&["a", "b", "c"]);
        assert_eq!(draft("T", "p", &kws), draft("T", "p", &kws));
    }

    #[test]
    fn draft_uses_placeholders_for_missing_keywords() {
        let out = draft("T", "p", &keywords(&["only"]));
        assert!(out.as_str().contains("important topics"));
        assert!(out.as_str().contains("crucial elements"));
    }

    #[test]
    fn plagiarism_wraps_exactly_one_sentence() {
        let content = ContentDraft::new("One. Two. Three. Four");
        let mut rng = StdRng::seed_from_u64(7);
        let result = plagiarism(&content, &mut rng);
        assert_eq!(
            result.annotated_text.as_str().matches(r#"<span class="plagiarism">"#).count(),
            1
        );
        assert_eq!(result.annotated_text.without_annotations(), content);
    }

    #[test]
    fn plagiarism_leaves_empty_content_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = plagiarism(&ContentDraft::new(""), &mut rng);
        assert!(!result.annotated_text.has_spans());
    }

    #[test]
    fn rephrase_swaps_phrases() {
        let content = ContentDraft::new(
            "In today's digital landscape, companies tend to see significant gains. \
             Other companies too. ## Key Insights ## Best Practices",
        );
        let out = rephrase(&content, &KeywordSet::new());
        let text = out.as_str();
        assert!(text.contains("our current technological environment"));
        assert!(!text.contains("companies"));
        assert!(text.contains("organizations typically see substantial gains"));
        assert!(text.contains("Critical Findings"));
        assert!(text.contains("Recommended Strategies"));
    }

    #[test]
    fn rephrase_only_swaps_first_occurrence_of_once_phrases() {
        let content = ContentDraft::new("Key Insights and Key Insights");
        let out = rephrase(&content, &KeywordSet::new());
        assert_eq!(out.as_str(), "Critical Findings and Key Insights");
    }

    #[test]
    fn rephrase_does_not_nest_highlights() {
        let kws = keywords(&["productivity"]);
        let generated = draft("T", "p", &kws);
        let out = rephrase(&generated, &kws);
        assert!(!out.as_str().contains(r#"<span class="highlight"><span"#));
        assert!(out.as_str().contains(r#"<span class="highlight">productivity</span>"#));
    }

    proptest! {
        #[test]
        fn fallback_score_in_range(seed in any::<u64>(), text in "[a-z. ]{0,60}") {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = plagiarism(&ContentDraft::new(text), &mut rng);
            prop_assert!(result.score.value() >= FALLBACK_SCORE_MIN);
            prop_assert!(result.score.value() < FALLBACK_SCORE_MAX);
        }

        #[test]
        fn fallback_flags_one_sentence_unless_blank(seed in any::<u64>(), text in "[a-z. ]{0,60}") {
            let mut rng = StdRng::seed_from_u64(seed);
            let content = ContentDraft::new(text.clone());
            let result = plagiarism(&content, &mut rng);

            let spans = result.annotated_text.as_str().matches(r#"<span class="plagiarism">"#).count();
            if text.trim().is_empty() {
                prop_assert_eq!(spans, 0);
                prop_assert_eq!(result.annotated_text.as_str(), text.as_str());
            } else {
                prop_assert_eq!(spans, 1);
                prop_assert_eq!(result.annotated_text.plain_text(), text);
            }
        }
    }
}
