//! Prompt templates for the three content operations.

use super::{ContentDraft, KeywordSet};

/// System prompt shared by every request.
pub const SYSTEM_PROMPT: &str = "You are an experienced SEO copywriter and editor. \
Write in a natural, human-like tone and keep any HTML span annotations you are asked to produce well-formed.";

/// Prompt for drafting a blog post.
pub fn generate_prompt(title: &str, purpose: &str, keywords: &KeywordSet) -> String {
    format!(
        "Write a blog post with the title: \"{title}\".\n\
         The purpose of this blog is to {purpose}.\n\
         Please incorporate the following keywords naturally throughout the text: {keywords}.\n\
         Write in a natural, human-like tone. Format the content using markdown with appropriate headings.",
        title = title.trim(),
        purpose = purpose.trim(),
        keywords = keywords.joined(),
    )
}

/// Prompt for scoring duplicated content.
pub fn score_prompt(content: &ContentDraft) -> String {
    format!(
        "Analyze the following content for plagiarism. Provide a plagiarism percentage score \
         and highlight any potentially plagiarized parts with \
         <span class=\"plagiarism\">plagiarized text</span>:\n\n{}",
        content.as_str()
    )
}

/// Prompt for a keyword-preserving rewrite.
pub fn rephrase_prompt(content: &ContentDraft, keywords: &KeywordSet) -> String {
    format!(
        "Rephrase the following content while preserving the meaning and ensuring \
         all of these keywords are maintained: {}.\n\
         Make sure the rephrased content has a natural, human-like tone:\n\n{}",
        keywords.joined(),
        content.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_prompt_embeds_all_inputs() {
        let keywords: KeywordSet = ["productivity", "flexibility"].into_iter().collect();
        let prompt = generate_prompt(" Remote Work ", "promote hybrid policies", &keywords);
        assert!(prompt.contains("\"Remote Work\""));
        assert!(prompt.contains("to promote hybrid policies."));
        assert!(prompt.contains("productivity, flexibility"));
    }

    #[test]
    fn score_prompt_asks_for_plagiarism_spans() {
        let prompt = score_prompt(&ContentDraft::new("Body text"));
        assert!(prompt.contains(r#"<span class="plagiarism">"#));
        assert!(prompt.ends_with("Body text"));
    }

    #[test]
    fn rephrase_prompt_lists_keywords() {
        let keywords: KeywordSet = ["seo"].into_iter().collect();
        let prompt = rephrase_prompt(&ContentDraft::new("Body"), &keywords);
        assert!(prompt.contains("maintained: seo."));
    }
}
