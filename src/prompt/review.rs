//! Tech-lead review prompt over pending changes.

use crate::config::Language;

use super::text::truncate_chars;

/// Build the review prompt for `diff`, truncated to `max_chars` characters.
pub fn build_review_prompt(diff: &str, language: Language, max_chars: usize) -> String {
    format!(
        r#"ACT AS: Tech Lead.
TASK: Review the following git changes for correctness, security and maintainability.
LANGUAGE: {language}.

REQUIREMENTS:
- Start your answer with "APPROVE" or "REJECT".
- List blocking issues first, each with the file and a concrete fix.
- Then list non-blocking suggestions.
- Call out leaked secrets, injection risks and missing error handling.

CHANGES:
{diff}"#,
        language = language_label(language),
        diff = truncate_chars(diff, max_chars),
    )
}

pub(crate) fn language_label(language: Language) -> &'static str {
    match language {
        Language::En => "English (Professional/Clear)",
        Language::Es => "Spanish (Professional/Formal)",
    }
}
