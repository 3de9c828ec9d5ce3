//! Pull request description prompt.

use crate::config::Language;

use super::review::language_label;
use super::text::truncate_chars;

/// Build the PR description prompt for `diff`.
///
/// A non-blank `title_hint` is passed along for the assistant to build on.
pub fn build_pr_prompt(
    diff: &str,
    language: Language,
    title_hint: Option<&str>,
    max_chars: usize,
) -> String {
    let hint = title_hint
        .map(str::trim)
        .filter(|hint| !hint.is_empty())
        .map(|hint| format!("TITLE HINT:\n{hint}\n\n"))
        .unwrap_or_default();

    format!(
        r#"ACT AS: Staff Engineer.
TASK: Write a high-quality GitHub Pull Request description for the changes below.
LANGUAGE: {language}.

REQUIREMENTS:
- Output Markdown only.
- Provide 3 PR title options (Conventional Commit style).
- Then a complete PR body with:
  1) Summary (what + why)
  2) Changes (bulleted)
  3) How to test (step-by-step)
  4) Risk & rollout notes
  5) Security considerations (secrets, auth, injection)
  6) Checklist
- Be concise, but actionable.

{hint}CHANGES:
{diff}"#,
        language = language_label(language),
        diff = truncate_chars(diff, max_chars),
    )
}
