//! Conventional-commit message prompt over the staged diff.

use super::text::truncate_chars;

/// Build the commit-message prompt for a staged diff.
pub fn build_commit_prompt(staged_diff: &str, max_chars: usize) -> String {
    format!(
        r#"Generate a semantic git commit message for these changes.
Use the Conventional Commits format (`type(scope): description`).
- Type: one of feat, fix, build, chore, ci, docs, style, refactor, perf, test
- Subject in imperative mood, at most 50 characters, no trailing period
- Optional body wrapped at 72 characters explaining why the change was made
Just show the message, no quotes.

CHANGES:
{}"#,
        truncate_chars(staged_diff, max_chars)
    )
}
