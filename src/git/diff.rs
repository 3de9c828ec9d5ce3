//! Aggregation of staged and unstaged changes into prompt context.

use tracing::{debug, warn};

use super::scope::{DiffScope, DiffSection};
use super::source::VcsSource;

/// Queries a [`VcsSource`] and combines the results into labeled documents.
///
/// Collaborator failures (not a repository, git missing) never surface as
/// errors here: they read as "no changes".
#[derive(Debug, Clone)]
pub struct DiffAggregator<S> {
    source: S,
    context_lines: Option<u32>,
}

impl<S: VcsSource> DiffAggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            context_lines: None,
        }
    }

    /// Pass `--unified=<lines>` to every diff query.
    pub fn with_context_lines(mut self, lines: u32) -> Self {
        self.context_lines = Some(lines);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Diff text of the index (`cached`) or the working tree.
    ///
    /// Returns `None` when the collaborator call fails.
    pub async fn diff(&self, cached: bool, unified: Option<u32>, paths: &[String]) -> Option<String> {
        match self.source.diff(cached, unified, paths).await {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("git diff (cached={}) unavailable: {}", cached, e);
                None
            }
        }
    }

    /// Non-empty sections for the requested halves, staged first.
    pub async fn sections(&self, scope: &DiffScope) -> Vec<DiffSection> {
        let mut sections = Vec::new();

        if scope.staged {
            if let Some(body) = self.non_blank_diff(true, scope).await {
                sections.push(DiffSection::staged(body));
            }
        }

        if scope.unstaged {
            if let Some(body) = self.non_blank_diff(false, scope).await {
                sections.push(DiffSection::unstaged(body));
            }
        }

        sections
    }

    /// One labeled document covering every requested half of `scope`.
    ///
    /// Returns `None` when no half has changes, which callers must treat as
    /// "no changes found" rather than as an empty diff.
    pub async fn combined_diff(&self, scope: &DiffScope) -> Option<String> {
        let sections = self.sections(scope).await;
        if sections.is_empty() {
            return None;
        }

        Some(
            sections
                .iter()
                .map(DiffSection::to_string)
                .collect::<Vec<_>>()
                .join("\n\n"),
        )
    }

    /// Paths with pending changes in the requested halves.
    ///
    /// Unions the name-only diffs (staged first, duplicates removed, order
    /// kept) and falls back to `git status --porcelain` when they yield
    /// nothing. Returns an empty list on total failure.
    pub async fn changed_files(&self, scope: &DiffScope) -> Vec<String> {
        let mut files: Vec<String> = Vec::new();

        for (requested, cached) in [(scope.staged, true), (scope.unstaged, false)] {
            if !requested {
                continue;
            }
            match self.source.name_only_diff(cached).await {
                Ok(paths) => push_unique(&mut files, paths),
                Err(e) => debug!("git diff --name-only (cached={}) failed: {}", cached, e),
            }
        }

        if !files.is_empty() {
            return files;
        }

        match self.source.status_porcelain().await {
            Ok(paths) => push_unique(&mut files, paths),
            Err(e) => warn!("Could not list changed files: {}", e),
        }

        files
    }

    async fn non_blank_diff(&self, cached: bool, scope: &DiffScope) -> Option<String> {
        self.diff(cached, self.context_lines, scope.paths())
            .await
            .filter(|body| !body.trim().is_empty())
    }
}

fn push_unique(files: &mut Vec<String>, paths: Vec<String>) {
    for path in paths {
        if !files.contains(&path) {
            files.push(path);
        }
    }
}
