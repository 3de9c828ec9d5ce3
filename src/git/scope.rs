//! Diff scope selection and labeled diff sections.

use std::fmt;

use crate::config::ScopeSetting;

/// Label heading the staged half of a combined diff.
pub const STAGED_LABEL: &str = "### STAGED (git diff --cached)";

/// Label heading the unstaged half of a combined diff.
pub const UNSTAGED_LABEL: &str = "### UNSTAGED (git diff)";

/// Which halves of the pending changes to query, and an optional path filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffScope {
    pub staged: bool,
    pub unstaged: bool,
    paths: Vec<String>,
}

impl DiffScope {
    pub fn new(staged: bool, unstaged: bool) -> Self {
        Self {
            staged,
            unstaged,
            paths: Vec::new(),
        }
    }

    pub fn all() -> Self {
        Self::new(true, true)
    }

    pub fn staged_only() -> Self {
        Self::new(true, false)
    }

    pub fn unstaged_only() -> Self {
        Self::new(false, true)
    }

    pub fn from_setting(setting: ScopeSetting) -> Self {
        Self::new(setting.includes_staged(), setting.includes_unstaged())
    }

    /// Restrict the scope to `paths`.
    ///
    /// Blank entries are dropped and duplicates removed, keeping first-seen order.
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for path in paths {
            let path = path.into().trim().to_string();
            if !path.is_empty() && !self.paths.contains(&path) {
                self.paths.push(path);
            }
        }
        self
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl Default for DiffScope {
    fn default() -> Self {
        Self::all()
    }
}

/// One labeled half of a combined diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSection {
    pub label: String,
    pub body: String,
}

impl DiffSection {
    pub fn staged(body: String) -> Self {
        Self {
            label: STAGED_LABEL.to_string(),
            body,
        }
    }

    pub fn unstaged(body: String) -> Self {
        Self {
            label: UNSTAGED_LABEL.to_string(),
            body,
        }
    }
}

impl fmt::Display for DiffSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.label, self.body)
    }
}
