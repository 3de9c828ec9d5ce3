//! Variables available to `{{KEY}}` placeholders.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Local};

/// Key bound to the text being wrapped by a template.
pub const PROMPT_KEY: &str = "PROMPT";

/// Placeholder values keyed by uppercase name.
///
/// Keys are trimmed and uppercased on insertion and lookups are
/// case-insensitive, so `{{cwd}}` and `{{CWD}}` resolve to the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
    values: BTreeMap<String, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard variables for one invocation of `command` in `cwd`.
    pub fn for_command(command: &str, cwd: &Path) -> Self {
        Self::for_command_at(command, cwd, Local::now())
    }

    /// Same as [`for_command`](Self::for_command) with an explicit clock.
    pub fn for_command_at(command: &str, cwd: &Path, now: DateTime<Local>) -> Self {
        Self::new()
            .with("COMMAND", command)
            .with("CWD", cwd.display().to_string())
            .with("TIMESTAMP", now.to_rfc3339())
            .with("DATE", now.format("%Y-%m-%d").to_string())
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(normalize_key(key), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_key(key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for TemplateVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (key, value) in iter {
            vars.insert(key.as_ref(), value);
        }
        vars
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}
