//! Configuration data model and built-in defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Default number of context lines passed to `git diff --unified`.
pub const DEFAULT_UNIFIED: u32 = 3;

/// Default character budget for diff context handed to prompt producers.
pub const DEFAULT_MAX_CHARS: usize = 6000;

/// Which halves of the pending changes a command looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeSetting {
    Staged,
    Unstaged,
    All,
}

impl ScopeSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeSetting::Staged => "staged",
            ScopeSetting::Unstaged => "unstaged",
            ScopeSetting::All => "all",
        }
    }

    pub fn includes_staged(&self) -> bool {
        matches!(self, ScopeSetting::Staged | ScopeSetting::All)
    }

    pub fn includes_unstaged(&self) -> bool {
        matches!(self, ScopeSetting::Unstaged | ScopeSetting::All)
    }
}

impl fmt::Display for ScopeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "staged" => Ok(ScopeSetting::Staged),
            "unstaged" => Ok(ScopeSetting::Unstaged),
            "all" => Ok(ScopeSetting::All),
            other => Err(format!(
                "invalid scope '{}' (expected staged, unstaged or all)",
                other
            )),
        }
    }
}

/// Language the generated prompt asks the assistant to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(format!("unsupported language '{}' (expected en or es)", other)),
        }
    }
}

/// Fully resolved configuration.
///
/// Built once by [`super::ConfigResolver`] and passed by reference to every
/// stage of the pipeline. Nothing mutates it after resolution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub output: OutputSettings,
    pub templates: Templates,
    /// File the user override was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defaults {
    pub unified: u32,
    pub max_chars: usize,
    pub language: Language,
    pub review_scope: ScopeSetting,
    pub audit_scope: ScopeSetting,
    pub redact_secrets: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            unified: DEFAULT_UNIFIED,
            max_chars: DEFAULT_MAX_CHARS,
            language: Language::En,
            review_scope: ScopeSetting::All,
            audit_scope: ScopeSetting::Staged,
            redact_secrets: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputSettings {
    /// Blank paths read as unset.
    #[serde(deserialize_with = "blank_path_as_none")]
    pub out: Option<PathBuf>,
    pub no_clipboard: bool,
}

/// Wrapper template plus per-command templates keyed by command name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub wrapper: Option<String>,
    #[serde(flatten, deserialize_with = "string_entries")]
    pub commands: BTreeMap<String, String>,
}

fn blank_path_as_none<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
        .map(PathBuf::from))
}

/// Keep only the command templates that are strings.
fn string_entries<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(command, template)| match template {
            Value::String(template) => Some((command, template)),
            other => {
                warn!("Ignoring template for '{}': expected a string, found {}", command, other);
                None
            }
        })
        .collect())
}

impl Templates {
    /// Template registered for `command`, if any.
    pub fn for_command(&self, command: &str) -> Option<&str> {
        self.commands.get(command).map(String::as_str)
    }
}
