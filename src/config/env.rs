//! Process environment overrides.
//!
//! These take precedence over everything read from the config file.

use std::path::PathBuf;

use tracing::warn;

use super::types::Config;

/// Explicit config file path.
pub const CONFIG_ENV_VAR: &str = "DEVFLOW_CONFIG";
/// Output file path.
pub const OUT_ENV_VAR: &str = "DEVFLOW_OUT";
/// Disable the clipboard sink.
pub const NO_CLIPBOARD_ENV_VAR: &str = "DEVFLOW_NO_CLIPBOARD";
/// Enable or disable secret redaction.
pub const REDACT_ENV_VAR: &str = "DEVFLOW_REDACT_SECRETS";
/// Skip launching the downstream assistant.
pub const DRY_RUN_ENV_VAR: &str = "DEVFLOW_DRY_RUN";

/// Overrides captured from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub config_path: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub no_clipboard: bool,
    pub redact_secrets: Option<bool>,
    pub dry_run: bool,
}

impl EnvOverrides {
    /// Read overrides from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        let flag = |key: &str| lookup(key).and_then(|v| parse_flag(key, &v));

        Self {
            config_path: path(CONFIG_ENV_VAR),
            out: path(OUT_ENV_VAR),
            no_clipboard: flag(NO_CLIPBOARD_ENV_VAR).unwrap_or(false),
            redact_secrets: flag(REDACT_ENV_VAR),
            dry_run: flag(DRY_RUN_ENV_VAR).unwrap_or(false),
        }
    }

    /// Apply the overrides to a merged configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(out) = &self.out {
            config.output.out = Some(out.clone());
        }
        if self.no_clipboard {
            config.output.no_clipboard = true;
        }
        if let Some(enabled) = self.redact_secrets {
            config.defaults.redact_secrets = enabled;
        }
    }
}

/// Interpret a boolean-ish environment value.
///
/// Empty values count as unset; unrecognised values are ignored with a warning.
fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "" => None,
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring invalid {} value '{}'", key, other);
            None
        }
    }
}
