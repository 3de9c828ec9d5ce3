//! Layered configuration resolution: defaults, config file, environment.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::discovery::find_config_file;
use super::env::EnvOverrides;
use super::merge::deep_merge;
use super::types::Config;

/// Resolves and memoizes the configuration for one process.
///
/// The first [`load`](Self::load) reads the config file; later calls return the
/// same value until [`reload`](Self::reload) forces a fresh read.
#[derive(Debug, Default)]
pub struct ConfigResolver {
    env: EnvOverrides,
    cached: Option<Arc<Config>>,
}

impl ConfigResolver {
    pub fn new(env: EnvOverrides) -> Self {
        Self { env, cached: None }
    }

    /// Resolver reading overrides from the process environment.
    pub fn from_env() -> Self {
        Self::new(EnvOverrides::from_env())
    }

    pub fn env(&self) -> &EnvOverrides {
        &self.env
    }

    /// Resolved configuration for `working_dir`, loading it on first use.
    pub fn load(&mut self, working_dir: &Path) -> Arc<Config> {
        match &self.cached {
            Some(config) => Arc::clone(config),
            None => self.reload(working_dir),
        }
    }

    /// Discard the memoized configuration and resolve it again.
    pub fn reload(&mut self, working_dir: &Path) -> Arc<Config> {
        let config = Arc::new(resolve_config(working_dir, &self.env));
        self.cached = Some(Arc::clone(&config));
        config
    }
}

/// Resolve the configuration for `working_dir` without memoization.
///
/// Never fails: unreadable or malformed files degrade to the built-in defaults.
pub fn resolve_config(working_dir: &Path, env: &EnvOverrides) -> Config {
    let source = find_config_file(working_dir, env.config_path.as_deref());
    let user = source
        .as_deref()
        .map(read_override)
        .unwrap_or_else(empty_override);

    let mut config = merge_over_defaults(user);
    config.source = source;
    env.apply(&mut config);
    config
}

/// Read a user override file, treating any failure as an empty override.
fn read_override(path: &Path) -> Value {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Cannot read config file {}: {}. Using defaults.", path.display(), e);
            return empty_override();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring invalid config file {}: {}", path.display(), e);
            empty_override()
        }
    }
}

/// Deep-merge a user override over the built-in defaults.
///
/// Each section is merged leaf by leaf. A leaf whose value does not fit the
/// [`Config`] shape is dropped with a warning and keeps its default; the
/// other leaves of the override still apply.
fn merge_over_defaults(user: Value) -> Config {
    let defaults = Config::default();
    let Value::Object(user) = user else {
        warn!("Config file must contain a JSON object. Using defaults.");
        return defaults;
    };

    let config = Config {
        defaults: merge_section(&user, "defaults", defaults.defaults),
        output: merge_section(&user, "output", defaults.output),
        templates: merge_section(&user, "templates", defaults.templates),
        source: None,
    };
    debug!("Resolved config: {:?}", config);
    config
}

/// Merge one top-level section of the override onto `fallback`.
fn merge_section<T>(user: &Map<String, Value>, name: &str, fallback: T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let overlay = match user.get(name) {
        None => return fallback,
        Some(Value::Object(overlay)) => overlay,
        Some(other) => {
            warn!("Ignoring config section '{}': expected an object, found {}", name, other);
            return fallback;
        }
    };

    let mut accepted = match serde_json::to_value(&fallback) {
        Ok(base) => base,
        Err(e) => {
            warn!("Failed to serialize default config section '{}': {}", name, e);
            return fallback;
        }
    };

    for (key, value) in overlay {
        let mut leaf = Map::new();
        leaf.insert(key.clone(), value.clone());
        let candidate = deep_merge(accepted.clone(), Value::Object(leaf));

        match serde_json::from_value::<T>(candidate.clone()) {
            Ok(_) => accepted = candidate,
            Err(e) => warn!("Ignoring invalid config value {}.{} ({}). Keeping the default.", name, key, e),
        }
    }

    serde_json::from_value(accepted).unwrap_or(fallback)
}

fn empty_override() -> Value {
    Value::Object(serde_json::Map::new())
}
