//! Layered configuration: built-in defaults, a discovered JSON file, and
//! environment overrides.

pub mod discovery;
pub mod env;
pub mod merge;
pub mod resolver;
pub mod types;

pub use discovery::{CONFIG_FILE_NAMES, find_config_file};
pub use env::EnvOverrides;
pub use merge::deep_merge;
pub use resolver::{ConfigResolver, resolve_config};
pub use types::{Config, Defaults, Language, OutputSettings, ScopeSetting, Templates};
