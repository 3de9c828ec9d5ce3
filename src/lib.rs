//! devflow - A CLI tool that turns pending git changes into AI prompts.
//!
//! # Overview
//!
//! devflow collects the staged and unstaged diff of the current repository,
//! wraps it in a command-specific prompt, composes user templates around it,
//! scrubs anything that looks like a secret, and delivers the result to a
//! file, the clipboard and the terminal before handing off to `gh copilot`.

pub mod assistant;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod picker;
pub mod pipeline;
pub mod prompt;
pub mod redact;
pub mod template;

// Re-export commonly used types
pub use config::{Config, ConfigResolver, EnvOverrides, Language, ScopeSetting};
pub use error::{AssistantError, GitError, OutputError, PickerError, PipelineError};
pub use git::{DiffAggregator, DiffScope, DiffSection, GitCli, VcsSource};
pub use output::{ClipboardWriter, DeliveryOptions, DeliveryReport, OutputDispatcher, SinkKind};
pub use pipeline::{PromptPipeline, PromptRequest};
pub use redact::{RedactionRule, SecretRedactor};
pub use template::{TemplateComposer, TemplateVars};
