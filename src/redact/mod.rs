//! Secret redaction applied to prompts before they leave the process.

pub mod redactor;
pub mod rules;

pub use redactor::SecretRedactor;
pub use rules::{DEFAULT_MARKER, KeyClassifier, RedactionRule, Rewrite, builtin_rules};
