//! Best-effort secret scrubbing for outgoing prompt text.

use tracing::debug;

use super::rules::{DEFAULT_MARKER, RedactionRule, builtin_rules};

/// Applies an ordered rule table to text before it leaves the process.
///
/// This reduces accidental credential leaks; it is not a security boundary.
/// Redaction is idempotent as long as the marker itself does not look like a
/// secret.
#[derive(Debug, Clone)]
pub struct SecretRedactor {
    rules: Vec<RedactionRule>,
    marker: String,
    enabled: bool,
}

impl SecretRedactor {
    /// Redactor with the built-in rules, enabled.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
            marker: DEFAULT_MARKER.to_string(),
            enabled: true,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Append a rule; it runs after every rule already present.
    pub fn with_rule(mut self, rule: RedactionRule) -> Self {
        self.push_rule(rule);
        self
    }

    pub fn push_rule(&mut self, rule: RedactionRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Scrub `text`. Returns it unchanged when the redactor is disabled.
    pub fn redact(&self, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }

        let mut result = text.to_string();
        for rule in &self.rules {
            let next = rule.apply(&result, &self.marker);
            if next != result {
                debug!("Redaction rule '{}' rewrote prompt text", rule.name());
                result = next;
            }
        }
        result
    }
}

impl Default for SecretRedactor {
    fn default() -> Self {
        Self::new()
    }
}
