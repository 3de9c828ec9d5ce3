//! Placeholder rendering and two-stage prompt composition.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use crate::config::Templates;

use super::vars::{PROMPT_KEY, TemplateVars};

/// `{{ KEY }}` with optional inner whitespace.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("Invalid placeholder regex")
});

/// `{{PROMPT}}` in any letter case.
static PROMPT_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{\s*PROMPT\s*\}\}").expect("Invalid prompt placeholder regex")
});

/// Substitute `{{KEY}}` placeholders in `template` with values from `vars`.
///
/// Unknown keys are left verbatim.
pub fn render_template(template: &str, vars: &TemplateVars) -> String {
    if template.is_empty() {
        return String::new();
    }

    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Compose the final prompt text.
///
/// The command template wraps the raw prompt first, then the wrapper template
/// wraps that result. Blank or missing templates are skipped, so with neither
/// template the prompt is returned unchanged.
pub fn compose(
    wrapper: Option<&str>,
    command_template: Option<&str>,
    prompt: &str,
    vars: &TemplateVars,
) -> String {
    let inner = match non_blank(command_template) {
        Some(template) => apply_template(template, prompt, vars),
        None => prompt.to_string(),
    };

    match non_blank(wrapper) {
        Some(template) => apply_template(template, &inner, vars),
        None => inner,
    }
}

/// Templates from the configuration, ready to compose prompts per command.
#[derive(Debug, Clone, Copy)]
pub struct TemplateComposer<'a> {
    templates: &'a Templates,
}

impl<'a> TemplateComposer<'a> {
    pub fn new(templates: &'a Templates) -> Self {
        Self { templates }
    }

    pub fn compose(&self, command: &str, prompt: &str, vars: &TemplateVars) -> String {
        compose(
            self.templates.wrapper.as_deref(),
            self.templates.for_command(command),
            prompt,
            vars,
        )
    }
}

/// Render one template around `body`.
///
/// If the rendered text lost `body` (the template never referenced
/// `{{PROMPT}}`), the body is appended after a blank line.
fn apply_template(template: &str, body: &str, vars: &TemplateVars) -> String {
    let vars = vars.clone().with(PROMPT_KEY, body);
    let rendered = render_template(template, &vars);

    if rendered.contains(body) || PROMPT_PLACEHOLDER_RE.is_match(template) {
        rendered
    } else {
        format!("{}\n\n{}", rendered, body)
    }
}

fn non_blank(template: Option<&str>) -> Option<&str> {
    template.filter(|t| !t.trim().is_empty())
}
