//! Prompt templating: `{{KEY}}` substitution and wrapper composition.

pub mod render;
pub mod vars;

pub use render::{TemplateComposer, compose, render_template};
pub use vars::{PROMPT_KEY, TemplateVars};
