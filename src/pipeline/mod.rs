//! Compose, scrub and deliver one prompt.
//!
//! Every command funnels its raw prompt through [`PromptPipeline::run`]:
//! template composition, then secret redaction, then delivery to the sinks.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Config, EnvOverrides};
use crate::error::PipelineError;
use crate::output::{ClipboardWriter, DeliveryOptions, OutputDispatcher};
use crate::redact::SecretRedactor;
use crate::template::{TemplateComposer, TemplateVars};

/// A raw prompt produced by a command, plus the command's sink flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptRequest {
    pub command: String,
    pub prompt: String,
    /// `--out` from the command line.
    pub out_path: Option<PathBuf>,
    /// `--no-clipboard` from the command line.
    pub no_clipboard: bool,
}

impl PromptRequest {
    pub fn new(command: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_out_path(mut self, out_path: Option<PathBuf>) -> Self {
        self.out_path = out_path;
        self
    }

    pub fn with_no_clipboard(mut self, no_clipboard: bool) -> Self {
        self.no_clipboard = no_clipboard;
        self
    }
}

pub struct PromptPipeline<'a> {
    config: &'a Config,
    env: &'a EnvOverrides,
    cwd: PathBuf,
    redactor: SecretRedactor,
}

impl<'a> PromptPipeline<'a> {
    pub fn new(config: &'a Config, env: &'a EnvOverrides, cwd: &Path) -> Self {
        let redactor = SecretRedactor::new().with_enabled(config.defaults.redact_secrets);
        Self {
            config,
            env,
            cwd: cwd.to_path_buf(),
            redactor,
        }
    }

    /// Replace the redactor, e.g. to add project-specific rules.
    pub fn with_redactor(mut self, redactor: SecretRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub fn redactor(&self) -> &SecretRedactor {
        &self.redactor
    }

    /// Compose and redact the prompt with the standard template variables.
    pub fn prepare(&self, request: &PromptRequest) -> String {
        let vars = TemplateVars::for_command(&request.command, &self.cwd);
        self.prepare_with_vars(request, &vars)
    }

    pub fn prepare_with_vars(&self, request: &PromptRequest, vars: &TemplateVars) -> String {
        let composed = TemplateComposer::new(&self.config.templates).compose(
            &request.command,
            &request.prompt,
            vars,
        );
        self.redactor.redact(&composed)
    }

    /// Resolve sink settings: environment, then command line, then config.
    pub fn delivery_options(&self, request: &PromptRequest) -> DeliveryOptions {
        let out_path = self
            .env
            .out
            .clone()
            .or_else(|| request.out_path.clone())
            .or_else(|| self.config.output.out.clone());
        let no_clipboard =
            self.env.no_clipboard || request.no_clipboard || self.config.output.no_clipboard;

        DeliveryOptions::new(request.command.clone())
            .with_out_path(out_path)
            .with_no_clipboard(no_clipboard)
    }

    /// Prepare the prompt and deliver it through `dispatcher`.
    ///
    /// The terminal echo always happens before a file-sink failure is
    /// returned. On success the delivered text is returned.
    pub async fn run<C, W>(
        &self,
        request: &PromptRequest,
        dispatcher: &mut OutputDispatcher<C, W>,
    ) -> Result<String, PipelineError>
    where
        C: ClipboardWriter,
        W: Write + Send,
    {
        let text = self.prepare(request);
        let options = self.delivery_options(request);
        debug!(
            "Delivering '{}' prompt ({} chars, out: {:?}, clipboard: {})",
            request.command,
            text.chars().count(),
            options.out_path,
            !options.no_clipboard
        );

        dispatcher.deliver(&text, &options).await.into_result()?;
        Ok(text)
    }
}
