//! Fan the final prompt out to every configured sink.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::report::{DeliveryReport, SinkKind};
use super::sink::{ClipboardWriter, echo_block, write_file_atomic};

/// Where a prompt should go besides the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryOptions {
    pub out_path: Option<PathBuf>,
    pub no_clipboard: bool,
    pub command_name: String,
}

impl DeliveryOptions {
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            ..Self::default()
        }
    }

    pub fn with_out_path(mut self, path: Option<PathBuf>) -> Self {
        self.out_path = path;
        self
    }

    pub fn with_no_clipboard(mut self, no_clipboard: bool) -> Self {
        self.no_clipboard = no_clipboard;
        self
    }
}

/// Delivers prompt text to the file, clipboard and terminal sinks.
pub struct OutputDispatcher<C, W> {
    clipboard: C,
    terminal: W,
}

impl<C: ClipboardWriter, W: Write + Send> OutputDispatcher<C, W> {
    pub fn new(clipboard: C, terminal: W) -> Self {
        Self {
            clipboard,
            terminal,
        }
    }

    pub fn terminal(&self) -> &W {
        &self.terminal
    }

    pub fn into_terminal(self) -> W {
        self.terminal
    }

    /// Deliver `text`.
    ///
    /// Sinks run in order: file (if `out_path`), clipboard (unless
    /// `no_clipboard`), then the terminal echo, which always runs exactly
    /// once. Nothing here returns early; callers inspect the report.
    pub async fn deliver(&mut self, text: &str, options: &DeliveryOptions) -> DeliveryReport {
        let mut report = DeliveryReport::new();

        if let Some(path) = &options.out_path {
            let result = write_file_atomic(path, text);
            match &result {
                Ok(()) => debug!("Wrote prompt to {}", path.display()),
                Err(e) => debug!("File sink failed: {}", e),
            }
            report.record(SinkKind::File, result);
        }

        if !options.no_clipboard {
            let result = self.clipboard.write(text).await;
            if let Err(e) = &result {
                warn!("Clipboard copy failed, the prompt is printed below: {}", e);
            }
            report.record(SinkKind::Clipboard, result);
        }

        let result = echo_block(&mut self.terminal, &options.command_name, text);
        if let Err(e) = &result {
            warn!("{}", e);
        }
        report.record(SinkKind::Terminal, result);

        report
    }
}
