//! Error types for devflow modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from invoking the `git` binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

/// Errors from delivering the final prompt to an output sink.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write prompt to {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Failed to echo prompt to terminal: {0}")]
    Terminal(#[source] std::io::Error),
}

/// Errors from launching the downstream AI assistant.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("GitHub CLI not found. Install it from https://cli.github.com and run: gh extension install github/gh-copilot")]
    NotInstalled,

    #[error("Failed to spawn assistant process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Assistant exited with code {code}")]
    NonZeroExit { code: i32 },
}

/// Errors surfaced by the prompt pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors from the interactive file picker.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("File selection cancelled")]
    Cancelled,
}
