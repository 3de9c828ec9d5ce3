//! Version-control collaborator: the queries the pipeline needs from git.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

use super::status::{parse_name_only, parse_porcelain};

/// Source of pending-change information.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VcsSource: Send + Sync {
    /// Unified diff text of the index (`cached`) or the working tree.
    async fn diff(
        &self,
        cached: bool,
        unified: Option<u32>,
        paths: &[String],
    ) -> Result<String, GitError>;

    /// Paths changed in the index (`cached`) or the working tree.
    async fn name_only_diff(&self, cached: bool) -> Result<Vec<String>, GitError>;

    /// Paths listed by `git status --porcelain`.
    async fn status_porcelain(&self) -> Result<Vec<String>, GitError>;
}

/// [`VcsSource`] backed by the system `git` binary.
///
/// The user's git config, attributes and diff drivers apply as they do on
/// the command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git with `args` in the working directory and return its stdout.
    ///
    /// A single trailing newline is stripped from the output.
    async fn run(&self, args: &[String]) -> Result<String, GitError> {
        debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .arg("--no-pager")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::NotInstalled
                } else {
                    GitError::SpawnFailed(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            return Err(GitError::NonZeroExit {
                command: args.first().cloned().unwrap_or_default(),
                code,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .strip_suffix('\n')
            .unwrap_or(&stdout)
            .to_string())
    }
}

/// Build the argument list for `git diff`.
pub(crate) fn diff_args(cached: bool, unified: Option<u32>, paths: &[String]) -> Vec<String> {
    let mut args = vec!["diff".to_string(), "--no-color".to_string()];
    if cached {
        args.push("--cached".to_string());
    }
    if let Some(lines) = unified {
        args.push(format!("--unified={}", lines));
    }

    let paths: Vec<&String> = paths.iter().filter(|p| !p.trim().is_empty()).collect();
    if !paths.is_empty() {
        args.push("--".to_string());
        args.extend(paths.into_iter().cloned());
    }

    args
}

#[async_trait]
impl VcsSource for GitCli {
    async fn diff(
        &self,
        cached: bool,
        unified: Option<u32>,
        paths: &[String],
    ) -> Result<String, GitError> {
        self.run(&diff_args(cached, unified, paths)).await
    }

    async fn name_only_diff(&self, cached: bool) -> Result<Vec<String>, GitError> {
        let mut args = vec!["diff".to_string(), "--name-only".to_string()];
        if cached {
            args.insert(1, "--cached".to_string());
        }
        let stdout = self.run(&args).await?;
        Ok(parse_name_only(&stdout))
    }

    async fn status_porcelain(&self) -> Result<Vec<String>, GitError> {
        let args = ["status".to_string(), "--porcelain".to_string()];
        let stdout = self.run(&args).await?;
        Ok(parse_porcelain(&stdout))
    }
}
