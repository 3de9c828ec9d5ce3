//! Hand-off to the downstream AI assistant (`gh copilot`).

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::AssistantError;

/// Binary that hosts the assistant.
const ASSISTANT_BINARY: &str = "gh";

/// Check that the GitHub CLI is installed and accessible.
pub fn check_assistant_installed() -> Result<(), AssistantError> {
    which::which(ASSISTANT_BINARY)
        .map(|_| ())
        .map_err(|_| AssistantError::NotInstalled)
}

/// Trait for launching the assistant (allows mocking in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssistantLauncher: Send + Sync {
    async fn launch(&self) -> Result<(), AssistantError>;
}

/// Launches `gh copilot` attached to the current terminal.
pub struct CopilotLauncher;

#[async_trait]
impl AssistantLauncher for CopilotLauncher {
    async fn launch(&self) -> Result<(), AssistantError> {
        launch_assistant().await
    }
}

/// Run `gh copilot` with inherited stdio and wait for it to exit.
pub async fn launch_assistant() -> Result<(), AssistantError> {
    check_assistant_installed()?;
    debug!("Launching {} copilot", ASSISTANT_BINARY);

    let status = Command::new(ASSISTANT_BINARY)
        .arg("copilot")
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AssistantError::NotInstalled,
            _ => AssistantError::SpawnFailed(e),
        })?;

    if !status.success() {
        return Err(AssistantError::NonZeroExit {
            code: status.code().unwrap_or(-1),
        });
    }

    Ok(())
}

/// Launch the assistant unless `dry_run` is set.
///
/// Returns `Ok(false)` when the launch was skipped.
pub async fn hand_off<L: AssistantLauncher>(launcher: &L, dry_run: bool) -> Result<bool, AssistantError> {
    if dry_run {
        debug!("Dry run, not launching the assistant");
        return Ok(false);
    }
    launcher.launch().await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_skips_launch() {
        let mut launcher = MockAssistantLauncher::new();
        launcher.expect_launch().never();

        assert!(!hand_off(&launcher, true).await.unwrap());
    }

    #[tokio::test]
    async fn test_launch_errors_are_returned() {
        let mut launcher = MockAssistantLauncher::new();
        launcher
            .expect_launch()
            .times(1)
            .returning(|| Err(AssistantError::NonZeroExit { code: 2 }));

        let result = hand_off(&launcher, false).await;
        assert!(matches!(result, Err(AssistantError::NonZeroExit { code: 2 })));
    }

    #[tokio::test]
    async fn test_successful_launch() {
        let mut launcher = MockAssistantLauncher::new();
        launcher.expect_launch().times(1).returning(|| Ok(()));

        assert!(hand_off(&launcher, false).await.unwrap());
    }

    #[test]
    #[serial_test::serial]
    fn test_missing_binary_is_not_installed() {
        temp_env::with_var("PATH", Some(""), || {
            assert!(matches!(
                check_assistant_installed(),
                Err(AssistantError::NotInstalled)
            ));
        });
    }
}
