//! The individual delivery targets: file, clipboard and terminal.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::error::OutputError;

/// Rule printed above and below the echoed prompt.
pub const ECHO_RULE: &str = "---------------------------------------------------";

/// Trait for clipboard access (allows mocking in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Replace the clipboard contents with `text`.
    async fn write(&self, text: &str) -> Result<(), OutputError>;
}

/// The system clipboard.
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write(&self, text: &str) -> Result<(), OutputError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| OutputError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| OutputError::Clipboard(e.to_string()))
    }
}

/// Write `text` to `path`, replacing any existing file.
///
/// Missing parent directories are created. The text goes to a temp file in
/// the target directory which is then renamed over `path`, so readers never
/// see a partial prompt.
pub fn write_file_atomic(path: &Path, text: &str) -> Result<(), OutputError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let write_failed = |source| OutputError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(text.as_bytes()).map_err(write_failed)?;
    tmp.flush().map_err(write_failed)?;
    tmp.persist(path).map_err(|e| write_failed(e.error))?;

    Ok(())
}

/// Print `text` inside a delimited block so it can be copied by hand.
pub fn echo_block<W: Write>(writer: &mut W, command_name: &str, text: &str) -> Result<(), OutputError> {
    write_echo(writer, command_name, text).map_err(OutputError::Terminal)
}

fn write_echo<W: Write>(writer: &mut W, command_name: &str, text: &str) -> std::io::Result<()> {
    writeln!(writer)?;
    if command_name.is_empty() {
        writeln!(writer, "Prompt (copy it if the clipboard did not work):")?;
    } else {
        writeln!(
            writer,
            "Prompt for '{}' (copy it if the clipboard did not work):",
            command_name
        )?;
    }
    writeln!(writer, "{}", ECHO_RULE)?;
    writeln!(writer, "{}", text)?;
    writeln!(writer, "{}", ECHO_RULE)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_atomic_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/prompt.md");

        write_file_atomic(&path, "hello").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_atomic_overwrites_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.md");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_file_atomic(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_file_atomic_reports_blocked_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "i am a file").unwrap();

        let err = write_file_atomic(&blocker.join("prompt.md"), "x").unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
    }

    #[test]
    fn test_echo_block_layout() {
        let mut buf = Vec::new();
        echo_block(&mut buf, "review", "line one\nline two").unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            format!(
                "\nPrompt for 'review' (copy it if the clipboard did not work):\n{r}\nline one\nline two\n{r}\n",
                r = ECHO_RULE
            )
        );
    }

    #[tokio::test]
    async fn test_mock_clipboard_receives_text() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write()
            .withf(|text| text == "prompt")
            .times(1)
            .returning(|_| Ok(()));

        mock.write("prompt").await.unwrap();
    }
}
