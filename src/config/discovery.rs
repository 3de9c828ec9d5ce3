//! Config file discovery by walking up the directory tree.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Conventional config file names, checked in order at every directory level.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["devflow.config.json", ".devflowrc.json", ".devflowrc"];

/// Find the config file that applies to `start_dir`.
///
/// An explicit path is tried first at every level: absolute paths are checked
/// as-is, relative ones are resolved against the directory being visited. The
/// walk stops at the first regular file found or at the filesystem root.
pub fn find_config_file(start_dir: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    let candidates: Vec<&Path> = explicit
        .into_iter()
        .chain(CONFIG_FILE_NAMES.iter().map(|name| Path::new(*name)))
        .collect();

    for dir in start_dir.ancestors() {
        for candidate in &candidates {
            let path = if candidate.is_absolute() {
                candidate.to_path_buf()
            } else {
                dir.join(candidate)
            };

            if path.is_file() {
                debug!("Using config file {}", path.display());
                return Some(path);
            }
        }
    }

    debug!("No config file found above {}", start_dir.display());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_file_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devflow.config.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(find_config_file(dir.path(), None), Some(path));
    }

    #[test]
    fn test_walks_up_to_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(".devflowrc");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(find_config_file(&nested, None), Some(path));
    }

    #[test]
    fn test_nearest_directory_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pkg");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("devflow.config.json"), "{}").unwrap();
        let near = nested.join(".devflowrc.json");
        std::fs::write(&near, "{}").unwrap();

        assert_eq!(find_config_file(&nested, None), Some(near));
    }

    #[test]
    fn test_name_order_within_one_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".devflowrc"), "{}").unwrap();
        let preferred = dir.path().join("devflow.config.json");
        std::fs::write(&preferred, "{}").unwrap();

        assert_eq!(find_config_file(dir.path(), None), Some(preferred));
    }

    #[test]
    fn test_directories_with_config_name_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("devflow.config.json")).unwrap();
        let file = dir.path().join(".devflowrc");
        std::fs::write(&file, "{}").unwrap();

        assert_eq!(find_config_file(dir.path(), None), Some(file));
    }

    #[test]
    fn test_explicit_absolute_path_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("devflow.config.json"), "{}").unwrap();
        let other = tempfile::tempdir().unwrap();
        let explicit = other.path().join("custom.json");
        std::fs::write(&explicit, "{}").unwrap();

        assert_eq!(
            find_config_file(dir.path(), Some(&explicit)),
            Some(explicit.clone())
        );
    }

    #[test]
    fn test_explicit_relative_path_resolves_per_level() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join(".devflowrc"), "{}").unwrap();
        let custom = dir.path().join("team.json");
        std::fs::write(&custom, "{}").unwrap();

        // The conventional file in `sub` is found before walking up to `team.json`.
        assert_eq!(
            find_config_file(&nested, Some(Path::new("team.json"))),
            Some(nested.join(".devflowrc"))
        );
    }

    #[test]
    fn test_missing_explicit_path_falls_back_to_names() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("devflow.config.json");
        std::fs::write(&file, "{}").unwrap();

        assert_eq!(
            find_config_file(dir.path(), Some(Path::new("/nonexistent/devflow.json"))),
            Some(file)
        );
    }
}
