//! Parsing of git path listings.

/// Parse `git diff --name-only` output into trimmed, non-empty paths.
pub fn parse_name_only(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `git status --porcelain` output into the changed paths.
///
/// Each line is two status columns, whitespace, then the path. Renames and
/// copies (`old -> new`) yield the destination path; quoted paths are unquoted.
pub fn parse_porcelain(stdout: &str) -> Vec<String> {
    stdout.lines().filter_map(parse_porcelain_line).collect()
}

fn parse_porcelain_line(line: &str) -> Option<String> {
    let rest = line.get(2..)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let path = rest.trim();
    let path = path.rsplit_once(" -> ").map_or(path, |(_, to)| to);
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);

    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
