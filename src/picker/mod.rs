//! Interactive selection of changed files.

use std::io::{self, Write};

use dialoguer::Input;

use crate::error::PickerError;

/// Parse a selection such as `1,3,5-8` or `a` into zero-based indexes.
///
/// Numbers are one-based. Ranges are inclusive and may be written in either
/// direction. Invalid or out-of-range tokens are skipped, and each index
/// appears once, in the order first selected.
pub fn parse_selection(input: &str, count: usize) -> Vec<usize> {
    let raw = input.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    if raw.eq_ignore_ascii_case("a") || raw.eq_ignore_ascii_case("all") {
        return (0..count).collect();
    }

    let mut selected = Vec::new();
    let mut push = |number: usize| {
        if (1..=count).contains(&number) && !selected.contains(&(number - 1)) {
            selected.push(number - 1);
        }
    };

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some((start, end)) = token.split_once('-') {
            let (Ok(start), Ok(end)) = (start.trim().parse::<usize>(), end.trim().parse::<usize>())
            else {
                continue;
            };
            // Clamp so a huge range cannot spin for long.
            let lo = start.min(end).max(1);
            let hi = start.max(end).min(count);
            for number in lo..=hi {
                push(number);
            }
        } else if let Ok(number) = token.parse::<usize>() {
            push(number);
        }
    }

    selected
}

/// Write the numbered candidate list and selection hint to `writer`.
pub fn write_choices<W: Write>(writer: &mut W, title: &str, files: &[String]) -> io::Result<()> {
    writeln!(writer, "{}", title)?;
    for (i, file) in files.iter().enumerate() {
        writeln!(writer, "  {}) {}", i + 1, file)?;
    }
    writeln!(writer, "Select files by number (e.g. 1,3,5-8) or type \"a\" for all.")
}

/// Show `files` as a numbered list on stderr and ask which to keep.
///
/// Returns the chosen files in selection order. An empty candidate list
/// returns immediately without prompting.
pub fn pick_files(title: &str, files: &[String]) -> Result<Vec<String>, PickerError> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    write_choices(&mut io::stderr().lock(), title, files).map_err(|_| PickerError::Cancelled)?;

    let answer: String = Input::new()
        .with_prompt("Selection")
        .allow_empty(true)
        .interact_text()
        .map_err(|_| PickerError::Cancelled)?;

    Ok(parse_selection(&answer, files.len())
        .into_iter()
        .map(|i| files[i].clone())
        .collect())
}
