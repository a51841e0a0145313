use std::path::{Path, PathBuf};

use log::warn;
use regex::Regex;
use walkdir::WalkDir;

/// Collect candidate sourcemap files under `input`.
///
/// A regular file is returned as a singleton when its name matches
/// `pattern`; a directory is walked recursively. Entries are sorted by
/// file name so repeated runs process files in the same order. May be
/// empty.
pub fn find_files(input: &Path, pattern: &Regex) -> Vec<PathBuf> {
    if input.is_file() {
        if file_name_matches(input, pattern) {
            return vec![input.to_path_buf()];
        }
        return Vec::new();
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {err}", input.display());
                continue;
            }
        };
        if entry.file_type().is_file() && file_name_matches(entry.path(), pattern) {
            found.push(entry.into_path());
        }
    }
    found
}

fn file_name_matches(path: &Path, pattern: &Regex) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| pattern.is_match(name))
        .unwrap_or(false)
}
