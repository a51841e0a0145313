use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};

use log::warn;
use tokio::fs;

/// Ensure the given output directory exists, creating missing parents as
/// needed. Errors when a non-directory already occupies the path.
pub fn ensure_output_dir<P: AsRef<Path>>(output_path: P) -> io::Result<()> {
    let path = output_path.as_ref();
    if path.exists() {
        if !path.is_dir() {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                "output path exists but is not a directory",
            ));
        }
        return Ok(());
    }
    std::fs::create_dir_all(path)
}

/// Where one input map's sources land. With `preserve` set, the input
/// file's own directory chain (minus root and drive components) is
/// mirrored under the output root; otherwise everything goes directly
/// under `output_dir`.
pub fn destination_root(output_dir: &Path, input: &Path, preserve: bool) -> PathBuf {
    if !preserve {
        return output_dir.to_path_buf();
    }
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let mut root = output_dir.to_path_buf();
    for component in parent.components() {
        if let Component::Normal(part) = component {
            root.push(part);
        }
    }
    root
}

// Joins a relative path under `root`, dropping rooted or parent
// components that slipped past normalization. An unusable path degrades
// to a synthesized name instead of failing the write.
fn destination_path(root: &Path, relative_path: &str) -> PathBuf {
    let mut dest = root.to_path_buf();
    let mut pushed = 0usize;
    for component in Path::new(relative_path).components() {
        if let Component::Normal(part) = component {
            dest.push(part);
            pushed += 1;
        }
    }
    if pushed == 0 {
        warn!("destination for {relative_path:?} is unusable, writing as recovered-source");
        dest.push("recovered-source");
    }
    dest
}

/// Persist one recovered source under `root`, creating missing
/// directories and overwriting any previous file at the destination.
/// Returns the path actually written.
pub async fn write_source(root: &Path, relative_path: &str, content: &str) -> io::Result<PathBuf> {
    let dest = destination_path(root, relative_path);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&dest, content).await?;
    Ok(dest)
}
