use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;
use tokio::fs;

use crate::document::{SourceMapDocument, SUPPORTED_VERSION};
use crate::normalize;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid sourcemap JSON: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    #[error("unsupported sourcemap version {0:?}, expected {}", SUPPORTED_VERSION)]
    UnsupportedVersion(Option<u32>),
}

/// Knobs for a single extraction run. Passed explicitly so nothing
/// depends on ambient state.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Overrides the document's own `sourceRoot` when resolving sources
    /// from disk.
    pub source_root_override: Option<String>,
    /// Read sources from disk even when the map inlines their content.
    pub prefer_fallback_over_inline: bool,
}

/// One recovered source file, ready for the output writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSource {
    pub relative_path: String,
    pub content: String,
}

/// Recover every source a single sourcemap document describes.
///
/// `location` is the map file's own path; sources without inline content
/// are read from disk relative to its parent directory. A source whose
/// content cannot be resolved at all degrades to an empty string rather
/// than failing the document. Entries come back in the original
/// `sources` order, duplicates included.
pub async fn extract(
    bytes: &[u8],
    location: &Path,
    opts: &ExtractOptions,
) -> Result<Vec<ExtractedSource>, ExtractError> {
    let doc = SourceMapDocument::from_slice(bytes)?;
    if !doc.is_supported_version() {
        return Err(ExtractError::UnsupportedVersion(doc.version));
    }

    let map_dir = location.parent().unwrap_or_else(|| Path::new("."));
    let source_root = opts
        .source_root_override
        .as_deref()
        .or(doc.source_root.as_deref());
    let extension = doc.guessed_extension();

    let mut extracted = Vec::with_capacity(doc.sources().len());
    for (index, raw) in doc.sources().iter().enumerate() {
        let inline = doc.content_at(index);

        let mut content = None;
        if opts.prefer_fallback_over_inline {
            content = read_fallback(map_dir, source_root, raw).await;
        }
        if content.is_none() {
            content = inline.map(str::to_owned);
        }
        if content.is_none() && !opts.prefer_fallback_over_inline {
            content = read_fallback(map_dir, source_root, raw).await;
        }

        let content = match content {
            Some(text) => text,
            None => {
                warn!(
                    "no content for source {:?} (entry {} in {})",
                    raw,
                    index,
                    location.display()
                );
                String::new()
            }
        };

        let relative_path = normalize::normalize(raw)
            .unwrap_or_else(|| normalize::synthesized_name(index, extension));
        extracted.push(ExtractedSource {
            relative_path,
            content,
        });
    }
    Ok(extracted)
}

/// Read a source from disk: the effective source root is joined onto the
/// raw identifier and the result resolved against the map's directory.
/// Anything unreadable or not a regular file is a miss, never an error.
async fn read_fallback(map_dir: &Path, source_root: Option<&str>, raw: &str) -> Option<String> {
    let joined = match source_root {
        Some(root) if !root.is_empty() => {
            if root.ends_with('/') {
                format!("{root}{raw}")
            } else {
                format!("{root}/{raw}")
            }
        }
        _ => raw.to_owned(),
    };

    let candidate = PathBuf::from(joined);
    let path = if candidate.is_absolute() {
        candidate
    } else {
        map_dir.join(candidate)
    };

    let meta = fs::metadata(&path).await.ok()?;
    if !meta.is_file() {
        return None;
    }
    fs::read_to_string(&path).await.ok()
}
