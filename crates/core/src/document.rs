use serde::Deserialize;

/// Sourcemap revision this tool understands.
pub const SUPPORTED_VERSION: u32 = 3;

/// A parsed sourcemap document, reduced to the fields source recovery
/// needs. Maps in the wild carry missing, null, or short fields, so
/// everything is optional and length mismatches between `sources` and
/// `sourcesContent` are handled at the accessor level. The VLQ `mappings`
/// data is not modeled at all.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapDocument {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub sources_content: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub source_root: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

impl SourceMapDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn is_supported_version(&self) -> bool {
        self.version == Some(SUPPORTED_VERSION)
    }

    /// The `sources` entries, empty when the field is absent or null.
    /// Duplicates keep their positions.
    pub fn sources(&self) -> &[String] {
        self.sources.as_deref().unwrap_or(&[])
    }

    /// Inline content for `sources[index]`. Out-of-range and null slots
    /// both mean the content has to be resolved elsewhere.
    pub fn content_at(&self, index: usize) -> Option<&str> {
        self.sources_content.as_ref()?.get(index)?.as_deref()
    }

    /// Extension for synthesized source names, guessed from the
    /// generated file's own name.
    pub fn guessed_extension(&self) -> &'static str {
        match &self.file {
            Some(name) if name.ends_with(".css") => "css",
            _ => "js",
        }
    }
}
