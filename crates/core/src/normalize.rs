use once_cell::sync::Lazy;
use regex::Regex;

// Matches a URI scheme prefix (`webpack://`, `webpack-internal://`,
// `file://`, anything of that shape) together with the authority segment
// following it, so only the path portion survives.
static SCHEME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://[^/]*/?").unwrap()
});

static DRIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]:").unwrap());

/// Normalize a raw `sources` identifier into a relative path that cannot
/// climb out of the directory it is joined under.
///
/// Scheme prefixes, query strings, drive letters, and leading separators
/// are stripped; `.` and `..` segments collapse; duplicate separators
/// disappear. A path whose `..` segments would escape its own root is
/// flattened into a single `_`-joined file name instead of being
/// rejected, so the source still gets written somewhere predictable.
/// Returns `None` when nothing usable remains.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.split(['?', '#']).next().unwrap_or(raw);
    let stripped = SCHEME_RE.replace(trimmed, "");
    let slashed = stripped.replace('\\', "/");
    let path = DRIVE_RE.replace(&slashed, "");

    let mut kept: Vec<&str> = Vec::new();
    let mut escaped = false;
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if kept.pop().is_none() {
                    escaped = true;
                }
            }
            seg => kept.push(seg),
        }
    }

    if kept.is_empty() {
        return None;
    }
    if escaped {
        return Some(kept.join("_"));
    }
    Some(kept.join("/"))
}

/// Name used when an identifier normalizes to nothing. The positional
/// index keeps entries from one document distinct.
pub fn synthesized_name(index: usize, extension: &str) -> String {
    format!("unnamed-{index}.{extension}")
}
