use std::fs;
use std::path::Path;

use engine::{ReflowedDocument, reflow_text};
use tracing::{debug, warn};

use crate::error::ReflowError;

/// Reads `path` fully and decodes it as UTF-8.
///
/// The contents are returned untouched; line splitting and stripping happen
/// in the engine.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, ReflowError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ReflowError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    String::from_utf8(bytes).map_err(|err| ReflowError::Decoding {
        path: path.to_path_buf(),
        source: err.utf8_error(),
    })
}

/// Reads `path` and reflows its lines into paragraphs.
pub fn reflow_file(path: impl AsRef<Path>) -> Result<ReflowedDocument, ReflowError> {
    let path = path.as_ref();
    let text = read_input(path)?;
    let doc = reflow_text(&text);

    let stats = &doc.stats;
    debug!(
        path = %path.display(),
        blank_lines = stats.blank_lines,
        short_lines = stats.short_lines,
        substantial_lines = stats.substantial_lines,
        space_joins = stats.space_joins,
        hyphen_joins = stats.hyphen_joins,
        output_bytes = doc.text.len(),
        "reflowed input"
    );
    if stats.substantial_lines == 0 && stats.total_lines() > 0 {
        warn!(
            path = %path.display(),
            lines = stats.total_lines(),
            "no line reached the paragraph length threshold; output has no text content"
        );
    }

    Ok(doc)
}
