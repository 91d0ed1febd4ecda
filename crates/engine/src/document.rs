use serde::{Deserialize, Serialize};

/// Line and join counts gathered during one reflow run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowStats {
    /// Lines that were empty after stripping.
    pub blank_lines: usize,
    /// Lines that were dropped for being under the length threshold.
    pub short_lines: usize,
    /// Lines kept as paragraph content.
    pub substantial_lines: usize,
    /// Substantial lines attached to the previous one with a space.
    pub space_joins: usize,
    /// Substantial lines that replaced the previous line's trailing hyphen.
    pub hyphen_joins: usize,
}

impl ReflowStats {
    /// Number of input lines seen.
    pub fn total_lines(&self) -> usize {
        self.blank_lines + self.short_lines + self.substantial_lines
    }
}

/// Output of a reflow run: the reflowed text plus what happened to the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowedDocument {
    pub text: String,
    pub stats: ReflowStats,
}

impl ReflowedDocument {
    pub fn into_text(self) -> String {
        self.text
    }
}
