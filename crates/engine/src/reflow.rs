use crate::document::{ReflowStats, ReflowedDocument};
use crate::join::{JoinMode, JoinState};
use crate::line::{classify_line, split_lines, LineKind};

/// Appended for every blank input line.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Incremental reflow accumulator.
///
/// Feed raw lines in order with [`Reflower::push_line`], then call
/// [`Reflower::finish`]. The result depends only on the sequence of lines.
///
/// ```rust
/// use engine::Reflower;
///
/// let mut reflower = Reflower::new();
/// reflower.push_line("The first wrapped line of a paragraph, hyphen-");
/// reflower.push_line("ated across the break and carried on to the end.");
/// let doc = reflower.finish();
///
/// assert_eq!(
///     doc.text,
///     "The first wrapped line of a paragraph, hyphenated across the break and carried on to the end."
/// );
/// assert_eq!(doc.stats.hyphen_joins, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reflower {
    text: String,
    state: JoinState,
    stats: ReflowStats,
}

impl Reflower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates `capacity` bytes for the output.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn state(&self) -> JoinState {
        self.state
    }

    /// Text accumulated so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stats(&self) -> &ReflowStats {
        &self.stats
    }

    /// Processes one raw input line.
    pub fn push_line(&mut self, raw: &str) {
        match classify_line(raw) {
            LineKind::Blank => {
                self.text.push_str(PARAGRAPH_BREAK);
                self.state = JoinState::AfterParagraphBreak;
                self.stats.blank_lines += 1;
            }
            // Short lines leave both the text and the join state untouched.
            LineKind::Short => self.stats.short_lines += 1,
            LineKind::Substantial(line) => self.push_substantial(line),
        }
    }

    fn push_substantial(&mut self, line: &str) {
        match self.state.join_mode() {
            JoinMode::Append => {}
            JoinMode::ReplaceLastChar => {
                self.text.pop();
                if matches!(
                    self.state,
                    JoinState::AfterSubstantialLine {
                        ends_with_hyphen: true
                    }
                ) {
                    self.stats.hyphen_joins += 1;
                }
            }
            JoinMode::Spaced => {
                self.text.push(' ');
                self.stats.space_joins += 1;
            }
        }
        self.text.push_str(line);
        self.state = JoinState::after_substantial(line);
        self.stats.substantial_lines += 1;
    }

    pub fn finish(self) -> ReflowedDocument {
        ReflowedDocument {
            text: self.text,
            stats: self.stats,
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Reflower {
    fn extend<I: IntoIterator<Item = S>>(&mut self, lines: I) {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }
}

/// Reflows an ordered sequence of raw lines into paragraph text.
pub fn reflow<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    reflow_document(lines).into_text()
}

/// Like [`reflow`], but also returns the per-run statistics.
pub fn reflow_document<I, S>(lines: I) -> ReflowedDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reflower = Reflower::new();
    reflower.extend(lines);
    reflower.finish()
}

/// Splits `text` into lines with [`split_lines`] and reflows them.
pub fn reflow_text(text: &str) -> ReflowedDocument {
    let mut reflower = Reflower::with_capacity(text.len());
    reflower.extend(split_lines(text));
    reflower.finish()
}
