//! Line splitting and classification.
//!
//! Every input record is stripped of surrounding whitespace and then sorted
//! into one of three buckets by its length in code points:
//!
//! | stripped length | kind |
//! |-----------------|------|
//! | 0 | [`LineKind::Blank`] |
//! | 1..=39 | [`LineKind::Short`] |
//! | >= 40 | [`LineKind::Substantial`] |
//!
//! Length is a plain `char` count. East Asian wide characters and combining
//! marks count as one each.
//!
//! ```rust
//! use engine::{classify_line, LineKind};
//!
//! assert_eq!(classify_line("   \t"), LineKind::Blank);
//! assert_eq!(classify_line("page 12"), LineKind::Short);
//! ```

use std::iter::FusedIterator;

/// Minimum stripped length, in code points, for a line to count as content.
pub const SUBSTANTIAL_LINE_CHARS: usize = 40;

/// Classification of a single stripped input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing left after stripping. Marks a paragraph boundary.
    Blank,
    /// Fewer than [`SUBSTANTIAL_LINE_CHARS`] code points. Dropped.
    Short,
    /// Paragraph content, carrying the stripped text.
    Substantial(&'a str),
}

// Unicode white space plus the ASCII information separators (FS, GS, RS, US),
// which plain-text line stripping also treats as blank.
fn is_strippable(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Removes leading and trailing whitespace from a raw line.
pub fn strip_line(raw: &str) -> &str {
    raw.trim_matches(is_strippable)
}

/// Strips `raw` and classifies what remains.
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = strip_line(raw);
    if line.is_empty() {
        return LineKind::Blank;
    }
    // A char is at least one byte, so a short byte length settles it early.
    if line.len() < SUBSTANTIAL_LINE_CHARS || line.chars().count() < SUBSTANTIAL_LINE_CHARS {
        return LineKind::Short;
    }
    LineKind::Substantial(line)
}

/// Splits text on `\n`, `\r\n` and lone `\r`.
///
/// Terminators are not included in the yielded lines, and a terminator at the
/// very end of the text does not produce a trailing empty line.
///
/// ```rust
/// use engine::split_lines;
///
/// let lines: Vec<&str> = split_lines("one\r\ntwo\rthree\n\nfour\n").collect();
/// assert_eq!(lines, ["one", "two", "three", "", "four"]);
/// ```
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|ch: char| ch == '\n' || ch == '\r') {
            Some(idx) => {
                let line = &self.rest[..idx];
                let tail = &self.rest[idx..];
                let terminator = if tail.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &tail[terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl FusedIterator for SplitLines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_information_separators() {
        assert_eq!(strip_line("\u{1f}\u{1c} text \u{1d}\u{1e}"), "text");
        assert_eq!(strip_line("\u{a0}\u{3000}text\u{2003}"), "text");
    }

    #[test]
    fn blank_after_stripping() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line(" \t\u{0b}\u{0c}"), LineKind::Blank);
    }

    #[test]
    fn boundary_at_forty_chars() {
        let thirty_nine = "a".repeat(39);
        let forty = "a".repeat(40);
        assert_eq!(classify_line(&thirty_nine), LineKind::Short);
        assert_eq!(classify_line(&forty), LineKind::Substantial(forty.as_str()));
    }

    #[test]
    fn length_is_measured_after_stripping() {
        let padded = format!("      {}      ", "b".repeat(39));
        assert_eq!(classify_line(&padded), LineKind::Short);

        let padded = format!("\t{}\t", "b".repeat(40));
        assert_eq!(
            classify_line(&padded),
            LineKind::Substantial("b".repeat(40).as_str())
        );
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        // 39 code points but 78 bytes.
        let accented = "é".repeat(39);
        assert!(accented.len() >= SUBSTANTIAL_LINE_CHARS);
        assert_eq!(classify_line(&accented), LineKind::Short);

        let wide = "漢".repeat(40);
        assert_eq!(classify_line(&wide), LineKind::Substantial(wide.as_str()));
    }

    #[test]
    fn split_handles_every_terminator() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, ["a", "b", "c", "d"]);
    }

    #[test]
    fn split_keeps_interior_blank_lines() {
        let lines: Vec<&str> = split_lines("a\n\n\nb\n").collect();
        assert_eq!(lines, ["a", "", "", "b"]);

        let lines: Vec<&str> = split_lines("\r\n\r\n").collect();
        assert_eq!(lines, ["", ""]);
    }

    #[test]
    fn split_empty_text_yields_nothing() {
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn split_cr_then_lf_pairs_once() {
        // "\r\r\n" is a lone CR followed by a CRLF, leaving one empty line.
        let lines: Vec<&str> = split_lines("x\r\r\ny").collect();
        assert_eq!(lines, ["x", "", "y"]);
    }
}
