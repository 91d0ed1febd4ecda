//! Paragraph reflow engine.
//!
//! Turns hard-wrapped plain text back into paragraphs. Each input line is
//! stripped and then handled by its length:
//!
//! - blank lines become paragraph breaks (`"\n\n"`)
//! - lines under 40 code points (page numbers, headers, stray fragments) are
//!   dropped
//! - lines of 40 or more are joined to the preceding content, with a space
//!   or, when the previous line ended in `-`, directly in place of the hyphen
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no logging. The output depends only on the
//! sequence of input lines.
//!
//! ## Behaviour worth knowing
//!
//! - A substantial line that is not preceded by a spaced join replaces the
//!   final character of the text accumulated so far. After a hyphenated line
//!   that character is the hyphen. After a paragraph break it is the second
//!   `\n`, so a break between two paragraphs comes out as a single newline.
//! - Consecutive blank lines are not collapsed.
//! - Running the engine on its own output is not a no-op.
//!
//! ```rust
//! use engine::reflow;
//!
//! let out = reflow([
//!     "This is a long enough line to pass the forty char limit-",
//!     "continuation of the previous hyphenated word here today",
//!     "",
//!     "short",
//!     "Another substantial line that also exceeds forty characters",
//! ]);
//! assert_eq!(
//!     out,
//!     "This is a long enough line to pass the forty char limit\
//!      continuation of the previous hyphenated word here today\n\
//!      Another substantial line that also exceeds forty characters"
//! );
//! ```

mod document;
mod join;
mod line;
mod reflow;

pub use crate::document::{ReflowStats, ReflowedDocument};
pub use crate::join::{JoinMode, JoinState};
pub use crate::line::{
    classify_line, split_lines, strip_line, LineKind, SplitLines, SUBSTANTIAL_LINE_CHARS,
};
pub use crate::reflow::{reflow, reflow_document, reflow_text, Reflower, PARAGRAPH_BREAK};
