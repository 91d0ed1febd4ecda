//! Join state between consecutive substantial lines.
//!
//! The engine remembers one thing across lines: what the accumulated text
//! ends with. That decides how the next substantial line is attached.
//!
//! | state | next substantial line |
//! |-------|-----------------------|
//! | [`JoinState::StartOfDocument`] | appended as is |
//! | [`JoinState::AfterParagraphBreak`] | replaces the last `\n` of the break |
//! | `AfterSubstantialLine { ends_with_hyphen: true }` | replaces the trailing `-` |
//! | `AfterSubstantialLine { ends_with_hyphen: false }` | appended after a space |
//!
//! Short lines never change the state.

use serde::{Deserialize, Serialize};

/// What the accumulated text currently ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum JoinState {
    /// Nothing has been accumulated yet.
    #[default]
    StartOfDocument,
    /// The last thing appended was a paragraph break.
    AfterParagraphBreak,
    /// The last thing appended was a substantial line.
    AfterSubstantialLine { ends_with_hyphen: bool },
}

/// How a substantial line is attached to the accumulated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// Append directly; there is nothing to drop.
    Append,
    /// Drop the final character of the accumulated text, then append.
    ReplaceLastChar,
    /// Append a single space, then the line.
    Spaced,
}

impl JoinState {
    /// State after appending the stripped substantial line `line`.
    pub fn after_substantial(line: &str) -> Self {
        JoinState::AfterSubstantialLine {
            ends_with_hyphen: line.ends_with('-'),
        }
    }

    /// How the next substantial line attaches in this state.
    pub fn join_mode(self) -> JoinMode {
        match self {
            JoinState::StartOfDocument => JoinMode::Append,
            JoinState::AfterParagraphBreak => JoinMode::ReplaceLastChar,
            JoinState::AfterSubstantialLine {
                ends_with_hyphen: true,
            } => JoinMode::ReplaceLastChar,
            JoinState::AfterSubstantialLine {
                ends_with_hyphen: false,
            } => JoinMode::Spaced,
        }
    }
}
