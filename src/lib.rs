//! Umbrella crate for the `reflow` tool.
//!
//! Wraps the pure [`engine`] crate with the pieces a command-line tool needs:
//! reading and decoding the input file, a typed error for that, layered
//! configuration, and `tracing` setup.
//!
//! ```no_run
//! let doc = reflow::reflow_file("chapter-01.txt")?;
//! println!("{}", doc.text);
//! # Ok::<(), reflow::ReflowError>(())
//! ```

pub use engine::{
    JoinMode, JoinState, LineKind, PARAGRAPH_BREAK, ReflowStats, ReflowedDocument, Reflower,
    SUBSTANTIAL_LINE_CHARS, classify_line, reflow, reflow_document, reflow_text, split_lines,
    strip_line,
};

pub mod config;
mod error;
mod input;
pub mod logging;

pub use crate::error::ReflowError;
pub use crate::input::{read_input, reflow_file};
