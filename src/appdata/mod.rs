//! AppStream metadata reading for welcomegen.
//!
//! This module turns the application metadata document into escaped
//! release notes:
//! - `tree`: a small owned element tree parsed with quick-xml
//! - `extract`: release selection (first match wins) and text extraction
//! - `escape`: C string escaping and whitespace normalization
//!
//! Selecting a version that is not in the document is a normal outcome and
//! yields empty notes. Only a malformed document is an error.

mod escape;
mod extract;
mod tree;


use crate::error::Result;

// Re-export public API
pub use escape::{escape_c_string, escape_text, strip_demo};
pub use extract::{ReleaseItem, ReleaseNotes, extract_release, extract_release_notes, find_release};
pub use tree::{Element, Node, parse_document};

/// Parse `xml` and extract the notes for `version` in one step.
///
/// `source` names the document in parse errors.
pub fn read_release_notes(xml: &str, source: &str, version: &str) -> Result<ReleaseNotes> {
    let root = parse_document(xml, source)?;
    Ok(extract_release_notes(&root, version))
}
