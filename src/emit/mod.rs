//! Generated C output for the welcome dialog.
//!
//! Rendering is pure: it returns the full text and never touches the
//! filesystem. Placing the text in `welcome-dialog-data.h` / `.c` is up to
//! whoever runs the tool (build system redirecting stdout).

mod banner;
mod c_source;


pub use banner::BANNER;
pub use c_source::{
    DEMOS_SYMBOL, INCLUDE_GUARD, INTRO_SYMBOL, ITEMS_SYMBOL, N_INTRO_SYMBOL, N_ITEMS_SYMBOL,
    write_declarations, write_definitions,
};

use crate::appdata::ReleaseNotes;
use std::fmt::{self, Write};

/// Which file to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Extern declarations only (`--header`).
    Declarations,
    /// Populated arrays.
    #[default]
    Definitions,
}

impl OutputMode {
    /// Mode selected by the `--header` flag.
    pub fn from_header_flag(header: bool) -> Self {
        if header {
            Self::Declarations
        } else {
            Self::Definitions
        }
    }
}

/// Write the banner followed by the output for `mode`.
pub fn write_output<W: Write>(out: &mut W, notes: &ReleaseNotes, mode: OutputMode) -> fmt::Result {
    out.write_str(BANNER)?;
    writeln!(out)?;
    writeln!(out)?;

    match mode {
        OutputMode::Declarations => write_declarations(out),
        OutputMode::Definitions => write_definitions(out, notes),
    }
}

/// Render the complete generated text for `mode`.
///
/// Identical notes and mode always produce byte-identical text.
pub fn render(notes: &ReleaseNotes, mode: OutputMode) -> String {
    let mut out = String::new();
    write_output(&mut out, notes, mode).expect("writing to a String cannot fail");
    out
}
