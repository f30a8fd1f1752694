//! C declarations and definitions for the welcome dialog data.

use crate::appdata::{ReleaseNotes, escape_c_string};
use std::fmt::{self, Write};

/// Include guard of the declarations file.
pub const INCLUDE_GUARD: &str = "__WELCOME_DIALOG_DATA_H__";

pub const N_ITEMS_SYMBOL: &str = "gimp_welcome_dialog_n_items";
pub const ITEMS_SYMBOL: &str = "gimp_welcome_dialog_items";
pub const DEMOS_SYMBOL: &str = "gimp_welcome_dialog_demos";
pub const N_INTRO_SYMBOL: &str = "gimp_welcome_dialog_intro_n_paragraphs";
pub const INTRO_SYMBOL: &str = "gimp_welcome_dialog_intro";

/// Write the include-guarded extern declarations. No data.
pub fn write_declarations<W: Write>(out: &mut W) -> fmt::Result {
    writeln!(out, "#ifndef {}", INCLUDE_GUARD)?;
    writeln!(out, "#define {}", INCLUDE_GUARD)?;
    writeln!(out)?;
    writeln!(out)?;

    writeln!(out, "extern gint          {};", N_ITEMS_SYMBOL)?;
    writeln!(out, "extern const gchar * {}[];", ITEMS_SYMBOL)?;
    writeln!(out, "extern const gchar * {}[];", DEMOS_SYMBOL)?;
    writeln!(out)?;
    writeln!(out, "extern gint          {};", N_INTRO_SYMBOL)?;
    writeln!(out, "extern const gchar * {}[];", INTRO_SYMBOL)?;

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "#endif /* {} */", INCLUDE_GUARD)
}

/// Write the populated arrays and their counts.
///
/// Every array ends with a `NULL` sentinel. The demo array has one entry per
/// item (`NULL` when the item has no demo) before its own sentinel.
pub fn write_definitions<W: Write>(out: &mut W, notes: &ReleaseNotes) -> fmt::Result {
    writeln!(out, "#include \"config.h\"")?;
    writeln!(out, "#include <glib.h>")?;
    writeln!(out)?;

    writeln!(out, "const gint   {} = {};", N_ITEMS_SYMBOL, notes.items.len())?;
    writeln!(out)?;
    write_array(out, ITEMS_SYMBOL, notes.items.iter().map(|item| Some(item.text.as_str())))?;
    writeln!(out)?;
    let demos: Vec<Option<String>> = notes.demos().map(|demo| demo.map(escape_c_string)).collect();
    write_array(out, DEMOS_SYMBOL, demos.iter().map(Option::as_deref))?;
    writeln!(out)?;

    writeln!(out, "const gint   {} = {};", N_INTRO_SYMBOL, notes.introduction.len())?;
    writeln!(out)?;
    write_array(out, INTRO_SYMBOL, notes.introduction.iter().map(|p| Some(p.as_str())))
}

/// Write a NULL-terminated `const gchar *` array. Entries must already be escaped.
fn write_array<'a, W, I>(out: &mut W, symbol: &str, entries: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = Option<&'a str>>,
{
    writeln!(out, "const gchar *{}[] =", symbol)?;
    writeln!(out, "{{")?;
    for entry in entries {
        match entry {
            Some(text) => writeln!(out, "  \"{}\",", text)?,
            None => writeln!(out, "  NULL,")?,
        }
    }
    writeln!(out, "  NULL,")?;
    writeln!(out, "}};")
}
