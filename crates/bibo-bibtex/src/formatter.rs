//! BibTeX output
//!
//! Fields are written one per line in name order, braced unless the value
//! is a bare number.

use std::fmt::Write;

use crate::entry::SourceEntry;

const INDENT: &str = "    ";

/// Render one entry as `@type{key,\n    field = {value},\n}`
pub fn format_entry(entry: &SourceEntry) -> String {
    let mut out = format!("@{}{{{},\n", entry.entry_type, entry.cite_key);
    for (name, value) in entry.fields() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}{} = {},", INDENT, name, delimit(value));
    }
    out.push('}');
    out
}

/// Render entries separated by a blank line
pub fn format_entries<'a>(entries: impl IntoIterator<Item = &'a SourceEntry>) -> String {
    entries
        .into_iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn delimit(value: &str) -> String {
    let numeric = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    if numeric {
        value.to_string()
    } else {
        format!("{{{}}}", value)
    }
}
