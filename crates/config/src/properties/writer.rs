//! Writer for the properties text format.
//!
//! Escapes keys and values so that `parser::parse` reads the output back to the
//! same entries. Non-ASCII text is written as UTF-8; only control characters use
//! `\uXXXX`.

use std::fmt::Write as _;

fn escape_into(out: &mut String, text: &str, escape_all_spaces: bool) {
    for (index, c) in text.chars().enumerate() {
        match c {
            ' ' if index == 0 || escape_all_spaces => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
}

/// Render entries as `key=value` lines.
pub(crate) fn write<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (key, value) in entries {
        escape_into(&mut out, key, true);
        out.push('=');
        escape_into(&mut out, value, false);
        out.push('\n');
    }
    out
}
