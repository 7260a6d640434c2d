//! Parser for the properties text format.
//!
//! Responsibilities:
//! - Split input into logical lines (continuations joined, comments and blanks dropped).
//! - Split each logical line into key and value at the first unescaped separator.
//! - Decode backslash escapes, including `\uXXXX` and UTF-16 surrogate pairs.
//!
//! Does NOT handle:
//! - Reading files (see `loader/file.rs`).
//! - Writing the format back out (see `writer.rs`).
//!
//! Invariants:
//! - Natural lines end at `\n`, `\r`, or `\r\n`.
//! - Only a line ending in an odd number of backslashes continues.
//! - Comment lines are never continued.
//! - Errors carry the 1-based number of the natural line a logical line starts on.
//! - A surrogate escape without its partner decodes to U+FFFD.

use std::collections::BTreeMap;

use thiserror::Error;

/// Syntax errors in properties text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed \\uxxxx encoding on line {line}")]
    MalformedUnicodeEscape { line: usize },
}

/// Whitespace as understood by the format: space, tab, form feed.
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

struct LogicalLine {
    number: usize,
    text: String,
}

/// Parse properties text into a key/value map. Later duplicates win.
pub(crate) fn parse(input: &str) -> Result<BTreeMap<String, String>, ParseError> {
    let mut entries = BTreeMap::new();
    for line in logical_lines(input) {
        let (key, value) = split_entry(&line)?;
        entries.insert(key, value);
    }
    Ok(entries)
}

fn natural_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&input[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&input[start..]);
    }
    lines
}

fn ends_with_continuation(segment: &str) -> bool {
    segment.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut out = Vec::new();
    let mut lines = natural_lines(input).into_iter().enumerate();

    while let Some((index, raw)) = lines.next() {
        let first = raw.trim_start_matches(is_whitespace);
        if first.is_empty() || first.starts_with(['#', '!']) {
            continue;
        }

        let mut text = String::from(first);
        let mut continued = ends_with_continuation(first);
        while continued {
            text.pop();
            // A trailing backslash at end of input is dropped.
            let Some((_, next)) = lines.next() else {
                break;
            };
            let segment = next.trim_start_matches(is_whitespace);
            text.push_str(segment);
            continued = ends_with_continuation(segment);
        }

        out.push(LogicalLine {
            number: index + 1,
            text,
        });
    }
    out
}

fn split_entry(line: &LogicalLine) -> Result<(String, String), ParseError> {
    let chars: Vec<char> = line.text.chars().collect();
    let len = chars.len();

    let mut key_len = 0;
    let mut value_start = len;
    let mut has_separator = false;
    let mut preceding_backslash = false;

    while key_len < len {
        let c = chars[key_len];
        if !preceding_backslash {
            if c == '=' || c == ':' {
                value_start = key_len + 1;
                has_separator = true;
                break;
            }
            if is_whitespace(c) {
                value_start = key_len + 1;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
        key_len += 1;
    }

    while value_start < len {
        let c = chars[value_start];
        if !is_whitespace(c) {
            if !has_separator && (c == '=' || c == ':') {
                has_separator = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    let key = unescape(&chars[..key_len], line.number)?;
    let value = unescape(&chars[value_start.min(len)..], line.number)?;
    Ok((key, value))
}

fn unescape(chars: &[char], line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(&escaped) = chars.get(i) else {
            break;
        };
        i += 1;
        match escaped {
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'n' => out.push('\n'),
            'f' => out.push('\x0c'),
            'u' => {
                let unit = read_hex4(chars, i, line)?;
                i += 4;
                let low = (0xD800..0xDC00)
                    .contains(&unit)
                    .then(|| read_low_surrogate(chars, i, line))
                    .flatten();
                let decoded = match low {
                    Some(low) => {
                        i += 6;
                        char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                    }
                    None => char::from_u32(unit),
                };
                out.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

fn read_hex4(chars: &[char], start: usize, line: usize) -> Result<u32, ParseError> {
    let digits = chars
        .get(start..start + 4)
        .ok_or(ParseError::MalformedUnicodeEscape { line })?;
    digits.iter().try_fold(0u32, |acc, c| {
        c.to_digit(16)
            .map(|d| (acc << 4) | d)
            .ok_or(ParseError::MalformedUnicodeEscape { line })
    })
}

/// Read a `\uDC00`..`\uDFFF` escape at `start`, if one is there.
fn read_low_surrogate(chars: &[char], start: usize, line: usize) -> Option<u32> {
    if chars.get(start) != Some(&'\\') || chars.get(start + 1) != Some(&'u') {
        return None;
    }
    read_hex4(chars, start + 2, line)
        .ok()
        .filter(|unit| (0xDC00..0xE000).contains(unit))
}
