//! Positional parsing for the fixed-schema delimited resource.
//!
//! The resource is comma-delimited with optional `"`-quoted fields; a quote
//! inside a quoted field is doubled. Fields never span rows, so parsing is
//! line by line and never binds column names.

use std::iter::Peekable;
use std::str::Chars;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Split one row into its fields.
///
/// Returns `None` when the row is malformed: an unclosed quote, or stray
/// characters after a closing quote.
pub(crate) fn parse_line(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        if chars.peek() == Some(&QUOTE) {
            chars.next();
            fields.push(read_quoted(&mut chars)?);
            match chars.next() {
                None => break,
                Some(DELIMITER) => {}
                Some(_) => return None,
            }
        } else {
            let mut field = String::new();
            let mut saw_delimiter = false;
            for c in chars.by_ref() {
                if c == DELIMITER {
                    saw_delimiter = true;
                    break;
                }
                field.push(c);
            }
            fields.push(field);
            if !saw_delimiter {
                break;
            }
        }
    }

    Some(fields)
}

/// Consume a quoted field body after its opening quote.
fn read_quoted(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut field = String::new();
    while let Some(c) = chars.next() {
        if c == QUOTE {
            if chars.peek() == Some(&QUOTE) {
                chars.next();
                field.push(QUOTE);
            } else {
                return Some(field);
            }
        } else {
            field.push(c);
        }
    }
    // Ran out of input before the closing quote.
    None
}
