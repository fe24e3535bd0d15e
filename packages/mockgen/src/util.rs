//! Utility Module
//!
//! Go literal and identifier helpers shared by the renderers

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

const LEGAL_IDENTIFIER_RE: &str = r"^[\p{L}_][\p{L}\p{Nd}_]*$";

static LEGAL_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(LEGAL_IDENTIFIER_RE).expect("identifier pattern is valid")
});

static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}$").expect("letter pattern is valid"));

static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Nd}$").expect("digit pattern is valid"));

// Go's strconv.IsPrint: graphic characters plus the ASCII space
static NON_PRINTABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{C}\p{Z}]$").expect("printable pattern is valid"));

/// Whether `input` lexes as a single Go identifier.
pub fn is_legal_identifier(input: &str) -> bool {
    LEGAL_IDENTIFIER.is_match(input)
}

/// Unicode letter (category L), as Go's `unicode.IsLetter`.
pub fn is_letter(c: char) -> bool {
    LETTER.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Unicode decimal digit (category Nd), as Go's `unicode.IsDigit`.
pub fn is_decimal_digit(c: char) -> bool {
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}

fn is_printable(c: char) -> bool {
    c == ' ' || !NON_PRINTABLE.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Double-quoted Go string literal for `input`.
pub fn quote_go_string(input: &str) -> String {
    let mut quoted = String::with_capacity(input.len() + 2);
    quoted.push('"');
    for c in input.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0c}' => quoted.push_str("\\f"),
            '\u{0b}' => quoted.push_str("\\v"),
            c if !is_printable(c) => {
                let code = c as u32;
                if code < 0x80 {
                    let _ = write!(quoted, "\\x{:02x}", code);
                } else if code < 0x10000 {
                    let _ = write!(quoted, "\\u{:04x}", code);
                } else {
                    let _ = write!(quoted, "\\U{:08x}", code);
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Struct tag literal, raw when the tag allows it.
pub fn quote_struct_tag(tag: &str) -> String {
    if tag.contains('`') {
        quote_go_string(tag)
    } else {
        format!("`{}`", tag)
    }
}
