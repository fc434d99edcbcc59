//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! PO string literal escapes
//!
//! A PO string literal is a double-quoted C-like string.  Decoding strips
//! the keyword prefix and the surrounding quotes, then replaces the
//! backslash escapes:
//! - named: `\a \b \t \n \v \f \r \" \' \\ \?`
//! - octal: exactly three digits, `\101`
//! - hex: exactly two digits, `\x41`
//!
//! Any other escaped character is kept without its backslash.

use std::ops::Range;

/// One decoded character and the byte range of the physical line it was
/// decoded from (the whole escape sequence for escaped characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedChar {
    pub ch: char,
    pub source: Range<usize>,
}

/// Decode one physical line fragment holding a quoted literal.
///
/// Everything up to the first `"` is dropped, as is a trailing `"`, so
/// both `msgid "text"` and a bare continuation `"text"` decode to `text`.
pub fn decode(line: &str) -> String {
    decode_mapped(line).into_iter().map(|d| d.ch).collect()
}

/// Decode like [`decode`], keeping the source columns of every character.
pub fn decode_mapped(line: &str) -> Vec<DecodedChar> {
    let (offset, body) = literal_body(line);
    let mut out = Vec::with_capacity(body.len());
    let mut pos = 0;

    while let Some(c) = body[pos..].chars().next() {
        let (ch, len) = if c == '\\' {
            match unescape(&body[pos + 1..]) {
                Some((ch, len)) => (ch, len + 1),
                None => ('\\', 1),
            }
        } else {
            (c, c.len_utf8())
        };

        out.push(DecodedChar {
            ch,
            source: offset + pos..offset + pos + len,
        });
        pos += len;
    }

    out
}

/// Locate the literal body: returns the byte offset of the body within
/// `line` and the body itself, without quotes.
fn literal_body(line: &str) -> (usize, &str) {
    let trimmed = line.trim_end();
    let lead = trimmed.len() - trimmed.trim_start().len();
    let trimmed = &trimmed[lead..];

    match trimmed.find('"') {
        Some(open) => {
            let body = &trimmed[open + 1..];
            (lead + open + 1, body.strip_suffix('"').unwrap_or(body))
        }
        None => (lead, trimmed),
    }
}

/// Decode the escape following a backslash.  Returns the character and the
/// number of bytes consumed after the backslash, or `None` for a lone
/// trailing backslash.
fn unescape(rest: &str) -> Option<(char, usize)> {
    let next = rest.chars().next()?;

    let named = match next {
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'v' => Some('\x0b'),
        'f' => Some('\x0c'),
        'r' => Some('\r'),
        '"' | '\'' | '\\' | '?' => Some(next),
        _ => None,
    };
    if let Some(ch) = named {
        return Some((ch, 1));
    }

    if let Some(digits) = rest.get(..3) {
        if digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
            if let Some(ch) = u32::from_str_radix(digits, 8).ok().and_then(char::from_u32) {
                return Some((ch, 3));
            }
        }
    }

    if next == 'x' {
        if let Some(digits) = rest.get(1..3) {
            if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                if let Some(ch) = u32::from_str_radix(digits, 16).ok().and_then(char::from_u32) {
                    return Some((ch, 3));
                }
            }
        }
    }

    Some((next, next.len_utf8()))
}

/// Escape a string for use as the body of a PO string literal.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);

    for ch in s.chars() {
        match ch {
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }

    out
}
